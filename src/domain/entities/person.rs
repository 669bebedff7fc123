//! Person entity holding contact and identity data.

use super::Entity;

/// A natural person. Document and phone numbers are stored as integers.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Person {
    pub person_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub document: i64,
    pub phone_number: i64,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub document: i64,
    pub phone_number: i64,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub document: Option<i64>,
    pub phone_number: Option<i64>,
    pub email: Option<String>,
}

impl Entity for Person {
    const LABEL: &'static str = "Person";
    type Draft = NewPerson;
    type Patch = PersonPatch;
}
