//! Payment DTOs and mapping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Resource, non_blank, not_blank};
use crate::domain::entities::{NewPayment, Payment, PaymentPatch};
use crate::error::AppError;

/// Payment as exchanged over the API. The payment date is server-assigned
/// and not part of the contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    #[serde(default)]
    pub payment_id: i32,

    #[serde(default)]
    pub payment_method: String,

    #[serde(default)]
    pub amount: Decimal,

    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Payment activity is required"))]
    pub activity: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPartialDto {
    pub payment_method: Option<String>,
    pub amount: Option<Decimal>,
    pub activity: Option<String>,
}

impl Resource for Payment {
    type Dto = PaymentDto;
    type PartialDto = PaymentPartialDto;

    fn dto_id(dto: &PaymentDto) -> i32 {
        dto.payment_id
    }

    fn into_dto(self) -> PaymentDto {
        PaymentDto {
            payment_id: self.payment_id,
            payment_method: self.payment_method,
            amount: self.amount,
            activity: self.activity,
        }
    }

    fn draft_from(dto: PaymentDto) -> Result<NewPayment, AppError> {
        Ok(NewPayment {
            payment_method: dto.payment_method,
            amount: dto.amount,
            activity: dto.activity,
        })
    }

    fn patch_from(dto: PaymentPartialDto) -> Result<PaymentPatch, AppError> {
        Ok(PaymentPatch {
            payment_method: non_blank(dto.payment_method),
            amount: dto.amount,
            activity: non_blank(dto.activity),
        })
    }
}
