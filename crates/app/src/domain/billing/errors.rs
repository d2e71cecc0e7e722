//! Billing errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxIdError {
    #[error("tax id is empty")]
    Empty,

    #[error("tax id is not in NNNNNNNN-D form")]
    InvalidFormat,

    #[error("tax id check digit should be {expected}")]
    CheckDigitMismatch { expected: char },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BillingError {
    #[error("invalid tax id: {0}")]
    InvalidTaxId(#[from] TaxIdError),

    #[error("business name is required")]
    MissingBusinessName,
}
