//! Billing

pub mod document_type;
pub mod errors;
pub mod models;
pub mod tax_id;

pub use document_type::DocumentType;
pub use errors::{BillingError, TaxIdError};
pub use models::{BillingProfile, BillingProfileId};
pub use tax_id::TaxId;
