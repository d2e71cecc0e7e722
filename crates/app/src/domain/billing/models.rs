//! Billing Profile Models

use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        billing::{document_type::DocumentType, errors::BillingError, tax_id::TaxId},
        users::models::UserId,
    },
    ids::TypedId,
};

/// Billing Profile Id
pub type BillingProfileId = TypedId<BillingProfile>;

/// Tax identity a user bills against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingProfile {
    pub id: BillingProfileId,

    #[serde(rename = "usuarioId")]
    pub user_id: UserId,

    #[serde(rename = "tipoDocumento")]
    pub document_type: DocumentType,

    #[serde(rename = "rut")]
    pub tax_id: String,

    #[serde(rename = "razonSocial")]
    pub business_name: String,
}

impl BillingProfile {
    /// Check the profile can back a tax document, returning the parsed RUT.
    ///
    /// # Errors
    ///
    /// Returns [`BillingError::InvalidTaxId`] for a bad RUT and
    /// [`BillingError::MissingBusinessName`] for a blank business name.
    pub fn validate(&self) -> Result<TaxId, BillingError> {
        let tax_id = self.tax_id.parse::<TaxId>()?;

        if self.business_name.trim().is_empty() {
            return Err(BillingError::MissingBusinessName);
        }

        Ok(tax_id)
    }
}
