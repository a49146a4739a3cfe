use fleet_domain::id::{InsuranceCompanyId, VehicleId};

/// Registry error variants.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid field values: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("invalid {field}: {value:?} is not an accepted value")]
    InvalidChoice { field: &'static str, value: String },
    #[error("vehicle {0} does not exist")]
    VehicleNotFound(VehicleId),
    #[error("insurance company {0} does not exist")]
    InsuranceCompanyNotFound(InsuranceCompanyId),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("persistence error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl RegistryError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::InvalidChoice { .. } => "INVALID_CHOICE",
            Self::VehicleNotFound(_) | Self::InsuranceCompanyNotFound(_) => "REFERENCE_NOT_FOUND",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Field value rejected before anything was written.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidChoice { .. })
    }

    /// Owning reference points at a record that does not exist.
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            Self::VehicleNotFound(_) | Self::InsuranceCompanyNotFound(_)
        )
    }
}
