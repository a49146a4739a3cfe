//! Newtype wrappers for record identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored record.
pub trait RecordId:
    Copy + Eq + fmt::Debug + fmt::Display + Into<Uuid> + From<Uuid> + Send + Sync + 'static
{
    /// Allocate a fresh time-ordered identifier.
    fn generate() -> Self;
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl RecordId for $name {
            fn generate() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

record_id!(
    /// Identifies a vehicle.
    VehicleId
);
record_id!(
    /// Identifies a fuel card.
    FuelCardId
);
record_id!(
    /// Identifies an insurance company.
    InsuranceCompanyId
);
record_id!(
    /// Identifies a workshop.
    WorkshopId
);
record_id!(
    /// Identifies an employee.
    EmployeeId
);
record_id!(
    /// Identifies an insurance policy.
    InsurancePolicyId
);
record_id!(
    /// Identifies a technical inspection.
    TechnicalInspectionId
);
record_id!(
    /// Identifies a repair.
    RepairId
);
record_id!(
    /// Identifies a tire set.
    TireSetId
);
record_id!(
    /// Identifies a cost entry.
    CostId
);
