use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::{Validate, ValidationError};

use fleet_domain::id::{CostId, VehicleId};

use crate::domain::types::Cost;
use crate::domain::validate::{validate_cost_total, validate_money};
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

/// Fields of a cost. A missing `parts` or `labor` is 0 on create and keeps
/// the stored value on update; the total is never taken from the caller.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_cost_input"))]
pub struct CostInput {
    pub incurred_on: NaiveDate,
    #[validate(custom = "validate_money")]
    pub amount: Decimal,
    pub description: String,
    #[validate(custom = "validate_money")]
    pub parts: Option<Decimal>,
    #[validate(custom = "validate_money")]
    pub labor: Option<Decimal>,
    pub vehicle_id: VehicleId,
}

fn validate_cost_input(input: &CostInput) -> Result<(), ValidationError> {
    validate_cost_total(
        input.parts.unwrap_or_default(),
        input.labor.unwrap_or_default(),
    )
}

impl RecordInput for CostInput {
    type Record = Cost;

    fn into_record(self, id: CostId) -> Result<Cost, RegistryError> {
        Ok(Cost {
            id,
            incurred_on: self.incurred_on,
            amount: self.amount,
            description: self.description,
            parts: self.parts,
            labor: self.labor,
            vehicle_id: self.vehicle_id,
        })
    }
}
