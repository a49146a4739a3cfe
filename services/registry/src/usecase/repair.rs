use chrono::NaiveDate;
use validator::Validate;

use fleet_domain::id::{RepairId, VehicleId};

use crate::domain::types::Repair;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct RepairInput {
    #[validate(length(max = 255))]
    pub repair_number: String,
    pub repaired_on: NaiveDate,
    pub notes: String,
    pub vehicle_id: VehicleId,
}

impl RecordInput for RepairInput {
    type Record = Repair;

    fn into_record(self, id: RepairId) -> Result<Repair, RegistryError> {
        Ok(Repair {
            id,
            repair_number: self.repair_number,
            repaired_on: self.repaired_on,
            notes: self.notes,
            vehicle_id: self.vehicle_id,
        })
    }
}
