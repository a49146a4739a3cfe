use chrono::NaiveDate;
use validator::Validate;

use fleet_domain::id::{TechnicalInspectionId, VehicleId};

use crate::domain::types::TechnicalInspection;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct TechnicalInspectionInput {
    #[validate(length(max = 255))]
    pub inspection_number: String,
    pub inspected_on: NaiveDate,
    pub notes: String,
    pub vehicle_id: VehicleId,
}

impl RecordInput for TechnicalInspectionInput {
    type Record = TechnicalInspection;

    fn into_record(
        self,
        id: TechnicalInspectionId,
    ) -> Result<TechnicalInspection, RegistryError> {
        Ok(TechnicalInspection {
            id,
            inspection_number: self.inspection_number,
            inspected_on: self.inspected_on,
            notes: self.notes,
            vehicle_id: self.vehicle_id,
        })
    }
}
