use validator::Validate;

use fleet_domain::id::TireSetId;

use crate::domain::types::{TireSet, WheelConditions};
use crate::domain::validate::parse_choice;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct TireSetInput {
    #[validate(length(max = 20))]
    pub plate_number: String,
    /// `"letnie"`, `"zimowe"` or `"całoroczne"`.
    pub category: String,
    /// e.g. `"205/55 R16"`.
    #[validate(length(max = 20))]
    pub size: String,
    pub front_left: String,
    pub rear_left: String,
    pub front_right: String,
    pub rear_right: String,
    pub remarks: String,
}

impl RecordInput for TireSetInput {
    type Record = TireSet;

    fn into_record(self, id: TireSetId) -> Result<TireSet, RegistryError> {
        Ok(TireSet {
            id,
            category: parse_choice("category", &self.category)?,
            wheels: WheelConditions {
                front_left: parse_choice("front_left", &self.front_left)?,
                rear_left: parse_choice("rear_left", &self.rear_left)?,
                front_right: parse_choice("front_right", &self.front_right)?,
                rear_right: parse_choice("rear_right", &self.rear_right)?,
            },
            plate_number: self.plate_number,
            size: self.size,
            remarks: self.remarks,
        })
    }
}
