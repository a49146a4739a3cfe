use validator::Validate;

use fleet_domain::id::VehicleId;

use crate::domain::types::Vehicle;
use crate::domain::validate::parse_choice;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

/// Fields of a vehicle. Choice fields carry stored values
/// (`"osobowy"`, `"olej napędowy"`, `"srodek_wlasny"`, …).
#[derive(Debug, Clone, Validate)]
pub struct VehicleInput {
    #[validate(length(max = 255))]
    pub make: String,
    #[validate(length(max = 255))]
    pub model: String,
    pub category: String,
    pub production_year: i32,
    #[validate(length(max = 20))]
    pub plate_number: String,
    pub first_registration_year: i32,
    #[validate(length(max = 17))]
    pub vin: String,
    pub power: f64,
    pub engine_displacement: f64,
    pub fuel_type: String,
    pub ownership: String,
}

impl RecordInput for VehicleInput {
    type Record = Vehicle;

    fn into_record(self, id: VehicleId) -> Result<Vehicle, RegistryError> {
        Ok(Vehicle {
            id,
            category: parse_choice("category", &self.category)?,
            fuel_type: parse_choice("fuel_type", &self.fuel_type)?,
            ownership: parse_choice("ownership", &self.ownership)?,
            make: self.make,
            model: self.model,
            production_year: self.production_year,
            plate_number: self.plate_number,
            first_registration_year: self.first_registration_year,
            vin: self.vin,
            power: self.power,
            engine_displacement: self.engine_displacement,
        })
    }
}
