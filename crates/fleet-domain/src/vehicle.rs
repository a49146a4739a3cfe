//! Vehicle choice sets.

use crate::choice::choice_enum;

choice_enum! {
    /// Body category of a vehicle.
    pub enum VehicleCategory : "vehicle category" {
        Car => ("osobowy", "Osobowy"),
        Truck => ("ciężarowy", "Ciężarowy"),
        Trailer => ("naczepa", "Naczepa"),
        TractorUnit => ("ciągnik siodłowy", "Ciągnik siodłowy"),
    }
}

choice_enum! {
    /// Fuel a vehicle runs on.
    pub enum FuelType : "fuel type" {
        Petrol => ("benzyna", "Pb95"),
        Diesel => ("olej napędowy", "ON"),
    }
}

choice_enum! {
    /// How the company holds the vehicle.
    pub enum OwnershipType : "ownership type" {
        CompanyOwned => ("srodek_wlasny", "Własność Spółki"),
        Leasing => ("leasing", "LEASING"),
    }
}
