pub mod cost;
pub mod employee;
pub mod fuel_card;
pub mod insurance_company;
pub mod insurance_policy;
pub mod record;
pub mod repair;
pub mod technical_inspection;
pub mod tire_set;
pub mod vehicle;
pub mod workshop;
