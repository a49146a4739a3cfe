//! Table definitions for the fleet registry.
//!
//! One entity per record type. Owning references (`vehicle_id`,
//! `insurance_company_id`) are foreign keys with `ON DELETE CASCADE`;
//! plate-number columns are plain text with no constraint.

pub mod costs;
pub mod employees;
pub mod fuel_cards;
pub mod insurance_companies;
pub mod insurance_policies;
pub mod repairs;
pub mod technical_inspections;
pub mod tire_sets;
pub mod vehicles;
pub mod workshops;
