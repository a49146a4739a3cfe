//! Domain types shared across the fleet registry.
//!
//! This crate contains only pure types with no framework dependencies:
//! record identifiers, the closed choice sets stored on fleet records, and
//! pagination. Import in `usecase/` and `domain/` layers.

pub mod choice;
pub mod cost_center;
pub mod fuel_card;
pub mod id;
pub mod insurance;
pub mod pagination;
pub mod tire;
pub mod vehicle;
