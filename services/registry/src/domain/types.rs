use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use fleet_core::money::format_money;
use fleet_domain::cost_center::CostCenter;
use fleet_domain::fuel_card::{CardType, SpendingLimit};
use fleet_domain::id::{
    CostId, EmployeeId, FuelCardId, InsuranceCompanyId, InsurancePolicyId, RecordId, RepairId,
    TechnicalInspectionId, TireSetId, VehicleId, WorkshopId,
};
use fleet_domain::insurance::CoverageTier;
use fleet_domain::tire::{TireCategory, TireCondition};
use fleet_domain::vehicle::{FuelType, OwnershipType, VehicleCategory};

/// A stored fleet record with a synthetic identifier.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
    type Id: RecordId;

    /// Entity name used in error messages and logs.
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;
}

macro_rules! impl_record {
    ($record:ty, $id:ty, $entity:literal) => {
        impl Record for $record {
            type Id = $id;

            const ENTITY: &'static str = $entity;

            fn id(&self) -> Self::Id {
                self.id
            }
        }
    };
}

/// A vehicle held by the company.
///
/// `plate_number` and `vin` are free text; neither is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub make: String,
    pub model: String,
    pub category: VehicleCategory,
    pub production_year: i32,
    pub plate_number: String,
    pub first_registration_year: i32,
    pub vin: String,
    /// Horsepower.
    pub power: f64,
    /// Litres.
    pub engine_displacement: f64,
    pub fuel_type: FuelType,
    pub ownership: OwnershipType,
}

/// A fuel card. `plate_number` is not checked against any vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelCard {
    pub id: FuelCardId,
    pub card_number: String,
    pub plate_number: String,
    pub expires_on: NaiveDate,
    pub pin: String,
    pub card_type: CardType,
    pub is_active: bool,
    pub spending_limit: Option<SpendingLimit>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuranceCompany {
    pub id: InsuranceCompanyId,
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workshop {
    pub id: WorkshopId,
    pub name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    /// NIP.
    pub tax_id: String,
    /// REGON.
    pub statistical_id: String,
    pub phone: String,
    pub email: String,
    pub contact_person: String,
}

/// An employee. `plate_number` names the assigned car as text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub department: String,
    pub plate_number: String,
    pub cost_center: CostCenter,
}

/// Insurance policy owned by both its insurer and its vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsurancePolicy {
    pub id: InsurancePolicyId,
    pub policy_number: String,
    pub insurance_company_id: InsuranceCompanyId,
    pub vehicle_id: VehicleId,
    pub coverage: CoverageTier,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl InsurancePolicy {
    /// Whether the coverage window is well-formed. Not enforced on write.
    pub fn has_valid_period(&self) -> bool {
        self.ends_on >= self.starts_on
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechnicalInspection {
    pub id: TechnicalInspectionId,
    pub inspection_number: String,
    pub inspected_on: NaiveDate,
    pub notes: String,
    pub vehicle_id: VehicleId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repair {
    pub id: RepairId,
    pub repair_number: String,
    pub repaired_on: NaiveDate,
    pub notes: String,
    pub vehicle_id: VehicleId,
}

/// Condition of each wheel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelConditions {
    pub front_left: TireCondition,
    pub rear_left: TireCondition,
    pub front_right: TireCondition,
    pub rear_right: TireCondition,
}

impl WheelConditions {
    /// Every wheel in the same condition.
    pub fn uniform(condition: TireCondition) -> Self {
        Self {
            front_left: condition,
            rear_left: condition,
            front_right: condition,
            rear_right: condition,
        }
    }

    /// True when no wheel is flagged for replacement or damaged.
    pub fn all_good(&self) -> bool {
        [
            self.front_left,
            self.rear_left,
            self.front_right,
            self.rear_right,
        ]
        .iter()
        .all(|c| *c == TireCondition::Good)
    }
}

/// A tire set. `plate_number` is not checked against any vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TireSet {
    pub id: TireSetId,
    pub plate_number: String,
    pub category: TireCategory,
    pub size: String,
    pub wheels: WheelConditions,
    pub remarks: String,
}

/// A cost booked against a vehicle.
///
/// There is no stored total on the record: [`Cost::total`] is derived from
/// `parts` and `labor`, and the persistence layer recomputes its column on
/// every write.
///
/// On a write, a `None` side is 0 for a new cost and keeps the stored value
/// on an update. Costs read back from storage carry both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cost {
    pub id: CostId,
    pub incurred_on: NaiveDate,
    pub amount: Decimal,
    pub description: String,
    pub parts: Option<Decimal>,
    pub labor: Option<Decimal>,
    pub vehicle_id: VehicleId,
}

impl Cost {
    /// Sum of the sides present on this record.
    pub fn total(&self) -> Decimal {
        self.parts.unwrap_or_default() + self.labor.unwrap_or_default()
    }
}

impl_record!(Vehicle, VehicleId, "vehicle");
impl_record!(FuelCard, FuelCardId, "fuel card");
impl_record!(InsuranceCompany, InsuranceCompanyId, "insurance company");
impl_record!(Workshop, WorkshopId, "workshop");
impl_record!(Employee, EmployeeId, "employee");
impl_record!(InsurancePolicy, InsurancePolicyId, "insurance policy");
impl_record!(TechnicalInspection, TechnicalInspectionId, "technical inspection");
impl_record!(Repair, RepairId, "repair");
impl_record!(TireSet, TireSetId, "tire set");
impl_record!(Cost, CostId, "cost");

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.make, self.model)
    }
}

impl fmt::Display for FuelCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.card_number, self.card_type)
    }
}

impl fmt::Display for InsuranceCompany {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Workshop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for InsurancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.policy_number)
    }
}

impl fmt::Display for TechnicalInspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspection_number)
    }
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repair_number)
    }
}

impl fmt::Display for TireSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ogumienie - {} - {}", self.plate_number, self.category)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} PLN ({})",
            self.description,
            format_money(self.amount),
            self.incurred_on
        )
    }
}
