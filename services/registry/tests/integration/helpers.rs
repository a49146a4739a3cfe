use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use fleet_domain::id::{InsuranceCompanyId, VehicleId};
use fleet_registry::domain::types::{InsuranceCompany, Vehicle};
use fleet_registry::infra::bootstrap::create_schema;
use fleet_registry::infra::db::{DbInsuranceCompanyRepository, DbVehicleRepository};
use fleet_registry::usecase::cost::CostInput;
use fleet_registry::usecase::insurance_company::InsuranceCompanyInput;
use fleet_registry::usecase::insurance_policy::InsurancePolicyInput;
use fleet_registry::usecase::record::CreateRecordUseCase;
use fleet_registry::usecase::repair::RepairInput;
use fleet_registry::usecase::technical_inspection::TechnicalInspectionInput;
use fleet_registry::usecase::vehicle::VehicleInput;

// ── Database ─────────────────────────────────────────────────────────────────

/// Fresh in-memory SQLite database with every registry table.
///
/// One pooled connection: each in-memory connection is its own database.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    create_schema(&db).await.unwrap();
    db
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Money amount with two decimal places, e.g. `money(10050)` is 100.50.
pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn vehicle_input(plate_number: &str) -> VehicleInput {
    VehicleInput {
        make: "Skoda".to_owned(),
        model: "Octavia".to_owned(),
        category: "osobowy".to_owned(),
        production_year: 2020,
        plate_number: plate_number.to_owned(),
        first_registration_year: 2020,
        vin: "TMBJJ7NE5L0123456".to_owned(),
        power: 150.0,
        engine_displacement: 2.0,
        fuel_type: "benzyna".to_owned(),
        ownership: "srodek_wlasny".to_owned(),
    }
}

pub fn company_input(name: &str) -> InsuranceCompanyInput {
    InsuranceCompanyInput {
        name: name.to_owned(),
        street: "ul. Prosta 68".to_owned(),
        city: "Warszawa".to_owned(),
        postal_code: "00-838".to_owned(),
    }
}

pub fn policy_input(
    company_id: InsuranceCompanyId,
    vehicle_id: VehicleId,
    policy_number: &str,
) -> InsurancePolicyInput {
    InsurancePolicyInput {
        policy_number: policy_number.to_owned(),
        insurance_company_id: company_id,
        vehicle_id,
        coverage: "złoty".to_owned(),
        starts_on: date(2024, 1, 1),
        ends_on: date(2024, 12, 31),
    }
}

pub fn inspection_input(vehicle_id: VehicleId, number: &str) -> TechnicalInspectionInput {
    TechnicalInspectionInput {
        inspection_number: number.to_owned(),
        inspected_on: date(2024, 3, 15),
        notes: "bez usterek".to_owned(),
        vehicle_id,
    }
}

pub fn repair_input(vehicle_id: VehicleId, number: &str) -> RepairInput {
    RepairInput {
        repair_number: number.to_owned(),
        repaired_on: date(2024, 4, 2),
        notes: "wymiana tarcz".to_owned(),
        vehicle_id,
    }
}

pub fn cost_input(
    vehicle_id: VehicleId,
    parts: Option<Decimal>,
    labor: Option<Decimal>,
) -> CostInput {
    CostInput {
        incurred_on: date(2024, 4, 2),
        amount: money(15000),
        description: "Serwis hamulców".to_owned(),
        parts,
        labor,
        vehicle_id,
    }
}

pub async fn create_vehicle(db: &DatabaseConnection, plate_number: &str) -> Vehicle {
    CreateRecordUseCase {
        repo: DbVehicleRepository { db: db.clone() },
    }
    .execute(vehicle_input(plate_number))
    .await
    .unwrap()
}

pub async fn create_company(db: &DatabaseConnection, name: &str) -> InsuranceCompany {
    CreateRecordUseCase {
        repo: DbInsuranceCompanyRepository { db: db.clone() },
    }
    .execute(company_input(name))
    .await
    .unwrap()
}
