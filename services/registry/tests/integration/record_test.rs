use fleet_domain::cost_center::CostCenter;
use fleet_domain::fuel_card::CardType;
use fleet_domain::id::{InsuranceCompanyId, RecordId, VehicleId};
use fleet_domain::pagination::PageRequest;
use fleet_domain::tire::TireCondition;
use fleet_domain::vehicle::FuelType;
use fleet_registry::error::RegistryError;
use fleet_registry::infra::db::{
    DbEmployeeRepository, DbFuelCardRepository, DbInsurancePolicyRepository,
    DbTireSetRepository, DbVehicleRepository, DbWorkshopRepository,
};
use fleet_registry::usecase::employee::EmployeeInput;
use fleet_registry::usecase::fuel_card::FuelCardInput;
use fleet_registry::usecase::record::{
    CreateRecordUseCase, GetRecordUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};
use fleet_registry::usecase::tire_set::TireSetInput;
use fleet_registry::usecase::workshop::WorkshopInput;

use crate::helpers::{create_company, create_vehicle, date, policy_input, test_db, vehicle_input};

fn employee_input(cost_center: i32) -> EmployeeInput {
    EmployeeInput {
        first_name: "Piotr".to_owned(),
        last_name: "Wiśniewski".to_owned(),
        job_title: "Kierowca".to_owned(),
        department: "Transport".to_owned(),
        plate_number: "NO-SUCH-CAR".to_owned(),
        cost_center,
    }
}

fn fuel_card_input(spending_limit: Option<&str>) -> FuelCardInput {
    FuelCardInput {
        card_number: "7077 0001".to_owned(),
        plate_number: "ZZ 00000".to_owned(),
        expires_on: date(2026, 6, 30),
        pin: "9051".to_owned(),
        card_type: "K".to_owned(),
        is_active: false,
        spending_limit: spending_limit.map(str::to_owned),
    }
}

#[tokio::test]
async fn should_not_persist_vehicle_with_unknown_choice() {
    let db = test_db().await;
    let repo = DbVehicleRepository { db: db.clone() };
    let mut input = vehicle_input("WZ 3001C");
    input.ownership = "wynajem".to_owned();

    let result = CreateRecordUseCase { repo: repo.clone() }.execute(input).await;
    assert!(
        matches!(result, Err(RegistryError::InvalidChoice { field: "ownership", .. })),
        "expected InvalidChoice, got {result:?}"
    );

    let all = ListRecordsUseCase { repo }
        .execute(PageRequest::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_reject_employee_with_unknown_cost_center() {
    let db = test_db().await;
    let repo = DbEmployeeRepository { db: db.clone() };

    let result = CreateRecordUseCase { repo: repo.clone() }
        .execute(employee_input(9999))
        .await;
    assert!(result.as_ref().is_err_and(RegistryError::is_validation));

    let all = ListRecordsUseCase { repo }
        .execute(PageRequest::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_accept_plate_numbers_matching_no_vehicle() {
    let db = test_db().await;

    let employee = CreateRecordUseCase {
        repo: DbEmployeeRepository { db: db.clone() },
    }
    .execute(employee_input(2000))
    .await
    .unwrap();
    assert_eq!(employee.cost_center, CostCenter::IndirectProduction);

    let card = CreateRecordUseCase {
        repo: DbFuelCardRepository { db: db.clone() },
    }
    .execute(fuel_card_input(None))
    .await
    .unwrap();

    let tires = CreateRecordUseCase {
        repo: DbTireSetRepository { db: db.clone() },
    }
    .execute(TireSetInput {
        plate_number: "GHOST 1".to_owned(),
        category: "zimowe".to_owned(),
        size: "195/65 R15".to_owned(),
        front_left: "dobry".to_owned(),
        rear_left: "dobry".to_owned(),
        front_right: "dobry".to_owned(),
        rear_right: "do wymiany".to_owned(),
        remarks: String::new(),
    })
    .await
    .unwrap();

    let stored_card = GetRecordUseCase {
        repo: DbFuelCardRepository { db: db.clone() },
    }
    .execute(card.id)
    .await
    .unwrap();
    assert_eq!(stored_card.card_type, CardType::Driver);
    assert_eq!(stored_card.spending_limit, None);
    assert!(!stored_card.is_active);

    let stored_tires = GetRecordUseCase {
        repo: DbTireSetRepository { db: db.clone() },
    }
    .execute(tires.id)
    .await
    .unwrap();
    assert_eq!(stored_tires.wheels.rear_right, TireCondition::NeedsReplacement);
    assert_eq!(stored_tires.to_string(), "Ogumienie - GHOST 1 - zimowe");
}

#[tokio::test]
async fn should_reject_policy_for_missing_company() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WZ 3002C").await;
    let missing = InsuranceCompanyId::generate();

    let result = CreateRecordUseCase {
        repo: DbInsurancePolicyRepository { db: db.clone() },
    }
    .execute(policy_input(missing, vehicle.id, "X-1"))
    .await;

    assert!(
        matches!(result, Err(RegistryError::InsuranceCompanyNotFound(id)) if id == missing),
        "expected InsuranceCompanyNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_keep_policy_unchanged_when_update_references_missing_company() {
    let db = test_db().await;
    let company = create_company(&db, "Generali").await;
    let vehicle = create_vehicle(&db, "WZ 3003C").await;
    let repo = DbInsurancePolicyRepository { db: db.clone() };

    let policy = CreateRecordUseCase { repo: repo.clone() }
        .execute(policy_input(company.id, vehicle.id, "G-1"))
        .await
        .unwrap();

    let mut moved = policy_input(InsuranceCompanyId::generate(), vehicle.id, "G-1b");
    moved.coverage = "platynowy".to_owned();
    let result = UpdateRecordUseCase { repo: repo.clone() }
        .execute(policy.id, moved)
        .await;
    assert!(result.as_ref().is_err_and(RegistryError::is_referential));

    let stored = GetRecordUseCase { repo }.execute(policy.id).await.unwrap();
    assert_eq!(stored, policy);
}

#[tokio::test]
async fn should_replace_vehicle_fields_on_update() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WZ 3004C").await;
    let repo = DbVehicleRepository { db: db.clone() };

    let mut changed = vehicle_input("WZ 3004D");
    changed.fuel_type = "olej napędowy".to_owned();
    changed.power = 116.0;
    UpdateRecordUseCase { repo: repo.clone() }
        .execute(vehicle.id, changed)
        .await
        .unwrap();

    let stored = GetRecordUseCase { repo }.execute(vehicle.id).await.unwrap();
    assert_eq!(stored.plate_number, "WZ 3004D");
    assert_eq!(stored.fuel_type, FuelType::Diesel);
    assert_eq!(stored.power, 116.0);
    assert_eq!(stored.to_string(), "Skoda Octavia");
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_vehicle() {
    let db = test_db().await;
    let repo = DbVehicleRepository { db: db.clone() };

    let result = UpdateRecordUseCase { repo: repo.clone() }
        .execute(VehicleId::generate(), vehicle_input("WZ 3005C"))
        .await;
    assert!(matches!(result, Err(RegistryError::NotFound("vehicle"))));

    let all = ListRecordsUseCase { repo }
        .execute(PageRequest::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_reject_workshop_with_invalid_email() {
    let db = test_db().await;
    let repo = DbWorkshopRepository { db: db.clone() };
    let input = WorkshopInput {
        name: "Opony Express".to_owned(),
        street: "ul. Kolejowa 3".to_owned(),
        city: "Gdańsk".to_owned(),
        postal_code: "80-001".to_owned(),
        tax_id: "5831234567".to_owned(),
        statistical_id: "191234567".to_owned(),
        phone: "585550100".to_owned(),
        email: "not an email".to_owned(),
        contact_person: "Ewa Zielińska".to_owned(),
    };

    let result = CreateRecordUseCase { repo: repo.clone() }.execute(input).await;
    assert!(matches!(result, Err(RegistryError::Validation(_))));

    let all = ListRecordsUseCase { repo }
        .execute(PageRequest::default())
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn should_page_vehicle_listing() {
    let db = test_db().await;
    for n in 0..5 {
        create_vehicle(&db, &format!("WZ 40{n}0E")).await;
    }
    let usecase = ListRecordsUseCase {
        repo: DbVehicleRepository { db: db.clone() },
    };

    let first = usecase
        .execute(PageRequest { per_page: 2, page: 1 })
        .await
        .unwrap();
    let last = usecase
        .execute(PageRequest { per_page: 2, page: 3 })
        .await
        .unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(last.len(), 1);
    assert!(first.iter().all(|v| v.id != last[0].id));
}
