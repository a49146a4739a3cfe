use fleet_domain::pagination::PageRequest;
use fleet_registry::error::RegistryError;
use fleet_registry::infra::db::{
    DbCostRepository, DbInsuranceCompanyRepository, DbInsurancePolicyRepository,
    DbRepairRepository, DbTechnicalInspectionRepository, DbVehicleRepository,
};
use fleet_registry::usecase::record::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordUseCase, ListCompanyPoliciesUseCase,
    ListRecordsUseCase, ListVehicleRecordsUseCase,
};

use crate::helpers::{
    cost_input, create_company, create_vehicle, inspection_input, money, policy_input,
    repair_input, test_db,
};

#[tokio::test]
async fn should_delete_vehicle_with_all_dependents() {
    let db = test_db().await;
    let company = create_company(&db, "PZU").await;
    let doomed = create_vehicle(&db, "WY 2001B").await;
    let kept = create_vehicle(&db, "WY 2002B").await;

    let policies = DbInsurancePolicyRepository { db: db.clone() };
    let inspections = DbTechnicalInspectionRepository { db: db.clone() };
    let repairs = DbRepairRepository { db: db.clone() };
    let costs = DbCostRepository { db: db.clone() };

    for vehicle in [&doomed, &kept] {
        for n in 0..2 {
            CreateRecordUseCase { repo: policies.clone() }
                .execute(policy_input(company.id, vehicle.id, &format!("POL-{n}")))
                .await
                .unwrap();
            CreateRecordUseCase { repo: inspections.clone() }
                .execute(inspection_input(vehicle.id, &format!("BT-{n}")))
                .await
                .unwrap();
            CreateRecordUseCase { repo: repairs.clone() }
                .execute(repair_input(vehicle.id, &format!("NR-{n}")))
                .await
                .unwrap();
            CreateRecordUseCase { repo: costs.clone() }
                .execute(cost_input(vehicle.id, Some(money(n * 100)), None))
                .await
                .unwrap();
        }
    }

    DeleteRecordUseCase {
        repo: DbVehicleRepository { db: db.clone() },
    }
    .execute(doomed.id)
    .await
    .unwrap();

    let gone = GetRecordUseCase {
        repo: DbVehicleRepository { db: db.clone() },
    }
    .execute(doomed.id)
    .await;
    assert!(matches!(gone, Err(RegistryError::NotFound("vehicle"))));

    assert!(ListVehicleRecordsUseCase { repo: policies.clone() }
        .execute(doomed.id)
        .await
        .unwrap()
        .is_empty());
    assert!(ListVehicleRecordsUseCase { repo: inspections.clone() }
        .execute(doomed.id)
        .await
        .unwrap()
        .is_empty());
    assert!(ListVehicleRecordsUseCase { repo: repairs.clone() }
        .execute(doomed.id)
        .await
        .unwrap()
        .is_empty());
    assert!(ListVehicleRecordsUseCase { repo: costs.clone() }
        .execute(doomed.id)
        .await
        .unwrap()
        .is_empty());

    // the other vehicle keeps everything
    let kept_policies = ListVehicleRecordsUseCase { repo: policies }
        .execute(kept.id)
        .await
        .unwrap();
    assert_eq!(kept_policies.len(), 2);
    let kept_costs = ListVehicleRecordsUseCase { repo: costs }
        .execute(kept.id)
        .await
        .unwrap();
    assert_eq!(kept_costs.len(), 2);
}

#[tokio::test]
async fn should_delete_company_with_its_policies_only() {
    let db = test_db().await;
    let doomed = create_company(&db, "Warta").await;
    let kept = create_company(&db, "Allianz").await;
    let vehicle = create_vehicle(&db, "WY 2003B").await;
    let policies = DbInsurancePolicyRepository { db: db.clone() };

    for (company, number) in [(&doomed, "W-1"), (&doomed, "W-2"), (&kept, "A-1")] {
        CreateRecordUseCase { repo: policies.clone() }
            .execute(policy_input(company.id, vehicle.id, number))
            .await
            .unwrap();
    }

    DeleteRecordUseCase {
        repo: DbInsuranceCompanyRepository { db: db.clone() },
    }
    .execute(doomed.id)
    .await
    .unwrap();

    let remaining = ListRecordsUseCase { repo: policies.clone() }
        .execute(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].policy_number, "A-1");

    assert!(ListCompanyPoliciesUseCase { repo: policies.clone() }
        .execute(doomed.id)
        .await
        .unwrap()
        .is_empty());

    // the vehicle itself is untouched
    let vehicle_policies = ListVehicleRecordsUseCase { repo: policies }
        .execute(vehicle.id)
        .await
        .unwrap();
    assert_eq!(vehicle_policies.len(), 1);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_vehicle() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WY 2004B").await;
    let usecase = DeleteRecordUseCase {
        repo: DbVehicleRepository { db: db.clone() },
    };

    usecase.execute(vehicle.id).await.unwrap();
    let again = usecase.execute(vehicle.id).await;
    assert!(matches!(again, Err(RegistryError::NotFound("vehicle"))));
}
