use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, EntityTrait};
use uuid::Uuid;

use fleet_domain::id::{CostId, RecordId, VehicleId};
use fleet_registry::error::RegistryError;
use fleet_registry::infra::db::DbCostRepository;
use fleet_registry::usecase::record::{
    CreateRecordUseCase, GetRecordUseCase, ListVehicleRecordsUseCase, UpdateRecordUseCase,
};
use fleet_registry_schema::costs;

use crate::helpers::{cost_input, create_vehicle, date, money, test_db};

#[tokio::test]
async fn should_store_total_as_parts_plus_labor() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1001A").await;
    let repo = DbCostRepository { db: db.clone() };

    let cost = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(vehicle.id, Some(money(10000)), Some(money(5000))))
        .await
        .unwrap();
    assert_eq!(repo.stored_total(cost.id).await.unwrap(), Some(money(15000)));

    let mut changed = cost_input(vehicle.id, Some(money(20000)), Some(money(5000)));
    changed.description = "Serwis hamulców (korekta)".to_owned();
    UpdateRecordUseCase { repo: repo.clone() }
        .execute(cost.id, changed)
        .await
        .unwrap();
    assert_eq!(repo.stored_total(cost.id).await.unwrap(), Some(money(25000)));

    let stored = GetRecordUseCase { repo }.execute(cost.id).await.unwrap();
    assert_eq!(stored.parts, Some(money(20000)));
    assert_eq!(stored.total(), money(25000));
}

#[tokio::test]
async fn should_keep_stored_labor_when_update_omits_it() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1007A").await;
    let repo = DbCostRepository { db: db.clone() };

    let cost = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(vehicle.id, Some(money(10000)), Some(money(5000))))
        .await
        .unwrap();

    let updated = UpdateRecordUseCase { repo: repo.clone() }
        .execute(cost.id, cost_input(vehicle.id, Some(money(20000)), None))
        .await
        .unwrap();
    assert_eq!(updated.parts, Some(money(20000)));
    assert_eq!(updated.labor, Some(money(5000)));
    assert_eq!(updated.total(), money(25000));

    let row = costs::Entity::find_by_id(cost.id.0)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.labor, money(5000));
    assert_eq!(row.total, money(25000));
}

#[tokio::test]
async fn should_keep_stored_parts_when_update_omits_it() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1008A").await;
    let repo = DbCostRepository { db: db.clone() };

    let cost = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(vehicle.id, Some(money(10000)), Some(money(5000))))
        .await
        .unwrap();

    UpdateRecordUseCase { repo: repo.clone() }
        .execute(cost.id, cost_input(vehicle.id, None, Some(money(1250))))
        .await
        .unwrap();

    let stored = GetRecordUseCase { repo: repo.clone() }
        .execute(cost.id)
        .await
        .unwrap();
    assert_eq!(stored.parts, Some(money(10000)));
    assert_eq!(stored.labor, Some(money(1250)));
    assert_eq!(repo.stored_total(cost.id).await.unwrap(), Some(money(11250)));
}

#[tokio::test]
async fn should_recompute_total_on_every_save() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1009A").await;
    let repo = DbCostRepository { db: db.clone() };

    let cost = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(vehicle.id, Some(money(10000)), Some(money(5000))))
        .await
        .unwrap();
    let update = UpdateRecordUseCase { repo: repo.clone() };

    let saves = [
        (Some(money(10000)), Some(money(5000)), money(15000)),
        (Some(money(20000)), None, money(25000)),
        (None, Some(money(1250)), money(21250)),
        (Some(Decimal::ZERO), Some(money(5000)), money(5000)),
        (None, None, money(5000)),
    ];
    for (parts, labor, expected) in saves {
        let saved = update
            .execute(cost.id, cost_input(vehicle.id, parts, labor))
            .await
            .unwrap();
        assert_eq!(saved.total(), expected);
        assert_eq!(repo.stored_total(cost.id).await.unwrap(), Some(expected));
    }
}

#[tokio::test]
async fn should_reject_partial_update_pushing_total_past_eight_digits() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1010A").await;
    let repo = DbCostRepository { db: db.clone() };
    let parts = Decimal::new(99_999_999, 0);

    let cost = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(vehicle.id, Some(parts), Some(Decimal::ZERO)))
        .await
        .unwrap();

    let result = UpdateRecordUseCase { repo: repo.clone() }
        .execute(cost.id, cost_input(vehicle.id, None, Some(money(100000))))
        .await;

    assert!(
        result.as_ref().is_err_and(RegistryError::is_validation),
        "expected validation error, got {result:?}"
    );
    assert_eq!(repo.stored_total(cost.id).await.unwrap(), Some(parts));
}

#[tokio::test]
async fn should_default_missing_parts_to_zero() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1002A").await;
    let repo = DbCostRepository { db: db.clone() };

    let cost = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(vehicle.id, None, Some(money(1250))))
        .await
        .unwrap();

    assert_eq!(repo.stored_total(cost.id).await.unwrap(), Some(money(1250)));
}

#[tokio::test]
async fn should_overwrite_caller_supplied_total() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1003A").await;
    let id = Uuid::now_v7();

    costs::ActiveModel {
        id: Set(id),
        incurred_on: Set(date(2024, 6, 1)),
        amount: Set(money(5000)),
        description: Set("Olej".to_owned()),
        parts: Set(money(3000)),
        labor: Set(money(2000)),
        total: Set(money(99900)),
        vehicle_id: Set(vehicle.id.0),
    }
    .insert(&db)
    .await
    .unwrap();

    let row = costs::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(row.total, money(5000));
}

#[tokio::test]
async fn should_recompute_total_on_partial_update() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1004A").await;
    let repo = DbCostRepository { db: db.clone() };

    let cost = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(vehicle.id, Some(money(10000)), Some(money(5000))))
        .await
        .unwrap();

    // only labor changes; parts comes from the stored row
    costs::ActiveModel {
        id: Set(cost.id.0),
        labor: Set(money(7500)),
        total: Set(Decimal::ZERO),
        ..Default::default()
    }
    .update(&db)
    .await
    .unwrap();

    let row = costs::Entity::find_by_id(cost.id.0)
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.parts, money(10000));
    assert_eq!(row.total, money(17500));
}

#[tokio::test]
async fn should_reject_cost_for_missing_vehicle() {
    let db = test_db().await;
    let repo = DbCostRepository { db: db.clone() };
    let missing = VehicleId::generate();

    let result = CreateRecordUseCase { repo: repo.clone() }
        .execute(cost_input(missing, Some(money(100)), None))
        .await;

    assert!(
        matches!(result, Err(RegistryError::VehicleNotFound(id)) if id == missing),
        "expected VehicleNotFound, got {result:?}"
    );
    let listed = ListVehicleRecordsUseCase { repo }.execute(missing).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_cost() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1005A").await;

    let result = UpdateRecordUseCase {
        repo: DbCostRepository { db: db.clone() },
    }
    .execute(CostId::generate(), cost_input(vehicle.id, None, None))
    .await;

    assert!(matches!(result, Err(RegistryError::NotFound("cost"))));
}

#[tokio::test]
async fn should_leave_raw_insert_without_parts_at_zero() {
    let db = test_db().await;
    let vehicle = create_vehicle(&db, "WX 1006A").await;
    let id = Uuid::now_v7();

    costs::ActiveModel {
        id: Set(id),
        incurred_on: Set(date(2024, 7, 1)),
        amount: Set(money(100)),
        description: Set(String::new()),
        parts: NotSet,
        labor: NotSet,
        total: NotSet,
        vehicle_id: Set(vehicle.id.0),
    }
    .insert(&db)
    .await
    .unwrap();

    let row = costs::Entity::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(row.parts, Decimal::ZERO);
    assert_eq!(row.total, Decimal::ZERO);
}
