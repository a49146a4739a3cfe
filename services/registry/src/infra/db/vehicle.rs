use anyhow::Context as _;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::info;
use validator::ValidationErrors;

use fleet_domain::choice::Choice as _;
use fleet_domain::id::{CostId, RepairId, TechnicalInspectionId, VehicleId};
use fleet_domain::pagination::PageRequest;
use fleet_registry_schema::{costs, insurance_policies, repairs, technical_inspections, vehicles};

use super::{ensure_vehicle_exists, find_for_update, replace_row, stored};
use crate::domain::repository::{RecordRepository, VehicleScopedRepository};
use crate::domain::types::{Cost, Repair, TechnicalInspection, Vehicle};
use crate::domain::validate::validate_cost_total;
use crate::error::RegistryError;

// ── Vehicle repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVehicleRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbVehicleRepository {
    type Record = Vehicle;

    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, RegistryError> {
        let model = vehicles::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find vehicle by id")?;
        model.map(vehicle_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Vehicle>, RegistryError> {
        let models = vehicles::Entity::find()
            .order_by_asc(vehicles::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list vehicles")?;
        models.into_iter().map(vehicle_from_model).collect()
    }

    async fn create(&self, vehicle: &Vehicle) -> Result<(), RegistryError> {
        vehicle_active_model(vehicle)
            .insert(&self.db)
            .await
            .context("create vehicle")?;
        Ok(())
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<bool, RegistryError> {
        replace_row(&self.db, vehicle.id.0, "vehicle", vehicle_active_model(vehicle)).await
    }

    async fn delete(&self, id: VehicleId) -> Result<bool, RegistryError> {
        let txn = self.db.begin().await.context("begin vehicle delete")?;
        let Some(vehicle) = vehicles::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .context("find vehicle for delete")?
        else {
            return Ok(false);
        };

        let policy_rows = insurance_policies::Entity::delete_many()
            .filter(insurance_policies::Column::VehicleId.eq(id.0))
            .exec(&txn)
            .await
            .context("delete vehicle policies")?;
        let inspection_rows = technical_inspections::Entity::delete_many()
            .filter(technical_inspections::Column::VehicleId.eq(id.0))
            .exec(&txn)
            .await
            .context("delete vehicle inspections")?;
        let repair_rows = repairs::Entity::delete_many()
            .filter(repairs::Column::VehicleId.eq(id.0))
            .exec(&txn)
            .await
            .context("delete vehicle repairs")?;
        let cost_rows = costs::Entity::delete_many()
            .filter(costs::Column::VehicleId.eq(id.0))
            .exec(&txn)
            .await
            .context("delete vehicle costs")?;
        vehicle.delete(&txn).await.context("delete vehicle")?;
        txn.commit().await.context("commit vehicle delete")?;

        info!(
            vehicle_id = %id,
            policies = policy_rows.rows_affected,
            inspections = inspection_rows.rows_affected,
            repairs = repair_rows.rows_affected,
            costs = cost_rows.rows_affected,
            "vehicle deleted with dependents"
        );
        Ok(true)
    }
}

fn vehicle_from_model(model: vehicles::Model) -> Result<Vehicle, RegistryError> {
    Ok(Vehicle {
        id: VehicleId(model.id),
        make: model.make,
        model: model.model_name,
        category: stored("vehicle category", &model.category)?,
        production_year: model.production_year,
        plate_number: model.plate_number,
        first_registration_year: model.first_registration_year,
        vin: model.vin,
        power: model.power,
        engine_displacement: model.engine_displacement,
        fuel_type: stored("fuel type", &model.fuel_type)?,
        ownership: stored("ownership", &model.ownership)?,
    })
}

fn vehicle_active_model(vehicle: &Vehicle) -> vehicles::ActiveModel {
    vehicles::ActiveModel {
        id: Set(vehicle.id.0),
        make: Set(vehicle.make.clone()),
        model_name: Set(vehicle.model.clone()),
        category: Set(vehicle.category.value().to_owned()),
        production_year: Set(vehicle.production_year),
        plate_number: Set(vehicle.plate_number.clone()),
        first_registration_year: Set(vehicle.first_registration_year),
        vin: Set(vehicle.vin.clone()),
        power: Set(vehicle.power),
        engine_displacement: Set(vehicle.engine_displacement),
        fuel_type: Set(vehicle.fuel_type.value().to_owned()),
        ownership: Set(vehicle.ownership.value().to_owned()),
    }
}

// ── Technical inspection repository ──────────────────────────────────────────

#[derive(Clone)]
pub struct DbTechnicalInspectionRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbTechnicalInspectionRepository {
    type Record = TechnicalInspection;

    async fn find_by_id(
        &self,
        id: TechnicalInspectionId,
    ) -> Result<Option<TechnicalInspection>, RegistryError> {
        let model = technical_inspections::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find technical inspection by id")?;
        Ok(model.map(inspection_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<TechnicalInspection>, RegistryError> {
        let models = technical_inspections::Entity::find()
            .order_by_asc(technical_inspections::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list technical inspections")?;
        Ok(models.into_iter().map(inspection_from_model).collect())
    }

    async fn create(&self, inspection: &TechnicalInspection) -> Result<(), RegistryError> {
        let txn = self.db.begin().await.context("begin inspection create")?;
        ensure_vehicle_exists(&txn, inspection.vehicle_id).await?;
        inspection_active_model(inspection)
            .insert(&txn)
            .await
            .context("create technical inspection")?;
        txn.commit().await.context("commit inspection create")?;
        Ok(())
    }

    async fn update(&self, inspection: &TechnicalInspection) -> Result<bool, RegistryError> {
        let found = find_for_update::<technical_inspections::Entity>(
            &self.db,
            inspection.id.0,
            "technical inspection",
        )
        .await?;
        let Some((txn, _)) = found else {
            return Ok(false);
        };
        ensure_vehicle_exists(&txn, inspection.vehicle_id).await?;
        inspection_active_model(inspection)
            .update(&txn)
            .await
            .context("update technical inspection")?;
        txn.commit().await.context("commit technical inspection update")?;
        Ok(true)
    }

    async fn delete(&self, id: TechnicalInspectionId) -> Result<bool, RegistryError> {
        let result = technical_inspections::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete technical inspection")?;
        Ok(result.rows_affected > 0)
    }
}

impl VehicleScopedRepository for DbTechnicalInspectionRepository {
    async fn list_by_vehicle(
        &self,
        vehicle_id: VehicleId,
    ) -> Result<Vec<TechnicalInspection>, RegistryError> {
        let models = technical_inspections::Entity::find()
            .filter(technical_inspections::Column::VehicleId.eq(vehicle_id.0))
            .order_by_asc(technical_inspections::Column::InspectedOn)
            .order_by_asc(technical_inspections::Column::Id)
            .all(&self.db)
            .await
            .context("list technical inspections by vehicle")?;
        Ok(models.into_iter().map(inspection_from_model).collect())
    }
}

fn inspection_from_model(model: technical_inspections::Model) -> TechnicalInspection {
    TechnicalInspection {
        id: TechnicalInspectionId(model.id),
        inspection_number: model.inspection_number,
        inspected_on: model.inspected_on,
        notes: model.notes,
        vehicle_id: VehicleId(model.vehicle_id),
    }
}

fn inspection_active_model(inspection: &TechnicalInspection) -> technical_inspections::ActiveModel {
    technical_inspections::ActiveModel {
        id: Set(inspection.id.0),
        inspection_number: Set(inspection.inspection_number.clone()),
        inspected_on: Set(inspection.inspected_on),
        notes: Set(inspection.notes.clone()),
        vehicle_id: Set(inspection.vehicle_id.0),
    }
}

// ── Repair repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRepairRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbRepairRepository {
    type Record = Repair;

    async fn find_by_id(&self, id: RepairId) -> Result<Option<Repair>, RegistryError> {
        let model = repairs::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find repair by id")?;
        Ok(model.map(repair_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Repair>, RegistryError> {
        let models = repairs::Entity::find()
            .order_by_asc(repairs::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list repairs")?;
        Ok(models.into_iter().map(repair_from_model).collect())
    }

    async fn create(&self, repair: &Repair) -> Result<(), RegistryError> {
        let txn = self.db.begin().await.context("begin repair create")?;
        ensure_vehicle_exists(&txn, repair.vehicle_id).await?;
        repair_active_model(repair)
            .insert(&txn)
            .await
            .context("create repair")?;
        txn.commit().await.context("commit repair create")?;
        Ok(())
    }

    async fn update(&self, repair: &Repair) -> Result<bool, RegistryError> {
        let found = find_for_update::<repairs::Entity>(&self.db, repair.id.0, "repair").await?;
        let Some((txn, _)) = found else {
            return Ok(false);
        };
        ensure_vehicle_exists(&txn, repair.vehicle_id).await?;
        repair_active_model(repair)
            .update(&txn)
            .await
            .context("update repair")?;
        txn.commit().await.context("commit repair update")?;
        Ok(true)
    }

    async fn delete(&self, id: RepairId) -> Result<bool, RegistryError> {
        let result = repairs::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete repair")?;
        Ok(result.rows_affected > 0)
    }
}

impl VehicleScopedRepository for DbRepairRepository {
    async fn list_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<Repair>, RegistryError> {
        let models = repairs::Entity::find()
            .filter(repairs::Column::VehicleId.eq(vehicle_id.0))
            .order_by_asc(repairs::Column::RepairedOn)
            .order_by_asc(repairs::Column::Id)
            .all(&self.db)
            .await
            .context("list repairs by vehicle")?;
        Ok(models.into_iter().map(repair_from_model).collect())
    }
}

fn repair_from_model(model: repairs::Model) -> Repair {
    Repair {
        id: RepairId(model.id),
        repair_number: model.repair_number,
        repaired_on: model.repaired_on,
        notes: model.notes,
        vehicle_id: VehicleId(model.vehicle_id),
    }
}

fn repair_active_model(repair: &Repair) -> repairs::ActiveModel {
    repairs::ActiveModel {
        id: Set(repair.id.0),
        repair_number: Set(repair.repair_number.clone()),
        repaired_on: Set(repair.repaired_on),
        notes: Set(repair.notes.clone()),
        vehicle_id: Set(repair.vehicle_id.0),
    }
}

// ── Cost repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCostRepository {
    pub db: DatabaseConnection,
}

impl DbCostRepository {
    /// Stored total of a cost, as recomputed on its last write.
    pub async fn stored_total(&self, id: CostId) -> Result<Option<Decimal>, RegistryError> {
        let model = costs::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find cost total")?;
        Ok(model.map(|m| m.total))
    }
}

impl RecordRepository for DbCostRepository {
    type Record = Cost;

    async fn find_by_id(&self, id: CostId) -> Result<Option<Cost>, RegistryError> {
        let model = costs::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find cost by id")?;
        Ok(model.map(cost_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Cost>, RegistryError> {
        let models = costs::Entity::find()
            .order_by_asc(costs::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list costs")?;
        Ok(models.into_iter().map(cost_from_model).collect())
    }

    async fn create(&self, cost: &Cost) -> Result<(), RegistryError> {
        let txn = self.db.begin().await.context("begin cost create")?;
        ensure_vehicle_exists(&txn, cost.vehicle_id).await?;
        cost_active_model(cost)
            .insert(&txn)
            .await
            .context("create cost")?;
        txn.commit().await.context("commit cost create")?;
        Ok(())
    }

    async fn update(&self, cost: &Cost) -> Result<bool, RegistryError> {
        let found = find_for_update::<costs::Entity>(&self.db, cost.id.0, "cost").await?;
        let Some((txn, stored_row)) = found else {
            return Ok(false);
        };
        let parts = cost.parts.unwrap_or(stored_row.parts);
        let labor = cost.labor.unwrap_or(stored_row.labor);
        if let Err(err) = validate_cost_total(parts, labor) {
            let mut errors = ValidationErrors::new();
            errors.add("total", err);
            return Err(errors.into());
        }
        ensure_vehicle_exists(&txn, cost.vehicle_id).await?;
        cost_active_model(cost)
            .update(&txn)
            .await
            .context("update cost")?;
        txn.commit().await.context("commit cost update")?;
        Ok(true)
    }

    async fn delete(&self, id: CostId) -> Result<bool, RegistryError> {
        let result = costs::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete cost")?;
        Ok(result.rows_affected > 0)
    }
}

impl VehicleScopedRepository for DbCostRepository {
    async fn list_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<Cost>, RegistryError> {
        let models = costs::Entity::find()
            .filter(costs::Column::VehicleId.eq(vehicle_id.0))
            .order_by_asc(costs::Column::IncurredOn)
            .order_by_asc(costs::Column::Id)
            .all(&self.db)
            .await
            .context("list costs by vehicle")?;
        Ok(models.into_iter().map(cost_from_model).collect())
    }
}

fn cost_from_model(model: costs::Model) -> Cost {
    Cost {
        id: CostId(model.id),
        incurred_on: model.incurred_on,
        amount: model.amount,
        description: model.description,
        parts: Some(model.parts),
        labor: Some(model.labor),
        vehicle_id: VehicleId(model.vehicle_id),
    }
}

/// `total` is left unset; the entity's save hook derives it. A missing side
/// stays unset too, so the hook can fill it.
fn cost_active_model(cost: &Cost) -> costs::ActiveModel {
    let side = |value: Option<Decimal>| value.map_or(NotSet, Set);
    costs::ActiveModel {
        id: Set(cost.id.0),
        incurred_on: Set(cost.incurred_on),
        amount: Set(cost.amount),
        description: Set(cost.description.clone()),
        parts: side(cost.parts),
        labor: side(cost.labor),
        total: NotSet,
        vehicle_id: Set(cost.vehicle_id.0),
    }
}
