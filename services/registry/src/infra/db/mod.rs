//! sea-orm adapters for the registry repositories.
//!
//! Writes that carry an owning reference check the owner inside the same
//! transaction as the write. Deleting an owner removes its dependents in one
//! transaction.

mod directory;
mod insurance;
mod vehicle;

pub use directory::{
    DbEmployeeRepository, DbFuelCardRepository, DbTireSetRepository, DbWorkshopRepository,
};
pub use insurance::{DbInsuranceCompanyRepository, DbInsurancePolicyRepository};
pub use vehicle::{
    DbCostRepository, DbRepairRepository, DbTechnicalInspectionRepository, DbVehicleRepository,
};

use std::str::FromStr;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, IntoActiveModel, PrimaryKeyTrait, TransactionTrait,
};
use sea_orm::prelude::Uuid;

use fleet_domain::choice::UnknownChoice;
use fleet_domain::id::{InsuranceCompanyId, VehicleId};
use fleet_registry_schema::{insurance_companies, vehicles};

use crate::error::RegistryError;

/// Open a transaction and load the row an update is about to replace.
/// `None` means no row has that key and nothing was written.
async fn find_for_update<E>(
    db: &DatabaseConnection,
    id: Uuid,
    entity: &'static str,
) -> Result<Option<(DatabaseTransaction, E::Model)>, RegistryError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    let txn = db
        .begin()
        .await
        .with_context(|| format!("begin {entity} update"))?;
    let stored = E::find_by_id(id)
        .one(&txn)
        .await
        .with_context(|| format!("find {entity} for update"))?;
    Ok(stored.map(|model| (txn, model)))
}

/// Replace an ownerless row. Returns `false` when no row has that key.
async fn replace_row<A>(
    db: &DatabaseConnection,
    id: Uuid,
    entity: &'static str,
    model: A,
) -> Result<bool, RegistryError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    <<A::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    let Some((txn, _)) = find_for_update::<A::Entity>(db, id, entity).await? else {
        return Ok(false);
    };
    model
        .update(&txn)
        .await
        .with_context(|| format!("update {entity}"))?;
    txn.commit()
        .await
        .with_context(|| format!("commit {entity} update"))?;
    Ok(true)
}

async fn ensure_vehicle_exists<C: ConnectionTrait>(
    db: &C,
    id: VehicleId,
) -> Result<(), RegistryError> {
    vehicles::Entity::find_by_id(id.0)
        .one(db)
        .await
        .context("find owning vehicle")?
        .map(|_| ())
        .ok_or(RegistryError::VehicleNotFound(id))
}

async fn ensure_company_exists<C: ConnectionTrait>(
    db: &C,
    id: InsuranceCompanyId,
) -> Result<(), RegistryError> {
    insurance_companies::Entity::find_by_id(id.0)
        .one(db)
        .await
        .context("find owning insurance company")?
        .map(|_| ())
        .ok_or(RegistryError::InsuranceCompanyNotFound(id))
}

/// Parse a stored choice value. A failure means the row was written
/// outside this crate.
fn stored<T>(column: &'static str, value: &str) -> Result<T, RegistryError>
where
    T: FromStr<Err = UnknownChoice>,
{
    let parsed = value
        .parse::<T>()
        .with_context(|| format!("stored {column} value"))?;
    Ok(parsed)
}
