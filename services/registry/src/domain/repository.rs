#![allow(async_fn_in_trait)]

use fleet_domain::id::{InsuranceCompanyId, VehicleId};
use fleet_domain::pagination::PageRequest;

use crate::domain::types::{InsurancePolicy, Record};
use crate::error::RegistryError;

/// Storage for one record type.
///
/// Deleting an owning record (vehicle, insurance company) also deletes the
/// records that reference it, atomically with the owner.
pub trait RecordRepository: Send + Sync {
    type Record: Record;

    async fn find_by_id(
        &self,
        id: <Self::Record as Record>::Id,
    ) -> Result<Option<Self::Record>, RegistryError>;

    /// Records ordered by identifier (creation order).
    async fn list(&self, page: PageRequest) -> Result<Vec<Self::Record>, RegistryError>;

    /// Insert a new record. Fails with a referential error when an owning
    /// reference points at a missing record.
    async fn create(&self, record: &Self::Record) -> Result<(), RegistryError>;

    /// Replace a stored record. Returns `false` if no record has that id.
    async fn update(&self, record: &Self::Record) -> Result<bool, RegistryError>;

    /// Delete a record. Returns `true` if a row was deleted.
    async fn delete(&self, id: <Self::Record as Record>::Id) -> Result<bool, RegistryError>;
}

/// Records owned by a vehicle.
pub trait VehicleScopedRepository: RecordRepository {
    async fn list_by_vehicle(
        &self,
        vehicle_id: VehicleId,
    ) -> Result<Vec<Self::Record>, RegistryError>;
}

/// Insurance policies, additionally owned by their insurer.
pub trait InsurancePolicyRepository: VehicleScopedRepository<Record = InsurancePolicy> {
    async fn list_by_company(
        &self,
        company_id: InsuranceCompanyId,
    ) -> Result<Vec<InsurancePolicy>, RegistryError>;
}
