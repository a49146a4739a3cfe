use tracing::info;
use validator::Validate;

use fleet_domain::id::{InsuranceCompanyId, RecordId, VehicleId};
use fleet_domain::pagination::PageRequest;

use crate::domain::repository::{
    InsurancePolicyRepository, RecordRepository, VehicleScopedRepository,
};
use crate::domain::types::{InsurancePolicy, Record};
use crate::error::RegistryError;

/// Caller-supplied fields for one record type.
///
/// `validate` checks length, shape and numeric range; `into_record` parses
/// choice values into their closed enums and fails with
/// [`RegistryError::InvalidChoice`] on anything outside the set.
pub trait RecordInput: Validate {
    type Record: Record;

    fn into_record(
        self,
        id: <Self::Record as Record>::Id,
    ) -> Result<Self::Record, RegistryError>;
}

// ── CreateRecord ─────────────────────────────────────────────────────────────

pub struct CreateRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> CreateRecordUseCase<R> {
    pub async fn execute<I>(&self, input: I) -> Result<R::Record, RegistryError>
    where
        I: RecordInput<Record = R::Record>,
    {
        input.validate()?;
        let id = <<R::Record as Record>::Id as RecordId>::generate();
        let record = input.into_record(id)?;
        self.repo.create(&record).await?;
        let entity = <R::Record as Record>::ENTITY;
        info!(entity, %id, "record created");
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::NotFound(entity))
    }
}

// ── GetRecord ────────────────────────────────────────────────────────────────

pub struct GetRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> GetRecordUseCase<R> {
    pub async fn execute(
        &self,
        id: <R::Record as Record>::Id,
    ) -> Result<R::Record, RegistryError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::NotFound(<R::Record as Record>::ENTITY))
    }
}

// ── ListRecords ──────────────────────────────────────────────────────────────

pub struct ListRecordsUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> ListRecordsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<R::Record>, RegistryError> {
        self.repo.list(page.clamped()).await
    }
}

// ── UpdateRecord ─────────────────────────────────────────────────────────────

/// Replaces every caller-editable field of an existing record. Cost sides
/// left out of the input keep their stored values. Returns the record as
/// stored after the write.
pub struct UpdateRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> UpdateRecordUseCase<R> {
    pub async fn execute<I>(
        &self,
        id: <R::Record as Record>::Id,
        input: I,
    ) -> Result<R::Record, RegistryError>
    where
        I: RecordInput<Record = R::Record>,
    {
        input.validate()?;
        let record = input.into_record(id)?;
        let entity = <R::Record as Record>::ENTITY;
        if !self.repo.update(&record).await? {
            return Err(RegistryError::NotFound(entity));
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(RegistryError::NotFound(entity))
    }
}

// ── DeleteRecord ─────────────────────────────────────────────────────────────

pub struct DeleteRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> DeleteRecordUseCase<R> {
    pub async fn execute(&self, id: <R::Record as Record>::Id) -> Result<(), RegistryError> {
        let deleted = self.repo.delete(id).await?;
        let entity = <R::Record as Record>::ENTITY;
        if !deleted {
            return Err(RegistryError::NotFound(entity));
        }
        info!(entity, %id, "record deleted");
        Ok(())
    }
}

// ── ListVehicleRecords ───────────────────────────────────────────────────────

/// Policies, inspections, repairs or costs of one vehicle.
pub struct ListVehicleRecordsUseCase<R: VehicleScopedRepository> {
    pub repo: R,
}

impl<R: VehicleScopedRepository> ListVehicleRecordsUseCase<R> {
    pub async fn execute(&self, vehicle_id: VehicleId) -> Result<Vec<R::Record>, RegistryError> {
        self.repo.list_by_vehicle(vehicle_id).await
    }
}

// ── ListCompanyPolicies ──────────────────────────────────────────────────────

pub struct ListCompanyPoliciesUseCase<R: InsurancePolicyRepository> {
    pub repo: R,
}

impl<R: InsurancePolicyRepository> ListCompanyPoliciesUseCase<R> {
    pub async fn execute(
        &self,
        company_id: InsuranceCompanyId,
    ) -> Result<Vec<InsurancePolicy>, RegistryError> {
        self.repo.list_by_company(company_id).await
    }
}
