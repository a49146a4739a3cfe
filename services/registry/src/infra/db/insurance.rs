use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::info;

use fleet_domain::choice::Choice as _;
use fleet_domain::id::{InsuranceCompanyId, InsurancePolicyId, VehicleId};
use fleet_domain::pagination::PageRequest;
use fleet_registry_schema::{insurance_companies, insurance_policies};

use super::{
    ensure_company_exists, ensure_vehicle_exists, find_for_update, replace_row, stored,
};
use crate::domain::repository::{
    InsurancePolicyRepository, RecordRepository, VehicleScopedRepository,
};
use crate::domain::types::{InsuranceCompany, InsurancePolicy};
use crate::error::RegistryError;

// ── Insurance company repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInsuranceCompanyRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbInsuranceCompanyRepository {
    type Record = InsuranceCompany;

    async fn find_by_id(
        &self,
        id: InsuranceCompanyId,
    ) -> Result<Option<InsuranceCompany>, RegistryError> {
        let model = insurance_companies::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find insurance company by id")?;
        Ok(model.map(company_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<InsuranceCompany>, RegistryError> {
        let models = insurance_companies::Entity::find()
            .order_by_asc(insurance_companies::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list insurance companies")?;
        Ok(models.into_iter().map(company_from_model).collect())
    }

    async fn create(&self, company: &InsuranceCompany) -> Result<(), RegistryError> {
        company_active_model(company)
            .insert(&self.db)
            .await
            .context("create insurance company")?;
        Ok(())
    }

    async fn update(&self, company: &InsuranceCompany) -> Result<bool, RegistryError> {
        replace_row(
            &self.db,
            company.id.0,
            "insurance company",
            company_active_model(company),
        )
        .await
    }

    async fn delete(&self, id: InsuranceCompanyId) -> Result<bool, RegistryError> {
        let txn = self.db.begin().await.context("begin insurance company delete")?;
        let Some(company) = insurance_companies::Entity::find_by_id(id.0)
            .one(&txn)
            .await
            .context("find insurance company for delete")?
        else {
            return Ok(false);
        };

        let policy_rows = insurance_policies::Entity::delete_many()
            .filter(insurance_policies::Column::InsuranceCompanyId.eq(id.0))
            .exec(&txn)
            .await
            .context("delete insurance company policies")?;
        company
            .delete(&txn)
            .await
            .context("delete insurance company")?;
        txn.commit()
            .await
            .context("commit insurance company delete")?;

        info!(
            insurance_company_id = %id,
            policies = policy_rows.rows_affected,
            "insurance company deleted with policies"
        );
        Ok(true)
    }
}

fn company_from_model(model: insurance_companies::Model) -> InsuranceCompany {
    InsuranceCompany {
        id: InsuranceCompanyId(model.id),
        name: model.name,
        street: model.street,
        city: model.city,
        postal_code: model.postal_code,
    }
}

fn company_active_model(company: &InsuranceCompany) -> insurance_companies::ActiveModel {
    insurance_companies::ActiveModel {
        id: Set(company.id.0),
        name: Set(company.name.clone()),
        street: Set(company.street.clone()),
        city: Set(company.city.clone()),
        postal_code: Set(company.postal_code.clone()),
    }
}

// ── Insurance policy repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInsurancePolicyRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbInsurancePolicyRepository {
    type Record = InsurancePolicy;

    async fn find_by_id(
        &self,
        id: InsurancePolicyId,
    ) -> Result<Option<InsurancePolicy>, RegistryError> {
        let model = insurance_policies::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .context("find insurance policy by id")?;
        model.map(policy_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<InsurancePolicy>, RegistryError> {
        let models = insurance_policies::Entity::find()
            .order_by_asc(insurance_policies::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list insurance policies")?;
        models.into_iter().map(policy_from_model).collect()
    }

    async fn create(&self, policy: &InsurancePolicy) -> Result<(), RegistryError> {
        let txn = self.db.begin().await.context("begin insurance policy create")?;
        ensure_company_exists(&txn, policy.insurance_company_id).await?;
        ensure_vehicle_exists(&txn, policy.vehicle_id).await?;
        policy_active_model(policy)
            .insert(&txn)
            .await
            .context("create insurance policy")?;
        txn.commit()
            .await
            .context("commit insurance policy create")?;
        Ok(())
    }

    async fn update(&self, policy: &InsurancePolicy) -> Result<bool, RegistryError> {
        let found = find_for_update::<insurance_policies::Entity>(
            &self.db,
            policy.id.0,
            "insurance policy",
        )
        .await?;
        let Some((txn, _)) = found else {
            return Ok(false);
        };
        ensure_company_exists(&txn, policy.insurance_company_id).await?;
        ensure_vehicle_exists(&txn, policy.vehicle_id).await?;
        policy_active_model(policy)
            .update(&txn)
            .await
            .context("update insurance policy")?;
        txn.commit().await.context("commit insurance policy update")?;
        Ok(true)
    }

    async fn delete(&self, id: InsurancePolicyId) -> Result<bool, RegistryError> {
        let result = insurance_policies::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .context("delete insurance policy")?;
        Ok(result.rows_affected > 0)
    }
}

impl VehicleScopedRepository for DbInsurancePolicyRepository {
    async fn list_by_vehicle(
        &self,
        vehicle_id: VehicleId,
    ) -> Result<Vec<InsurancePolicy>, RegistryError> {
        let models = insurance_policies::Entity::find()
            .filter(insurance_policies::Column::VehicleId.eq(vehicle_id.0))
            .order_by_asc(insurance_policies::Column::StartsOn)
            .order_by_asc(insurance_policies::Column::Id)
            .all(&self.db)
            .await
            .context("list insurance policies by vehicle")?;
        models.into_iter().map(policy_from_model).collect()
    }
}

impl InsurancePolicyRepository for DbInsurancePolicyRepository {
    async fn list_by_company(
        &self,
        company_id: InsuranceCompanyId,
    ) -> Result<Vec<InsurancePolicy>, RegistryError> {
        let models = insurance_policies::Entity::find()
            .filter(insurance_policies::Column::InsuranceCompanyId.eq(company_id.0))
            .order_by_asc(insurance_policies::Column::StartsOn)
            .order_by_asc(insurance_policies::Column::Id)
            .all(&self.db)
            .await
            .context("list insurance policies by company")?;
        models.into_iter().map(policy_from_model).collect()
    }
}

fn policy_from_model(model: insurance_policies::Model) -> Result<InsurancePolicy, RegistryError> {
    Ok(InsurancePolicy {
        id: InsurancePolicyId(model.id),
        policy_number: model.policy_number,
        insurance_company_id: InsuranceCompanyId(model.insurance_company_id),
        vehicle_id: VehicleId(model.vehicle_id),
        coverage: stored("coverage", &model.coverage)?,
        starts_on: model.starts_on,
        ends_on: model.ends_on,
    })
}

fn policy_active_model(policy: &InsurancePolicy) -> insurance_policies::ActiveModel {
    insurance_policies::ActiveModel {
        id: Set(policy.id.0),
        policy_number: Set(policy.policy_number.clone()),
        insurance_company_id: Set(policy.insurance_company_id.0),
        vehicle_id: Set(policy.vehicle_id.0),
        coverage: Set(policy.coverage.value().to_owned()),
        starts_on: Set(policy.starts_on),
        ends_on: Set(policy.ends_on),
    }
}
