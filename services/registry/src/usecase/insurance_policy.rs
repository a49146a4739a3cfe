use chrono::NaiveDate;
use tracing::warn;
use validator::Validate;

use fleet_domain::id::{InsuranceCompanyId, InsurancePolicyId, VehicleId};

use crate::domain::types::InsurancePolicy;
use crate::domain::validate::parse_choice;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct InsurancePolicyInput {
    #[validate(length(max = 255))]
    pub policy_number: String,
    pub insurance_company_id: InsuranceCompanyId,
    pub vehicle_id: VehicleId,
    /// `"złoty"`, `"platynowy"` or `"złoty+"`.
    pub coverage: String,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
}

impl RecordInput for InsurancePolicyInput {
    type Record = InsurancePolicy;

    fn into_record(self, id: InsurancePolicyId) -> Result<InsurancePolicy, RegistryError> {
        let policy = InsurancePolicy {
            id,
            coverage: parse_choice("coverage", &self.coverage)?,
            policy_number: self.policy_number,
            insurance_company_id: self.insurance_company_id,
            vehicle_id: self.vehicle_id,
            starts_on: self.starts_on,
            ends_on: self.ends_on,
        };
        // accepted as-is; the period is not checked on write
        if !policy.has_valid_period() {
            warn!(
                policy_number = %policy.policy_number,
                starts_on = %policy.starts_on,
                ends_on = %policy.ends_on,
                "insurance policy ends before it starts"
            );
        }
        Ok(policy)
    }
}
