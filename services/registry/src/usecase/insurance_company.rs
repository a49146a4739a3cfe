use validator::Validate;

use fleet_domain::id::InsuranceCompanyId;

use crate::domain::types::InsuranceCompany;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct InsuranceCompanyInput {
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub street: String,
    #[validate(length(max = 255))]
    pub city: String,
    #[validate(length(max = 10))]
    pub postal_code: String,
}

impl RecordInput for InsuranceCompanyInput {
    type Record = InsuranceCompany;

    fn into_record(self, id: InsuranceCompanyId) -> Result<InsuranceCompany, RegistryError> {
        Ok(InsuranceCompany {
            id,
            name: self.name,
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
        })
    }
}
