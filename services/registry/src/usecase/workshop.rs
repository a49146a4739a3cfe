use validator::Validate;

use fleet_domain::id::WorkshopId;

use crate::domain::types::Workshop;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct WorkshopInput {
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(max = 255))]
    pub street: String,
    #[validate(length(max = 255))]
    pub city: String,
    #[validate(length(max = 10))]
    pub postal_code: String,
    /// NIP.
    #[validate(length(max = 10))]
    pub tax_id: String,
    /// REGON.
    #[validate(length(max = 14))]
    pub statistical_id: String,
    #[validate(length(max = 15))]
    pub phone: String,
    #[validate(email, length(max = 254))]
    pub email: String,
    #[validate(length(max = 255))]
    pub contact_person: String,
}

impl RecordInput for WorkshopInput {
    type Record = Workshop;

    fn into_record(self, id: WorkshopId) -> Result<Workshop, RegistryError> {
        Ok(Workshop {
            id,
            name: self.name,
            street: self.street,
            city: self.city,
            postal_code: self.postal_code,
            tax_id: self.tax_id,
            statistical_id: self.statistical_id,
            phone: self.phone,
            email: self.email,
            contact_person: self.contact_person,
        })
    }
}
