use validator::Validate;

use fleet_domain::id::EmployeeId;

use crate::domain::types::Employee;
use crate::domain::validate::parse_cost_center;
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct EmployeeInput {
    #[validate(length(max = 255))]
    pub first_name: String,
    #[validate(length(max = 255))]
    pub last_name: String,
    #[validate(length(max = 255))]
    pub job_title: String,
    #[validate(length(max = 255))]
    pub department: String,
    /// Assigned car, as text.
    #[validate(length(max = 20))]
    pub plate_number: String,
    /// Numeric department code, e.g. 7700.
    pub cost_center: i32,
}

impl RecordInput for EmployeeInput {
    type Record = Employee;

    fn into_record(self, id: EmployeeId) -> Result<Employee, RegistryError> {
        Ok(Employee {
            id,
            cost_center: parse_cost_center("cost_center", self.cost_center)?,
            first_name: self.first_name,
            last_name: self.last_name,
            job_title: self.job_title,
            department: self.department,
            plate_number: self.plate_number,
        })
    }
}
