use chrono::NaiveDate;
use validator::Validate;

use fleet_domain::id::FuelCardId;

use crate::domain::types::FuelCard;
use crate::domain::validate::{parse_choice, parse_optional_choice, validate_pin};
use crate::error::RegistryError;
use crate::usecase::record::RecordInput;

#[derive(Debug, Clone, Validate)]
pub struct FuelCardInput {
    #[validate(length(max = 255))]
    pub card_number: String,
    #[validate(length(max = 20))]
    pub plate_number: String,
    pub expires_on: NaiveDate,
    #[validate(custom = "validate_pin")]
    pub pin: String,
    /// `"S"` (vehicle card) or `"K"` (driver card).
    pub card_type: String,
    pub is_active: bool,
    /// Blank or absent leaves the limit unset.
    pub spending_limit: Option<String>,
}

impl RecordInput for FuelCardInput {
    type Record = FuelCard;

    fn into_record(self, id: FuelCardId) -> Result<FuelCard, RegistryError> {
        Ok(FuelCard {
            id,
            card_type: parse_choice("card_type", &self.card_type)?,
            spending_limit: parse_optional_choice(
                "spending_limit",
                self.spending_limit.as_deref(),
            )?,
            card_number: self.card_number,
            plate_number: self.plate_number,
            expires_on: self.expires_on,
            pin: self.pin,
            is_active: self.is_active,
        })
    }
}
