//! Field checks shared by record inputs.
//!
//! Length and email shape are declared on the input structs with
//! `#[derive(Validate)]`; this module holds the custom rules and the
//! conversions from raw choice values into closed enums.

use std::borrow::Cow;
use std::str::FromStr;

use rust_decimal::Decimal;
use validator::ValidationError;

use fleet_domain::choice::UnknownChoice;
use fleet_domain::cost_center::CostCenter;

use crate::error::RegistryError;

/// Fixed PIN length on fuel cards.
pub const PIN_LENGTH: usize = 4;

/// Largest magnitude a `NUMERIC(10, 2)` column holds, exclusive.
const MONEY_LIMIT: i64 = 100_000_000;

/// PIN must be exactly four ASCII digits.
pub fn validate_pin(pin: &str) -> Result<(), ValidationError> {
    if pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(invalid("pin", "PIN must be exactly 4 digits"))
    }
}

/// Money fits `NUMERIC(10, 2)`: at most two fractional and eight integer digits.
pub fn validate_money(value: &Decimal) -> Result<(), ValidationError> {
    if value.normalize().scale() > 2 {
        return Err(invalid("money_scale", "at most 2 fractional digits"));
    }
    if value.abs() >= Decimal::from(MONEY_LIMIT) {
        return Err(invalid("money_range", "at most 8 integer digits"));
    }
    Ok(())
}

/// A cost total is stored in the same `NUMERIC(10, 2)` shape as its sides.
pub fn validate_cost_total(parts: Decimal, labor: Decimal) -> Result<(), ValidationError> {
    if (parts + labor).abs() >= Decimal::from(MONEY_LIMIT) {
        return Err(invalid("total_range", "parts plus labor exceeds 8 integer digits"));
    }
    Ok(())
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Parse a raw choice value for `field`.
pub fn parse_choice<T>(field: &'static str, value: &str) -> Result<T, RegistryError>
where
    T: FromStr<Err = UnknownChoice>,
{
    value
        .parse()
        .map_err(|e: UnknownChoice| RegistryError::InvalidChoice {
            field,
            value: e.value,
        })
}

/// Parse an optional raw choice value; `None` and blank stay unset.
pub fn parse_optional_choice<T>(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>, RegistryError>
where
    T: FromStr<Err = UnknownChoice>,
{
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => parse_choice(field, v).map(Some),
    }
}

/// Parse a department cost-center code.
pub fn parse_cost_center(field: &'static str, code: i32) -> Result<CostCenter, RegistryError> {
    CostCenter::try_from(code).map_err(|e| RegistryError::InvalidChoice {
        field,
        value: e.value,
    })
}
