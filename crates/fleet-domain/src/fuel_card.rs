//! Fuel card choice sets.

use crate::choice::choice_enum;

choice_enum! {
    /// Whether a fuel card is bound to a vehicle or to a driver.
    pub enum CardType : "card type" {
        Vehicle => ("S", "Samochód"),
        Driver => ("K", "Kierowca"),
    }
}

choice_enum! {
    /// Spending-limit tier assigned by the card issuer.
    pub enum SpendingLimit : "spending limit" {
        C3Standard => ("C_3/60+120", "C_3/60+120"),
        C3AutoGas => ("C_3/60+120+AutoGaz", "C_3/60+120+AutoGaz"),
        C1Low => ("C_1/75+120", "C_1/75+120"),
        C1High => ("C_1/600+120", "C_1/600+120"),
    }
}
