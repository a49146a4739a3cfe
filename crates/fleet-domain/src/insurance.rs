//! Insurance policy choice sets.

use crate::choice::choice_enum;

choice_enum! {
    /// Coverage tier of an insurance policy.
    pub enum CoverageTier : "coverage tier" {
        Gold => ("złoty", "Złoty"),
        Platinum => ("platynowy", "Platynowy"),
        GoldPlus => ("złoty+", "Złoty+"),
    }
}
