//! Tire set choice sets.

use crate::choice::choice_enum;

choice_enum! {
    /// Season a tire set is made for.
    pub enum TireCategory : "tire category" {
        Summer => ("letnie", "Letnie"),
        Winter => ("zimowe", "Zimowe"),
        AllSeason => ("całoroczne", "Całoroczne"),
    }
}

choice_enum! {
    /// Condition of a single mounted tire.
    pub enum TireCondition : "tire condition" {
        Good => ("dobry", "Dobry"),
        NeedsReplacement => ("do wymiany", "Do wymiany"),
        Damaged => ("uszkodzony", "Uszkodzony"),
    }
}
