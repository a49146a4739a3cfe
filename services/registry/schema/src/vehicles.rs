use sea_orm::entity::prelude::*;

/// Vehicle held by the company.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub make: String,
    #[sea_orm(column_name = "model", column_type = "String(StringLen::N(255))")]
    pub model_name: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub category: String,
    pub production_year: i32,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub plate_number: String,
    pub first_registration_year: i32,
    #[sea_orm(column_type = "String(StringLen::N(17))")]
    pub vin: String,
    pub power: f64,
    pub engine_displacement: f64,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub fuel_type: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub ownership: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::insurance_policies::Entity")]
    InsurancePolicies,
    #[sea_orm(has_many = "super::technical_inspections::Entity")]
    TechnicalInspections,
    #[sea_orm(has_many = "super::repairs::Entity")]
    Repairs,
    #[sea_orm(has_many = "super::costs::Entity")]
    Costs,
}

impl Related<super::insurance_policies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsurancePolicies.def()
    }
}

impl Related<super::technical_inspections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechnicalInspections.def()
    }
}

impl Related<super::repairs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repairs.def()
    }
}

impl Related<super::costs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Costs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
