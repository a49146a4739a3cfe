use sea_orm::entity::prelude::*;

/// Tire set with the condition of each mounted wheel.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tire_sets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub plate_number: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub category: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub size: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub front_left: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub rear_left: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub front_right: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub rear_right: String,
    #[sea_orm(column_type = "Text")]
    pub remarks: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
