use sea_orm::entity::prelude::*;

/// Employee record. `plate_number` names the assigned vehicle as text only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub first_name: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub last_name: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub job_title: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub department: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub plate_number: String,
    pub cost_center: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
