use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "workshops")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub street: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub city: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub postal_code: String,
    #[sea_orm(column_type = "String(StringLen::N(10))")]
    pub tax_id: String,
    #[sea_orm(column_type = "String(StringLen::N(14))")]
    pub statistical_id: String,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub phone: String,
    #[sea_orm(column_type = "String(StringLen::N(254))")]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub contact_person: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
