use sea_orm::entity::prelude::*;

/// Fuel card. `plate_number` is informational and not a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fuel_cards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub card_number: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub plate_number: String,
    pub expires_on: Date,
    #[sea_orm(column_type = "String(StringLen::N(4))")]
    pub pin: String,
    #[sea_orm(column_type = "String(StringLen::N(1))")]
    pub card_type: String,
    pub is_active: bool,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub spending_limit: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
