use sea_orm::entity::prelude::*;

/// Insurance company issuing vehicle policies.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "insurance_companies")]
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
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::insurance_policies::Entity")]
    InsurancePolicies,
}

impl Related<super::insurance_policies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsurancePolicies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
