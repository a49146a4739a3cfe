use sea_orm::entity::prelude::*;

/// Insurance policy covering one vehicle, issued by one insurance company.
/// Deleted together with either owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "insurance_policies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub policy_number: String,
    pub insurance_company_id: Uuid,
    pub vehicle_id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub coverage: String,
    pub starts_on: Date,
    pub ends_on: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::insurance_companies::Entity",
        from = "Column::InsuranceCompanyId",
        to = "super::insurance_companies::Column::Id",
        on_delete = "Cascade"
    )]
    InsuranceCompany,
    #[sea_orm(
        belongs_to = "super::vehicles::Entity",
        from = "Column::VehicleId",
        to = "super::vehicles::Column::Id",
        on_delete = "Cascade"
    )]
    Vehicle,
}

impl Related<super::insurance_companies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InsuranceCompany.def()
    }
}

impl Related<super::vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
