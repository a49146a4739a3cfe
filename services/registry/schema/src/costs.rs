use sea_orm::ActiveValue::{self, NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

/// Cost booked against a vehicle.
///
/// `total` is always `parts + labor`; it is recomputed in
/// [`ActiveModelBehavior::before_save`] on every insert and update, so any
/// value a caller sets on it is overwritten.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "costs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub incurred_on: Date,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub amount: Decimal,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub parts: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub labor: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,
    pub vehicle_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicles::Entity",
        from = "Column::VehicleId",
        to = "super::vehicles::Column::Id",
        on_delete = "Cascade"
    )]
    Vehicle,
}

impl Related<super::vehicles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

fn present<V: Clone>(value: &ActiveValue<V>) -> Option<V>
where
    V: Into<Value>,
{
    match value {
        Set(v) | Unchanged(v) => Some(v.clone()),
        NotSet => None,
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let (parts, labor) = match (present(&self.parts), present(&self.labor)) {
            (Some(parts), Some(labor)) => (parts, labor),
            (parts, labor) if insert => (
                parts.unwrap_or(Decimal::ZERO),
                labor.unwrap_or(Decimal::ZERO),
            ),
            (parts, labor) => {
                // Partial update: fill the missing side from the stored row.
                let id = present(&self.id)
                    .ok_or_else(|| DbErr::Custom("cost update without id".to_owned()))?;
                let stored = Entity::find_by_id(id)
                    .one(db)
                    .await?
                    .ok_or_else(|| DbErr::RecordNotFound(format!("cost {id}")))?;
                (parts.unwrap_or(stored.parts), labor.unwrap_or(stored.labor))
            }
        };
        self.parts = Set(parts);
        self.labor = Set(labor);
        self.total = Set(parts + labor);
        Ok(self)
    }
}
