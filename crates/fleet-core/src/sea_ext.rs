use sea_orm::{ConnectionTrait, DbErr, EntityTrait, Schema};

/// Create the table backing `entity` from its definition unless it already
/// exists. Foreign keys declared on the entity's relations are included.
pub async fn create_table_if_missing<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = Schema::new(backend).create_table_from_entity(entity);
    stmt.if_not_exists();
    db.execute(backend.build(&stmt)).await?;
    Ok(())
}
