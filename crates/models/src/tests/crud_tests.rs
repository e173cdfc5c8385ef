use crate::db::connect_in_memory;
use crate::user_report::{self, NewReport};
use configs::GeoBounds;
use migration::MigratorTrait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};
use anyhow::Result;

/// Fresh migrated in-memory database
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn report(tipo: &str, alcaldia: Option<&str>) -> NewReport {
    NewReport {
        tipo: tipo.to_string(),
        descripcion: format!("{tipo} reportado"),
        lat: 19.43,
        lon: -99.13,
        alcaldia: alcaldia.map(str::to_string),
        colonia: None,
    }
}

/// Create, read back, filter and hard delete
#[tokio::test]
async fn test_user_report_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let input = report("bacheo", Some("Coyoacán"));
    user_report::validate_new(&input, Some(&GeoBounds::default()))?;
    let created = user_report::insert(&db, input).await?;
    assert!(created.id > 0);
    assert_eq!(created.tipo, "bacheo");
    assert_eq!(created.alcaldia.as_deref(), Some("Coyoacán"));
    assert!(created.colonia.is_none());

    let found = user_report::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.as_ref().map(|m| m.id), Some(created.id));
    let found = found.unwrap();
    assert_eq!(found.descripcion, created.descripcion);
    assert_eq!(found.created_at, created.created_at);

    let by_alcaldia = user_report::Entity::find()
        .filter(user_report::Column::Alcaldia.eq("Coyoacán"))
        .all(&db)
        .await?;
    assert_eq!(by_alcaldia.len(), 1);

    found.delete(&db).await?;
    assert!(user_report::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

/// Storage assigns increasing ids
#[tokio::test]
async fn test_ids_are_assigned_by_storage() -> Result<()> {
    let db = setup_test_db().await?;
    let a = user_report::insert(&db, report("fuga", None)).await?;
    let b = user_report::insert(&db, report("fuga", None)).await?;
    assert_eq!(a.id, 1);
    assert!(b.id > a.id);
    Ok(())
}

/// Blank places are persisted as NULL
#[tokio::test]
async fn test_blank_places_stored_as_null() -> Result<()> {
    let db = setup_test_db().await?;
    let input = NewReport { colonia: Some("   ".into()), ..report("fuga", Some("")) };
    let created = user_report::insert(&db, input).await?;
    let found = user_report::Entity::find_by_id(created.id).one(&db).await?.expect("row");
    assert!(found.alcaldia.is_none());
    assert!(found.colonia.is_none());
    Ok(())
}
