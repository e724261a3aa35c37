use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::{Items, Shopcarts};

/// Process exit code used when the database cannot be reached or prepared at boot.
pub const DB_INIT_EXIT_CODE: i32 = 4;

/// Create a SeaORM connection.
///
/// SQLite serializes writers anyway, and an in-memory database only lives as long
/// as its connection, so SQLite URLs get a single pooled connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    if database_url.starts_with("sqlite") {
        options.max_connections(1).min_connections(1);
    }
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Create the `shopcarts` and `items` tables from the entity definitions if missing.
pub async fn create_tables(conn: &DatabaseConnection) -> Result<()> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut shopcarts = schema.create_table_from_entity(Shopcarts);
    let mut items = schema.create_table_from_entity(Items);

    shopcarts.if_not_exists();
    items.if_not_exists();

    conn.execute(backend.build(&shopcarts)).await?;
    conn.execute(backend.build(&items)).await?;

    tracing::debug!("database tables ensured");
    Ok(())
}

/// Connect and prepare the schema; the server refuses to start if this fails.
pub async fn init(database_url: &str) -> Result<DatabaseConnection> {
    let conn = create_orm_conn(database_url).await?;
    create_tables(&conn).await?;
    Ok(conn)
}
