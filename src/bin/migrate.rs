use shopcart_service::{
    config::AppConfig,
    db::{create_orm_conn, create_tables},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    create_tables(&orm).await?;
    println!("Tables ensured");
    Ok(())
}
