use shopcart_service::{
    config::AppConfig,
    db,
    dto::{items::ItemPayload, shopcarts::ShopcartPayload},
    services::shopcart_service as carts,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let state = AppState {
        db: db::init(&config.database_url).await?,
    };

    let fixtures = vec![
        (
            101,
            vec![
                ("Milk", "Whole milk, 1 gallon", 2, 3.49),
                ("Bread", "Sourdough loaf", 1, 4.25),
            ],
        ),
        (102, vec![("Eggs", "Free range, dozen", 1, 5.99)]),
        (
            103,
            vec![
                ("Apples", "Honeycrisp", 6, 0.89),
                ("Cheese", "Aged cheddar", 1, 7.5),
            ],
        ),
    ];

    for (customer_id, items) in fixtures {
        let payload = ShopcartPayload {
            id: None,
            customer_id,
            time_atc: None,
            items: Some(
                items
                    .into_iter()
                    .map(|(name, description, quantity, price)| ItemPayload {
                        id: None,
                        shopcart_id: None,
                        name: Some(name.to_string()),
                        description: description.to_string(),
                        quantity,
                        price,
                    })
                    .collect(),
            ),
        };
        let cart = carts::create_shopcart(&state, payload).await?;
        println!(
            "Seeded shopcart {} for customer {} with {} items",
            cart.id,
            cart.customer_id,
            cart.items.len()
        );
    }

    Ok(())
}
