use clap::Parser;
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pizzeria_restaurant_service::{establish_pool, run_migrations, seed::seed};

#[derive(Parser, Debug)]
#[command(about = "Reset the database to the sample restaurants and pizzas")]
struct Args {
    #[arg(long, env = "DATABASE_URL", default_value = "app.db")]
    database_url: String,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let pool = establish_pool(&args.database_url, 1)?;
    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    match seed(&mut conn) {
        Ok(summary) => {
            info!(
                restaurants = summary.restaurants,
                pizzas = summary.pizzas,
                restaurant_pizzas = summary.restaurant_pizzas,
                "Seeding done!"
            );
            Ok(())
        }
        Err(e) => {
            error!("An error occurred: {e}");
            Err(e.into())
        }
    }
}
