use clap::Parser;
use pizzeria_restaurant_service::{
    DbPool, IN_MEMORY_DATABASE_URL, StoreError, establish_in_memory_pool, establish_pool,
};
use tracing::warn;

#[derive(Parser, Debug, Clone)]
#[command(about = "HTTP API for restaurants, pizzas and their prices")]
pub struct Config {
    /// SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = "app.db")]
    pub database_url: String,
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:5555")]
    pub listen_addr: String,
    #[arg(long, env = "DATABASE_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,
}

impl Config {
    /// Builds the connection pool. Every connection to `:memory:` opens its
    /// own empty database, so that URL always gets a single kept-alive
    /// connection whatever the configured pool size.
    pub fn establish_pool(&self) -> Result<DbPool, StoreError> {
        if self.database_url == IN_MEMORY_DATABASE_URL {
            if self.pool_size != 1 {
                warn!(
                    pool_size = self.pool_size,
                    "in-memory database, using a single connection"
                );
            }
            establish_in_memory_pool()
        } else {
            establish_pool(&self.database_url, self.pool_size)
        }
    }
}
