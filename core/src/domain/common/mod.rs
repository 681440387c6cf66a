pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct BookshelfConfig {
    pub database: DatabaseConfig,
    pub sieve: SieveConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    /// Insert the demo catalog when the books table is empty.
    pub seed: bool,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct SieveConfig {
    pub default_page_size: u64,
    pub max_page_size: Option<u64>,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            default_page_size: 10,
            max_page_size: Some(100),
        }
    }
}
