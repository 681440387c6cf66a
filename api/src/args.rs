use bookshelf_core::domain::common::{BookshelfConfig, DatabaseConfig, SieveConfig};
use clap::{Args as ClapArgs, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "bookshelf", version, about = "Book catalog API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub sieve: SieveArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server-host", long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server-port", long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix of every route, e.g. `/api/v1`
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "/api/v1")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database-host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database-port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "bookshelf")]
    pub name: String,

    /// Insert the demo catalog into an empty database on startup
    #[arg(long = "database-seed", env = "DATABASE_SEED", default_value_t = true, action = clap::ArgAction::Set)]
    pub seed: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = clap::ArgAction::Set)]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct SieveArgs {
    #[arg(
        long = "sieve-default-page-size",
        env = "SIEVE_DEFAULT_PAGE_SIZE",
        default_value_t = 10
    )]
    pub default_page_size: u64,

    /// Upper bound for `pageSize`; 0 disables the cap
    #[arg(
        long = "sieve-max-page-size",
        env = "SIEVE_MAX_PAGE_SIZE",
        default_value_t = 100
    )]
    pub max_page_size: u64,
}

impl From<Args> for BookshelfConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                seed: args.db.seed,
            },
            sieve: SieveConfig {
                default_page_size: args.sieve.default_page_size.max(1),
                max_page_size: (args.sieve.max_page_size > 0).then_some(args.sieve.max_page_size),
            },
        }
    }
}
