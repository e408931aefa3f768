use clap::Parser;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8000";
pub const DEFAULT_DATABASE_URL: &str = "posts.db";
pub const IN_MEMORY: &str = ":memory:";

/// A blog-post board: list, create, edit and delete posts.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// SQLite database file, or ":memory:" for a throwaway database
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
    /// Address to bind the server to
    #[arg(short, long, env = "POSTS_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: String,
    /// Maximum number of pooled database connections
    #[arg(long, env = "POSTS_POOL_SIZE", default_value_t = 8)]
    pub pool_size: u32,
}

impl Config {
    /// A config over a fresh in-memory database.
    pub fn in_memory() -> Self {
        Self {
            database_url: IN_MEMORY.to_string(),
            addr: DEFAULT_ADDR.to_string(),
            pool_size: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url == IN_MEMORY
    }

    /// Every in-memory sqlite connection is a database of its own,
    /// so such a pool holds exactly one.
    pub fn max_pool_size(&self) -> u32 {
        if self.is_in_memory() {
            1
        } else {
            self.pool_size.max(1)
        }
    }
}
