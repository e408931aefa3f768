//! A blog-post board on top of roa and diesel.
//!
//! The list page at `/` renders every post, newest first, with a creation form.
//! Each post can be edited in place or deleted; form actions redirect back
//! to the list with a one-shot notice.
//! The same actions are served as json under `/api/posts`.
//!
//! ```rust,no_run
//! use roa_posts::{bind, Config, StdError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn StdError>> {
//!     let server = bind(&Config::in_memory(), &|addr| println!("listening on {}", addr))?;
//!     server.await.map_err(|e| e as Box<dyn StdError>)?;
//!     Ok(())
//! }
//! ```

#[macro_use]
extern crate diesel;

mod actions;
mod api;
mod config;
mod endpoints;
mod err;
mod view;

pub mod cache;
pub mod data_object;
pub mod models;
pub mod page_state;
pub mod schema;

pub use actions::PostActions;
pub use config::Config;
pub use endpoints::post_router;
pub use err::ActionError;
pub use std::error::Error as StdError;

/// Failure of a running server.
pub type ServerError = Box<dyn StdError + Send + Sync>;

use cache::ListCache;
use diesel::r2d2::ConnectionManager;
use diesel::sqlite::SqliteConnection;
use diesel::RunQueryDsl;
use models::Post;
use roa::logger::logger;
use roa::preload::*;
use roa::query::query_parser;
use roa::App;
use roa_diesel::Pool;
use std::future::Future;
use std::net::SocketAddr;

const CREATE_POSTS: &str = r"
    CREATE TABLE IF NOT EXISTS posts (
      id INTEGER PRIMARY KEY AUTOINCREMENT,
      title VARCHAR NOT NULL,
      content TEXT,
      published BOOLEAN NOT NULL DEFAULT 0,
      created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
";

/// Shared by every request: the connection pool and the cached post list.
#[derive(Clone)]
pub struct State {
    pool: Pool<SqliteConnection>,
    cache: ListCache<Vec<Post>>,
}

impl State {
    /// Opens the database and creates the `posts` table if it is missing.
    pub fn new(config: &Config) -> Result<Self, Box<dyn StdError>> {
        let mut pool_builder =
            Pool::<SqliteConnection>::builder().max_size(config.max_pool_size());
        if config.is_in_memory() {
            // the database lives as long as its only connection
            pool_builder = pool_builder.idle_timeout(None).max_lifetime(None);
        }
        let pool =
            pool_builder.build(ConnectionManager::new(config.database_url.as_str()))?;
        diesel::sql_query(CREATE_POSTS).execute(&*pool.get()?)?;
        Ok(Self {
            pool,
            cache: ListCache::new(),
        })
    }

    pub fn pool(&self) -> &Pool<SqliteConnection> {
        &self.pool
    }
}

impl AsRef<Pool<SqliteConnection>> for State {
    fn as_ref(&self) -> &Pool<SqliteConnection> {
        &self.pool
    }
}

/// Opens the database, builds the app and binds it to `config.addr`.
///
/// `bound` is called with the real address before the server is returned;
/// the server runs once it is awaited on a tokio runtime.
pub fn bind(
    config: &Config,
    bound: &dyn Fn(SocketAddr),
) -> Result<impl Future<Output = Result<(), ServerError>> + Send, Box<dyn StdError>> {
    let app = App::state(State::new(config)?)
        .gate(logger)
        .gate(query_parser)
        .end(post_router().routes("/")?);
    let server = app.listen(config.addr.as_str(), bound)?;
    Ok(async move {
        let served: Result<(), ServerError> = server.await.map_err(Into::into);
        served
    })
}
