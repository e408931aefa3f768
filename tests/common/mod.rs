#![allow(dead_code)]

use diesel::prelude::*;
use roa::preload::*;
use roa::query::query_parser;
use roa::App;
use roa_posts::models::Post;
use roa_posts::schema::posts::dsl::{id, posts};
use roa_posts::{post_router, Config, State, StdError};

/// Serves the app over a fresh in-memory database,
/// returns its base url and a handle on its state.
pub fn serve() -> Result<(String, State), Box<dyn StdError>> {
    let state = State::new(&Config::in_memory())?;
    let app = App::state(state.clone())
        .gate(query_parser)
        .end(post_router().routes("/")?);
    let (addr, server) = app.run()?;
    tokio::task::spawn(server);
    Ok((format!("http://{}", addr), state))
}

/// Reads the table behind the server's back, ordered by id.
pub fn rows(state: &State) -> Result<Vec<Post>, Box<dyn StdError>> {
    let conn = state.pool().get()?;
    Ok(posts.order(id.asc()).load::<Post>(&*conn)?)
}
