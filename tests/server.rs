use clap::Parser;
use reqwest::StatusCode;
use roa_posts::models::Post;
use roa_posts::{bind, Config, StdError};
use serde_json::json;
use std::cell::Cell;

#[tokio::test]
async fn binary_boot_serves_pages_and_api() -> Result<(), Box<dyn StdError>> {
    let config = Config::try_parse_from([
        "posts",
        "--database-url",
        ":memory:",
        "--addr",
        "127.0.0.1:0",
    ])?;
    let bound = Cell::new(None);
    let server = bind(&config, &|addr| bound.set(Some(addr)))?;
    let addr = bound.get().ok_or("server is not bound")?;
    tokio::task::spawn(server);

    let resp = reqwest::get(&format!("http://{}/", addr)).await?;
    assert_eq!(StatusCode::OK, resp.status());
    assert!(resp.text().await?.contains("Posts CRUD Demo"));

    // the write runs on the blocking pool of the same runtime
    let client = reqwest::Client::new();
    let resp = client
        .post(&format!("http://{}/api/posts", addr))
        .json(&json!({"title": "Hello"}))
        .send()
        .await?;
    assert_eq!(StatusCode::CREATED, resp.status());
    let created: Post = resp.json().await?;

    let listed: Vec<Post> = reqwest::get(&format!("http://{}/api/posts", addr))
        .await?
        .json()
        .await?;
    assert_eq!(vec![created], listed);
    Ok(())
}
