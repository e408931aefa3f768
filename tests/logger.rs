mod common;

use common::serve;
use lazy_static::lazy_static;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};
use roa_posts::StdError;
use std::sync::RwLock;

struct TestLogger {
    records: RwLock<Vec<(String, String)>>,
}

impl log::Log for TestLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }
    fn log(&self, record: &Record) {
        self.records
            .write()
            .unwrap()
            .push((record.level().to_string(), record.args().to_string()))
    }
    fn flush(&self) {}
}

lazy_static! {
    static ref LOGGER: TestLogger = TestLogger {
        records: RwLock::new(Vec::new()),
    };
}

fn init() -> Result<(), SetLoggerError> {
    log::set_logger(&*LOGGER).map(|()| log::set_max_level(LevelFilter::Info))
}

fn logged(level: &str, message: &str) -> bool {
    LOGGER
        .records
        .read()
        .unwrap()
        .iter()
        .any(|(lvl, msg)| lvl == level && msg == message)
}

#[tokio::test]
async fn actions_are_logged() -> Result<(), Box<dyn StdError>> {
    init()?;
    let (base, _state) = serve()?;
    let client = Client::builder().redirect(Policy::none()).build()?;

    // write
    let resp = client
        .post(&format!("{}/posts", base))
        .form(&[("title", "Hello")])
        .send()
        .await?;
    assert_eq!(StatusCode::SEE_OTHER, resp.status());
    assert!(logged("INFO", "post(1) created"));

    // failure caught at the form action
    let resp = client
        .post(&format!("{}/posts", base))
        .form(&[("title", "")])
        .send()
        .await?;
    assert_eq!(StatusCode::SEE_OTHER, resp.status());
    assert!(logged("ERROR", "failed to create post: Title is required."));

    let resp = client
        .post(&format!("{}/posts/9/delete", base))
        .send()
        .await?;
    assert_eq!(StatusCode::SEE_OTHER, resp.status());
    assert!(logged("ERROR", "failed to delete post(9): post(9) not found"));
    Ok(())
}
