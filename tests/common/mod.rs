//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use mealbrowse::api::{Meal, MealDbClient};
use mealbrowse::config::ApiConfig;
use mealbrowse::ui::app::App;
use mealbrowse::ui::events::AppEvent;
use mealbrowse::ui::fetch::Fetcher;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::time::{Duration, Instant};

pub fn meal(id: &str, name: &str) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: format!("https://www.themealdb.com/images/media/meals/{id}.jpg"),
        area: Some("Turkish".to_string()),
        category: Some("Side".to_string()),
        instructions: Some("Pick through your lentils.\r\nRinse them.".to_string()),
    }
}

pub fn client_for(base_url: &str) -> MealDbClient {
    MealDbClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    })
    .expect("client")
}

/// App wired to a real fetcher against `base_url`, plus the event receiver.
///
/// Must be called inside a multi-threaded tokio runtime.
pub fn app_with_fetcher(base_url: &str) -> (App, Receiver<AppEvent>) {
    let (tx, rx) = mpsc::channel();
    let fetcher = Fetcher::new(client_for(base_url), tokio::runtime::Handle::current(), tx);
    (App::new("chicken").with_fetcher(fetcher), rx)
}

/// Wait for the next fetch completion without blocking the runtime.
pub async fn next_event(rx: &Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        match rx.try_recv() {
            Ok(event) => return Some(event),
            Err(TryRecvError::Empty) => tokio::time::sleep(Duration::from_millis(5)).await,
            Err(TryRecvError::Disconnected) => return None,
        }
    }
    None
}
