use crate::api::MealDbClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetch::Fetcher;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the UI until the user quits. Fetches are spawned on `runtime`.
pub fn run(config: &Config, runtime: Handle) -> anyhow::Result<()> {
    let client = MealDbClient::new(&config.api).context("failed to create API client")?;
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);
    let fetcher = Fetcher::new(client, runtime, events.sender());

    let mut app = App::new(config.list.query.clone()).with_fetcher(fetcher);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    app.mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(event) => dispatch_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("ui exited");
    Ok(())
}

/// Route one event to the app.
pub fn dispatch_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => app.on_resize(cols, rows),
        AppEvent::MealsFetched { generation, result } => app.on_meals_fetched(generation, result),
        AppEvent::MealFetched {
            generation,
            id,
            result,
        } => app.on_meal_fetched(generation, &id, result),
    }
}
