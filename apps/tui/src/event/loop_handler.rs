use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tokio::task::JoinHandle;

use apple_a_day::content::{fetch_content_items, ContentError, ContentSource};
use apple_a_day::page::PageController;
use apple_a_day::report::HeadlessReport;
use apple_a_day::AppleDay;
use chrono::NaiveDate;

use crate::app::{handle_key, handle_mouse, App};
use crate::terminal::GestureSubscription;
use crate::ui;

/// Poll interval while something on screen is moving.
const FRAME_POLL: Duration = Duration::from_millis(16);
/// Poll interval when the page is static.
const IDLE_POLL: Duration = Duration::from_millis(250);

type FetchReceiver = oneshot::Receiver<Result<Vec<AppleDay>, ContentError>>;

/// Run the application in headless mode (no UI)
pub async fn run_headless(source: Box<dyn ContentSource>, today: NaiveDate, json: bool) -> Result<()> {
    let mut page = PageController::new(today);
    page.begin_fetch();
    page.finish_fetch(fetch_content_items(source.as_ref()).await);

    let report = HeadlessReport::from_page(&page);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}

/// Starts the one fetch for this page load on a background task.
fn spawn_fetch(source: Box<dyn ContentSource>) -> (JoinHandle<()>, FetchReceiver) {
    let (tx, rx) = oneshot::channel();
    let handle = tokio::spawn(async move {
        let result = fetch_content_items(source.as_ref()).await;
        if tx.send(result).is_err() {
            tracing::debug!("page closed before apples arrived");
        }
    });
    (handle, rx)
}

/// Hands a finished fetch to the app. Returns true once the receiver is spent.
fn poll_fetch(app: &mut App, rx: &mut FetchReceiver) -> bool {
    match rx.try_recv() {
        Ok(result) => {
            app.finish_fetch(result);
            true
        }
        Err(TryRecvError::Empty) => false,
        Err(TryRecvError::Closed) => {
            app.finish_fetch(Err(ContentError::Interrupted));
            true
        }
    }
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    source: Box<dyn ContentSource>,
) -> Result<()> {
    let mut fetch = if app.page.begin_fetch() {
        Some(spawn_fetch(source))
    } else {
        None
    };
    let _gestures = GestureSubscription::acquire();

    let result = loop {
        if let Some((_, rx)) = fetch.as_mut() {
            if poll_fetch(app, rx) {
                fetch = None;
            }
        }

        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            break Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        let timeout = if app.animation.is_running() || app.page.is_fetching() {
            FRAME_POLL
        } else {
            IDLE_POLL
        };

        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_key(app, key),
                Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse),
                Ok(Event::FocusLost) => app.swipe.cancel(),
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "failed to read terminal event"),
            },
            Ok(false) => {}
            Err(e) => break Err(color_eyre::eyre::eyre!("Event poll error: {e}")),
        }

        if !app.running {
            break Ok(());
        }
    };

    if let Some((handle, _)) = fetch.take() {
        handle.abort();
    }
    app.teardown();
    result
}
