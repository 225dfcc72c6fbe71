//! Terminal front end.
//!
//! Reads one command per line, forwards intents to the orchestrator, and
//! redraws whenever a new view is published or the loader phrase rotates.

mod commands;
mod loader;
mod render;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

pub use self::commands::{Command, CommandError, HELP_TEXT, parse_command};
pub use self::loader::{LOADER_INTERVAL, PhraseCycle};
pub use self::render::render;
use crate::domain::{AppView, Intent, Screen};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

enum Event {
    Line(std::io::Result<Option<String>>),
    ViewChanged(bool),
    Tick,
}

/// Serve the terminal until `quit`, end of input, or the orchestrator stops.
///
/// Dropping `intents` on return closes the orchestrator's intent stream.
///
/// # Errors
///
/// Returns an error when reading input or writing output fails.
pub async fn run_terminal<R, W>(
    input: R,
    mut output: W,
    intents: mpsc::Sender<Intent>,
    mut views: watch::Receiver<AppView>,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(input).lines();
    let mut ticker = time::interval_at(Instant::now() + LOADER_INTERVAL, LOADER_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut phrases = PhraseCycle::default();
    let mut notice: Option<String> = None;

    let view = views.borrow_and_update().clone();
    sync_loader(&mut phrases, &view);
    draw(&mut output, &view, &phrases, notice.as_deref()).await?;

    loop {
        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line),
            changed = views.changed() => Event::ViewChanged(changed.is_ok()),
            _ = ticker.tick(), if phrases.is_cycling() => Event::Tick,
        };
        match event {
            Event::Line(Err(error)) => return Err(error),
            Event::Line(Ok(None)) => {
                debug!("terminal input closed");
                break;
            }
            Event::Line(Ok(Some(line))) => match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => {
                    info!("quit requested");
                    break;
                }
                Ok(Some(Command::Help)) => notice = Some(HELP_TEXT.to_owned()),
                Ok(Some(Command::Intent(intent))) => {
                    notice = None;
                    if intents.send(intent).await.is_err() {
                        debug!("orchestrator stopped; leaving terminal");
                        break;
                    }
                    continue;
                }
                Err(error) => notice = Some(error.to_string()),
            },
            Event::ViewChanged(false) => break,
            Event::ViewChanged(true) => {
                let view = views.borrow_and_update().clone();
                if sync_loader(&mut phrases, &view) {
                    ticker.reset();
                }
            }
            Event::Tick => phrases.advance(),
        }
        let view = views.borrow().clone();
        draw(&mut output, &view, &phrases, notice.as_deref()).await?;
    }
    output.flush().await
}

/// Follow the loader list of `view`; `true` when a different list took over.
fn sync_loader(phrases: &mut PhraseCycle, view: &AppView) -> bool {
    match &view.screen {
        Screen::Loading { phrases: list } => phrases.sync(*list),
        _ => phrases.clear(),
    }
}

async fn draw<W>(
    output: &mut W,
    view: &AppView,
    phrases: &PhraseCycle,
    notice: Option<&str>,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut frame = String::from(CLEAR_SCREEN);
    frame.push_str(&render(view, phrases.current()));
    if let Some(notice) = notice {
        frame.push_str("\n\n");
        frame.push_str(notice);
    }
    frame.push_str("\n> ");
    output.write_all(frame.as_bytes()).await?;
    output.flush().await
}
