//! Runtime: terminal lifecycle and event loop for the interactive demo.
//!
//! - A dedicated OS thread blocks on `crossterm::event::read()` and forwards
//!   events over a Tokio channel.
//! - The loop redraws only after input that changed state, or on resize.
//! - `Ctrl+C` arrives as a key event in raw mode; `tokio::signal` covers the
//!   case where raw mode could not be enabled.
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use stepper_types::StepProgressSettings;
use tokio::{signal, sync::mpsc};

use crate::ui::app::App;

type DemoTerminal = Terminal<CrosstermBackend<std::io::Stdout>>;

/// Spawn the input thread. The thread exits when the receiver is dropped.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(64);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!("Failed to read event: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen. Raw mode
/// is undone when any later step fails.
fn setup_terminal() -> Result<DemoTerminal> {
    enable_raw_mode()?;
    rollback_on_error(enter_alternate_screen, || {
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> Result<DemoTerminal> {
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn rollback_on_error<T>(setup: impl FnOnce() -> Result<T>, rollback: impl FnOnce()) -> Result<T> {
    let result = setup();
    if result.is_err() {
        rollback();
    }
    result
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut DemoTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut DemoTerminal, app: &mut App) -> Result<()> {
    terminal.draw(|frame| super::main::draw(frame, app))?;
    Ok(())
}

/// Entry point: sets up the terminal, runs the loop, and always restores
/// the terminal before returning.
pub async fn run_app(settings: StepProgressSettings) -> Result<()> {
    let mut app = App::new(settings)?;
    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    outcome
}

async fn event_loop(terminal: &mut DemoTerminal, app: &mut App, input_receiver: &mut mpsc::Receiver<Event>) -> Result<()> {
    render(terminal, app)?;
    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                let needs_render = match event {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => app.handle_key(key_event),
                    Event::Resize(..) => true,
                    _ => false,
                };
                if app.should_quit {
                    break;
                }
                if needs_render {
                    render(terminal, app)?;
                }
            }
            _ = signal::ctrl_c() => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn failed_setup_runs_rollback() {
        let rolled_back = Cell::new(false);
        let result: Result<()> = rollback_on_error(|| Err(anyhow::anyhow!("no tty")), || rolled_back.set(true));
        assert!(result.is_err());
        assert!(rolled_back.get());
    }

    #[test]
    fn successful_setup_keeps_raw_mode() {
        let rolled_back = Cell::new(false);
        let value = rollback_on_error(|| Ok(7), || rolled_back.set(true)).unwrap();
        assert_eq!(value, 7);
        assert!(!rolled_back.get());
    }
}
