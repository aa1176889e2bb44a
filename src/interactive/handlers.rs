use std::io::{self, Stdout};
use std::sync::mpsc::Sender;

use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::{Dispatch, InteractiveApp};
use super::event::{Event, EventHandler};
use crate::cli_context::CliContext;
use crate::constants::TICK_RATE_MS;
use crate::error::{UsersError, UsersResult};
use crate::logging::{log_debug, log_error, log_info, log_panic_info};
use crate::sync::Completion;

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run_interactive_mode(url_flag: Option<&str>) -> UsersResult<()> {
    log_info("Starting interactive mode");

    let mut context = CliContext::load(url_flag)?;
    let base_url = context.base_url()?.clone();
    let controller = context.controller()?;
    log_debug(&format!("Using API at {}", base_url));

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let mut app = InteractiveApp::new(controller, base_url);
    let events = EventHandler::new(TICK_RATE_MS);

    // Load is issued before the first frame, ahead of any user action
    app.controller_mut().spawn_load(deliver_to(events.sender()));

    let result = event_loop(&mut terminal, &mut app, &events);

    log_info("Exiting interactive mode");
    restore_terminal(&mut terminal)?;
    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut InteractiveApp,
    events: &EventHandler,
) -> UsersResult<()> {
    loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, app)) {
            log_error(&format!("Error drawing UI: {}", e));
            return Err(UsersError::TerminalError(e.to_string()));
        }

        let first = events
            .recv()
            .map_err(|e| UsersError::TerminalError(format!("Event channel closed: {}", e)))?;
        handle_event(app, events, first);

        // Apply everything already queued before drawing again
        while let Some(event) = events.try_recv() {
            handle_event(app, events, event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_event(app: &mut InteractiveApp, events: &EventHandler, event: Event) {
    match event {
        Event::Key(key_event) => {
            let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
            if ctrl && key_event.code == KeyCode::Char('c') {
                app.should_quit = true;
                return;
            }

            log_debug(&format!("Key pressed: {:?}, Mode: {:?}", key_event.code, app.mode));
            match app.handle_key(key_event.code) {
                Some(Dispatch::Create) => {
                    app.controller_mut().spawn_create(deliver_to(events.sender()));
                }
                Some(Dispatch::Delete(id)) => {
                    app.controller_mut().spawn_delete(id, deliver_to(events.sender()));
                }
                None => {}
            }
        }
        Event::Tick => app.on_tick(),
        Event::Remote(completion) => app.handle_completion(completion),
    }
}

fn deliver_to(sender: Sender<Event>) -> impl FnOnce(Completion) + Send + 'static {
    move |completion| {
        // The loop may already be gone when a late response arrives
        if sender.send(Event::Remote(completion)).is_err() {
            log_debug("Dropped a completion after the UI closed");
        }
    }
}

fn setup_terminal() -> UsersResult<Tui> {
    enable_raw_mode()?;
    let terminal = release_on_error(enter_alternate_screen(), || {
        let _ = disable_raw_mode();
    })?;
    log_debug("Terminal initialized");
    Ok(terminal)
}

fn enter_alternate_screen() -> UsersResult<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `release` when `result` failed, so a half-initialized terminal is
/// handed back to the shell.
fn release_on_error<T>(result: UsersResult<T>, release: impl FnOnce()) -> UsersResult<T> {
    if let Err(e) = &result {
        log_error(&format!("Terminal setup failed: {}", e));
        release();
    }
    result
}

fn restore_terminal(terminal: &mut Tui) -> UsersResult<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        log_panic_info(info);
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn failed_setup_releases_raw_mode() {
        let released = Cell::new(false);
        let result: UsersResult<()> = release_on_error(
            Err(UsersError::TerminalError("no tty".to_string())),
            || released.set(true),
        );

        assert!(matches!(result, Err(UsersError::TerminalError(_))));
        assert!(released.get());
    }

    #[test]
    fn successful_setup_keeps_raw_mode() {
        let released = Cell::new(false);
        let result = release_on_error(Ok(7), || released.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!released.get());
    }
}
