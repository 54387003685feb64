pub mod action;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod table_body;
pub mod view;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::AppState;
pub use table_body::TuiTableBody;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::debug;

use crate::browser::{BrowserEvent, BrowserSettings, CountryBrowser};
use crate::config::Config;
use crate::data_provider::CountryDataProvider;

/// Poll interval for keyboard events
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs `restore` when dropped, including on an early `?` return
struct RestoreOnDrop<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreOnDrop<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leave raw mode and the alternate screen; errors are ignored, there is
/// nothing left to report them to
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Main entry point for TUI mode
pub async fn run(provider: Arc<dyn CountryDataProvider>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let _restore = RestoreOnDrop::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut browser = CountryBrowser::new(
        provider,
        BrowserSettings::from(&config),
        Some(TuiTableBody::default()),
    );

    // Initial load happens before any input is handled
    browser.dispatch(BrowserEvent::Ready).await;

    event_loop(&mut terminal, &mut browser, &config).await
}

/// Draw, wait for a key, apply it; each browser event is awaited before the
/// next key is read
async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    browser: &mut CountryBrowser<TuiTableBody>,
    config: &Config,
) -> Result<(), io::Error> {
    let mut state = AppState::default();

    loop {
        terminal.draw(|f| view::draw(f, &state, browser, config))?;

        if !event::poll(EVENT_POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key) else {
            continue;
        };
        if action == Action::Quit {
            debug!("ACTION: Quitting application");
            return Ok(());
        }

        let visible = browser.table_body().map(|body| body.len()).unwrap_or(0);
        let (new_state, event) = reduce(state, &action, visible);
        state = new_state;

        if let Some(event) = event {
            browser.dispatch(event).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup_that_fails(restored: &Cell<u32>) -> Result<(), io::Error> {
        let _restore = RestoreOnDrop::new(|| restored.set(restored.get() + 1));
        let terminal: Result<(), io::Error> = Err(io::Error::other("no terminal"));
        terminal?;
        Ok(())
    }

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(0);
        assert!(setup_that_fails(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn test_restore_runs_once_on_normal_exit() {
        let restored = Cell::new(0);
        {
            let _restore = RestoreOnDrop::new(|| restored.set(restored.get() + 1));
            assert_eq!(restored.get(), 0);
        }
        assert_eq!(restored.get(), 1);
    }
}
