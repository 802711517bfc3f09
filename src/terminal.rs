use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type GameTerminal = Terminal<CrosstermBackend<Stdout>>;

static PANIC_HOOK: Once = Once::new();

/// Switch to raw mode and the alternate screen.
///
/// A panic hook is installed once so a crash still hands the terminal back
/// in a usable state.
pub fn init() -> io::Result<GameTerminal> {
    PANIC_HOOK.call_once(install_panic_hook);
    enable_raw_mode()?;
    undo_on_error(io::stdout().execute(EnterAlternateScreen).map(|_| ()), || {
        let _ = disable_raw_mode();
    })?;
    tracing::debug!("terminal entered alternate screen");
    undo_on_error(Terminal::new(CrosstermBackend::new(io::stdout())), || {
        let _ = restore();
    })
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    tracing::debug!("terminal restored");
    Ok(())
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}

/// Run `undo` when a setup step fails, then hand the error back.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_setup_step_is_undone() {
        let mut undone = false;
        let result: io::Result<()> = undo_on_error(Err(io::Error::other("no tty")), || undone = true);

        assert!(undone);
        assert_eq!(result.unwrap_err().to_string(), "no tty");
    }

    #[test]
    fn test_successful_setup_step_is_kept() {
        let mut undone = false;
        let result = undo_on_error(Ok(7), || undone = true);

        assert!(!undone);
        assert_eq!(result.unwrap(), 7);
    }
}
