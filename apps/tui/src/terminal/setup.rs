use color_eyre::Result;
use crossterm::{
    cursor,
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Write};
use tracing::{debug, warn};

/// Put the terminal into raw mode on the alternate screen with mouse
/// reporting on. Any step that fails undoes the steps before it.
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    debug!(width, height, "setting up terminal");

    if let Err(e) = enable_raw_mode() {
        return Err(color_eyre::eyre::eyre!("Failed to enable raw mode: {e}"));
    }

    let mut stdout = stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enter alternate screen: {e}"
        ));
    }

    // Hover needs motion events, not just clicks.
    if let Err(e) = execute!(stdout, EnableMouseCapture) {
        let _ = execute!(stdout, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        return Err(color_eyre::eyre::eyre!(
            "Failed to enable mouse capture: {e}"
        ));
    }

    if let Err(e) = execute!(stdout, EnableFocusChange) {
        warn!("failed to enable focus events: {e}");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(term) => term,
        Err(e) => {
            cleanup_terminal_state(true, true);
            return Err(color_eyre::eyre::eyre!("Failed to create terminal: {e}"));
        }
    };

    if let Err(e) = terminal.clear() {
        warn!("failed to clear terminal: {e}");
    }

    if let Err(e) = execute!(std::io::stdout(), cursor::Hide) {
        warn!("failed to hide cursor: {e}");
    }

    debug!("terminal ready");
    Ok(terminal)
}

/// Restore the terminal, logging rather than failing on each step.
pub fn cleanup_terminal_state(raw_mode: bool, alternate_screen: bool) {
    let mut stdout_handle = stdout();

    if let Err(e) = execute!(stdout_handle, cursor::Show) {
        warn!("failed to show cursor: {e}");
    }

    if let Err(e) = execute!(stdout_handle, DisableMouseCapture, DisableFocusChange) {
        warn!("failed to disable mouse capture: {e}");
    }

    if alternate_screen {
        if let Err(e) = execute!(stdout_handle, LeaveAlternateScreen) {
            warn!("failed to leave alternate screen: {e}");
        }
    }

    if raw_mode {
        if let Err(e) = disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }

    let _ = execute!(stdout_handle, cursor::MoveToNextLine(1));
    let _ = stdout_handle.flush();

    debug!("terminal restored");
}
