use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type PortalTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way the shell left it, on drop or on panic,
/// whichever comes first.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn install(keyboard_enhanced: bool) -> Self {
        let restored = Arc::new(AtomicBool::new(false));
        let hook_flag = Arc::clone(&restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&hook_flag, keyboard_enhanced);
            default_hook(info);
        }));
        Self {
            restored,
            keyboard_enhanced,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored, self.keyboard_enhanced);
    }
}

fn restore_once(restored: &AtomicBool, keyboard_enhanced: bool) {
    if restored.swap(true, Ordering::SeqCst) {
        return;
    }
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    // Kitty keeps a flag stack per screen, so pop before leaving the
    // alternate one.
    if keyboard_enhanced {
        let _ = stdout.execute(PopKeyboardEnhancementFlags);
    }
    let _ = stdout.execute(DisableBracketedPaste);
    let _ = stdout.execute(LeaveAlternateScreen);
}

pub fn setup_terminal() -> io::Result<(PortalTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    // Without the kitty protocol Shift+Enter arrives as a bare Enter.
    let keyboard_enhanced = matches!(supports_keyboard_enhancement(), Ok(true));
    let guard = TerminalGuard::install(keyboard_enhanced);
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableBracketedPaste)?;
    if keyboard_enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
        ))?;
    }
    tracing::debug!(keyboard_enhanced, "terminal ready");

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok((terminal, guard))
}
