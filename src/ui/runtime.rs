use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

use crate::config::Config;
use crate::portal::{Language, PortalController};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the portal until the user quits or a shutdown signal arrives.
///
/// Must be called inside a tokio runtime context: the banner timer spawns
/// onto it.
pub fn run(config: &Config, language: Language, shutdown: ShutdownHandle) -> io::Result<()> {
    let tick_rate = config.defaults.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let mut portal = PortalController::new(language, config.defaults.banner_timeout());
    let banner_tx = events.sender();
    portal.set_banner_notifier(Arc::new(move |generation| {
        let _ = banner_tx.send(AppEvent::BannerExpired { generation });
    }));
    let mut app = App::new(portal);

    let (mut terminal, guard) = setup_terminal()?;
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);
    tracing::info!(%language, "portal started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::BannerExpired { generation }) => app.on_banner_expired(generation),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("portal stopped");
    Ok(())
}
