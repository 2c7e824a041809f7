use crate::api::ApiClient;
use crate::config::UiConfig;
use crate::effects::Effects;
use crate::navigation::{spawn_navigator, Route, Router};
use crate::store::Store;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// Run the terminal UI until the user quits.
///
/// Effects and the navigator run on `runtime`; drawing and input stay on
/// the calling thread.
pub fn run(runtime: &Runtime, client: ApiClient, ui: &UiConfig, initial: Route) -> io::Result<()> {
    let store = Store::default();
    let router = Router::new(initial);
    let (effects, navigator) = {
        let _enter = runtime.enter();
        (
            Effects::from_client(client).spawn(store.clone()),
            spawn_navigator(&store, router.clone()),
        )
    };

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(store, router, ui);
    tracing::info!(route = %initial, "UI started");

    let mut dirty = true;
    loop {
        dirty |= app.sync();
        if dirty {
            terminal.draw(|frame| draw(frame, &app))?;
            dirty = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                dirty = true;
            }
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(_, _)) => dirty = true,
            Err(RecvTimeoutError::Timeout) => app.on_tick(Instant::now()),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    effects.abort();
    navigator.abort();
    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}
