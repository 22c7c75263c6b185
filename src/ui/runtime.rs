use crate::config::Config;
use crate::generator::CaptionGenerator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Run the interactive composer until the user quits.
pub fn run(config: &Config, generator: Arc<dyn CaptionGenerator>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, generator, runtime.clone(), events.sender());

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let signal_tx = events.sender();
    runtime.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = signal_tx.send(AppEvent::Shutdown);
        }
    });

    tracing::info!(
        tick_rate_ms = tick_rate.as_millis() as u64,
        content_type = %app.state().content_type,
        "Composer started"
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::GenerationFinished { request_id, result }) => {
                app.on_generation_finished(request_id, result)
            }
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    tracing::info!("Composer closed");
    Ok(())
}
