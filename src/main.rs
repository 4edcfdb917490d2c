use unsplash_tui::app::App;
use unsplash_tui::cli::{parse_args, run_cli_command, CliCommand};
use unsplash_tui::startup::{init_logging, AppConfig};
use unsplash_tui::terminal::{setup_panic_hook, TerminalManager};
use unsplash_tui::traits::HttpClient;
use unsplash_tui::ui;
use unsplash_tui::unsplash::UnsplashClient;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;

/// Redraw/animation tick
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let CliCommand::RunTui { query } = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let mut config = AppConfig::from_env().wrap_err("invalid configuration")?;
    if let Some(query) = query {
        config = config.with_initial_query(query);
    }
    let log = init_logging(config.log_dir.as_deref()).wrap_err("could not open log file")?;
    let client = UnsplashClient::from_config(&config.api).wrap_err("could not create API client")?;

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let mut app = App::new(client);
        app.start(config.initial_query.as_deref());

        let mut manager = TerminalManager::new()?;
        let size = manager.size()?;
        app.update_terminal_dimensions(size.width, size.height);

        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;
        result
    });

    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
        if let Some(log) = &log {
            eprintln!("log file: {}", log.path.display());
        }
    }
    tracing::info!("shutting down");
    result
}

async fn run_app<B, C>(terminal: &mut Terminal<B>, app: &mut App<C>) -> Result<()>
where
    B: ratatui::backend::Backend,
    B::Error: Send + Sync + 'static,
    C: HttpClient + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let Some(mut message_rx) = app.message_rx.take() else {
        return Ok(());
    };

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
            app.request_visible_thumbnails();
        }

        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => {
                        app.handle_mouse(mouse);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = message_rx.recv() => {
                app.handle_message(msg);
            }
        }
    }
}
