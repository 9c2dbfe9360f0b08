mod app;
mod carousel;
mod config;
mod content;
mod logging;
mod ui;
mod waitlist;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::carousel::timer::CarouselTimer;
use crate::waitlist::{HttpWaitlistClient, WaitlistManager};
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(log_file = %path.display(), "launchpad starting");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if cfg.ui.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "launchpad exited with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let client = HttpWaitlistClient::new(&cfg.waitlist)?;
    tracing::info!(url = %client.submit_url(), "waitlist endpoint");
    let waitlist = WaitlistManager::new(Arc::new(client), event_tx.clone());
    let mut state = AppState::new(cfg.clone())?;

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::error!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms.max(10));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Aborted when dropped at the end of this function
    let _carousel_timer = if cfg.carousel.autoplay && cfg.carousel.interval_secs > 0 {
        Some(CarouselTimer::start(
            Duration::from_secs(cfg.carousel.interval_secs),
            event_tx.clone(),
        ))
    } else {
        None
    };

    if cfg.waitlist.show_count {
        waitlist.refresh_count();
    }

    // Initial render
    let size = terminal.size()?;
    ui::measure(&mut state, Rect::new(0, 0, size.width, size.height));
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::SubmitWaitlist { form, email } => {
                    waitlist.submit(form, email);
                }
                Action::RefreshCount => {
                    waitlist.refresh_count();
                }
                Action::JumpTo(section) => {
                    let line = ui::page::anchor(&state, section);
                    state.page.scroll_to(line);
                    state.dirty = true;
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            tracing::info!("launchpad shutting down");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            let size = terminal.size()?;
            ui::measure(&mut state, Rect::new(0, 0, size.width, size.height));
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
