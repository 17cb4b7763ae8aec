use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use swatchbook::app::{r#loop::run_loop, state::AppState};
use swatchbook::domain::clipboard::ClipboardWriter;
use swatchbook::domain::source::PaletteSource;
use swatchbook::infrastructure;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Wire up collaborators before touching the terminal so a failure
    // here can't leave it in raw mode.
    let source: Arc<dyn PaletteSource> = Arc::new(infrastructure::builtin::BuiltinSource::new());
    let clipboard: Arc<dyn ClipboardWriter> = Arc::new(infrastructure::clipboard::SystemClipboard);
    let key_config = swatchbook::app::keymap::KeyConfig::load();
    let app_state = AppState::new(key_config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, source, clipboard).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}
