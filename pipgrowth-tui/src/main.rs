//! PipGrowth TUI: summary header, balance chart, and ledger for one run.
//!
//! Usage: `pipgrowth-tui [CONFIG_PATH | PRESET]`

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use pipgrowth_core::{GrowthConfig, Preset};
use pipgrowth_runner::run_growth;
use pipgrowth_tui::{handle_key_event, ui, App};

#[derive(Parser)]
#[command(
    name = "pipgrowth-tui",
    about = "Interactive view of a compounding-growth run"
)]
struct Args {
    /// TOML config path or preset name. Defaults to the 20 pip challenge.
    source: Option<String>,
}

fn load_config(source: Option<&str>) -> Result<GrowthConfig> {
    let config = match source {
        None => GrowthConfig::default(),
        Some(name) if Preset::from_name(name).is_ok() => {
            GrowthConfig::resolve(None, Some(name))?
        }
        Some(path) => {
            let path = PathBuf::from(path);
            GrowthConfig::resolve(Some(&path), None)
                .with_context(|| format!("'{}' is neither a preset nor a readable config", path.display()))?
        }
    };
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Fail before touching the terminal so errors print normally.
    let config = load_config(args.source.as_deref())?;
    let run = run_growth(&config)?;
    let mut app = App::new(run);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps resize redraws responsive
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(app, key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
