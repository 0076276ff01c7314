// quill entry point.
// Sets up the terminal, loads the repository config, and runs the app loop.

mod app;
mod cache;
mod config;
mod error;
mod github;
mod state;
mod token;
mod ui;

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::config::GitHubConfig;

#[tokio::main]
async fn main() -> io::Result<()> {
    let config = match GitHubConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("quill: could not read config ({}); using defaults", e);
            GitHubConfig::default()
        }
    };

    // First run: materialize the config file so there is something to edit.
    if let Some(path) = config::config_path() {
        if !path.exists() {
            if let Err(e) = config.save() {
                eprintln!("quill: could not write default config: {}", e);
            }
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(config);
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
