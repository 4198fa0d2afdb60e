use std::io;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use bmi_form::cli::Cli;
use bmi_form::config::{default_config_path, load_config};
use bmi_form::error::Result;
use bmi_form::logging;
use bmi_form::ui::{self, App, render};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 配置文件 (~/.config/bmi-form/config.toml)
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let mut config = load_config(&config_path)?;
    cli.apply(&mut config);

    let log_path = logging::init(&config.log)?;
    info!(config = %config_path.display(), log = ?log_path, policy = ?config.calculation.policy, "starting");

    // 创建应用状态
    let mut app = App::new(&config.form, config.calculation.policy);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && ui::handle_key_event(app, key) {
                break;
            }
        }
    }
    Ok(())
}
