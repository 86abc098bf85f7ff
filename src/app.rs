use crate::{cli, context, notify, pages::Pages, session};
use anyhow::{Context as AnyhowContext, Result};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;
use std::sync::Arc;

/// The four pages and the settings they were built with.
/// Decoupled from CLI parsing so sessions can be driven from tests.
pub struct App {
    config: context::Context,
    pages: Pages,
}

impl App {
    pub fn from_cli() -> Result<(App, cli::Cli)> {
        let cli = crate::cli::parse();

        crate::tracing::set_log_file(cli.log_file.as_deref().map(Path::new));

        let ctx = context::Context::from_cli(&cli);
        log_startup_info(&ctx);

        let notifier: notify::SharedNotifier = Arc::new(
            notify::Broadcast::new()
                .with(Arc::new(notify::ConsoleNotifier))
                .with(Arc::new(notify::LogNotifier)),
        );
        Ok((App::new(ctx, notifier), cli))
    }

    pub fn new(config: context::Context, notifier: notify::SharedNotifier) -> Self {
        let pages = Pages::new(&config.config, notifier);
        Self { config, pages }
    }

    pub fn pages(&self) -> &Pages {
        &self.pages
    }

    /// Runs one command and prints its output.
    pub fn run_once(&mut self, cmd: &cli::Command) -> Result<()> {
        if let Some(text) = cmd.run(&mut self.pages, self.config.config.format)? {
            println!("{text}");
        }
        Ok(())
    }

    /// Reads commands from the configured script, or stdin.
    pub fn run_session(&mut self) -> Result<session::SessionStats> {
        let format = self.config.config.format;
        let mut out = io::stdout();

        let stats = match self.config.config.script.clone() {
            Some(path) => {
                log::info!("📜 Script: {}", path.display());
                let file = File::open(&path)
                    .with_context(|| format!("opening script {}", path.display()))?;
                session::run(BufReader::new(file), &mut out, &mut self.pages, format, false)?
            }
            None => {
                let stdin = io::stdin();
                let prompt = stdin.is_terminal();
                session::run(stdin.lock(), &mut out, &mut self.pages, format, prompt)?
            }
        };
        log::info!("✅ Session closed");
        Ok(stats)
    }
}

fn log_startup_info(ctx: &context::Context) {
    let config = &ctx.config;
    log::info!("🚀 Starting dormdesk");
    log::info!("🏠 Room capacity: {}", config.room_capacity);
    log::info!(
        "🗂️ Pages: {}",
        if config.seed { "mock data" } else { "empty" }
    );
    if let Some(path) = config.log_file.as_deref() {
        log::info!("📝 Log file: {}", path);
    }
}

pub fn run() -> Result<()> {
    let (mut app, cli) = App::from_cli()?;

    if let Some(cmd) = &cli.cmd {
        // one-shot command mode
        return app.run_once(cmd);
    }

    app.run_session().map(|_| ())
}
