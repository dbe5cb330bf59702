mod config;
mod db;
mod models;
mod run;
mod ui;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::load()?;
    let db = db::Database::open(&config.db_path)
        .with_context(|| format!("Failed to open database: {}", config.db_path.display()))?;

    match args.len() {
        1 => run::as_tui(&db, &config),
        2.. => run::as_cli(&args, &db, &config),
        _ => {
            eprintln!("Usage: foliotui [command]");
            Ok(())
        }
    }
}
