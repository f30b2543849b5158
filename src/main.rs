mod logging;
mod models;
mod run;
mod storage;
mod store;
mod ui;

use anyhow::{Context, Result};

use crate::store::ExpenseStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let data_dir = get_data_dir()?;
    let _logger = logging::init(&data_dir.join("logs"))?;

    let storage = storage::Storage::open(&data_dir.join("trackflow.db"))?;
    let mut store = ExpenseStore::open(storage);

    match args.len() {
        1 => run::as_tui(&mut store),
        2.. => run::as_cli(&args, &mut store),
        _ => {
            eprintln!("Usage: trackflow [command]");
            Ok(())
        }
    }
}

fn get_data_dir() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "trackflow", "TrackFlow")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}
