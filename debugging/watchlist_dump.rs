//! Print the persisted watchlist the way the store would hydrate it.
//! Usage:
//!   cargo run --bin watchlist_dump
//!   cargo run --bin watchlist_dump -- --raw
//! Reads REELMARK_DATA_DIR for the data directory (.env supported),
//! defaulting to "data".

use anyhow::Result;
use dotenvy::dotenv;
use reelmark::storage::{FileStorage, Storage};
use reelmark::watchlist::{Watchlist, STORAGE_KEY};
use std::env;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let raw_mode = env::args().any(|a| a == "--raw");
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::from_env());

    if raw_mode {
        match storage.get(STORAGE_KEY)? {
            Some(raw) => println!("{raw}"),
            None => println!("(no stored watchlist)"),
        }
        return Ok(());
    }

    let watchlist = Watchlist::load(storage);
    if watchlist.is_empty() {
        println!("Watchlist is empty.");
        return Ok(());
    }
    println!("{}", serde_json::to_string_pretty(watchlist.entries())?);
    Ok(())
}
