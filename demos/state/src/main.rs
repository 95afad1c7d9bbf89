//! Example driver for the dblite state store.
//!
//! Walks the full surface once: save a timestamp, bulk-save two records,
//! read everything back, delete one record and confirm it is gone. The
//! database file is owned by this program, not by the store.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use dblite::{State, StateStore};

fn main() -> Result<()> {
    init_logging();

    let path = PathBuf::from("example.db");
    let _ = fs::remove_file(&path);

    let store = StateStore::open(&path)?;

    store.save(&State::new("last_run", Utc::now().to_rfc3339()))?;
    let last_run = store.get("last_run")?;
    println!("last_run: {}", last_run.map(|s| s.value).unwrap_or_default());

    store.save_bulk(&[
        State::new("last_open", Utc::now().to_rfc3339()),
        State::new("count", "420"),
    ])?;

    let last_open = store.get("last_open")?;
    println!(
        "last_open: {}",
        last_open.map(|s| s.value).unwrap_or_default()
    );

    let count = store.get("count")?;
    println!("count: {}", count.map(|s| s.value).unwrap_or_default());

    store.delete("count")?;
    let after_delete = store.get("count")?;
    println!("count after delete is absent: {}", after_delete.is_none());

    let _ = fs::remove_file(&path);
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
