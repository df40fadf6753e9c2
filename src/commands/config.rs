use anyhow::Result;
use owo_colors::OwoColorize;
use turfbook_core::config::TurfbookConfig;

pub fn run() -> Result<()> {
    let config_path = TurfbookConfig::config_path()?;
    let config = TurfbookConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!(
        "  Ledger:  {} ({})",
        config.display_path().display(),
        config.data_path().display()
    );

    Ok(())
}
