use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use caravel_core::{config::Breakpoint, AppConfig, Deck};

pub fn run(dir: Option<PathBuf>) -> Result<()> {
    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)?;

    let deck_path = dir.join("deck.toml");
    if deck_path.exists() {
        bail!("{} already exists, not overwriting", deck_path.display());
    }
    fs::write(&deck_path, Deck::sample().to_toml()?)?;
    println!("Wrote sample deck to {}", deck_path.display());

    let config_path = AppConfig::config_path();
    if config_path.exists() {
        println!("Keeping existing config at {}", config_path.display());
        return Ok(());
    }

    // Sample config with breakpoints sized for common terminal widths.
    let mut config = AppConfig::default();
    config.carousel.breakpoints = vec![
        Breakpoint {
            width: 100,
            slides_to_show: Some(2),
            step: None,
        },
        Breakpoint {
            width: 160,
            slides_to_show: Some(3),
            step: None,
        },
    ];
    config.save()?;
    println!("Wrote default config to {}", config_path.display());

    Ok(())
}
