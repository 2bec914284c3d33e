use std::path::PathBuf;

use anyhow::Result;

use caravel_core::{AppConfig, Deck};

pub fn run(config: &AppConfig, deck_path: Option<PathBuf>) -> Result<()> {
    config.carousel.validate()?;

    let (deck, source) = match &deck_path {
        Some(path) => (Deck::load(path)?, path.display().to_string()),
        None => (Deck::sample(), "built-in demo deck".to_string()),
    };

    println!("Deck: {}", source);
    if let Some(title) = &deck.title {
        println!("  title:  {title}");
    }
    println!("  slides: {}", deck.len());
    if deck.is_empty() {
        println!("  note:   empty deck, navigation will be a no-op");
    }

    println!("Carousel:");
    println!("  slides_to_show: {}", config.carousel.slides_to_show);
    println!("  step:           {}", config.carousel.base_step());
    println!("  loop:           {}", config.carousel.wrap);

    if config.carousel.breakpoints.is_empty() {
        println!("  breakpoints:    none");
    } else {
        let mut breakpoints = config.carousel.breakpoints.clone();
        breakpoints.sort_by_key(|bp| bp.width);
        println!("  breakpoints (ascending, largest matching width wins):");
        for bp in &breakpoints {
            let slides = bp
                .slides_to_show
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            let step = bp
                .step
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "    >= {:>4} cols: slides_to_show={slides} step={step}",
                bp.width
            );
        }
    }

    println!("OK");
    Ok(())
}
