use std::path::Path;

use serde::{Deserialize, Serialize};

/// One content unit in the fixed ordered sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// An ordered set of slides loaded from a TOML file.
///
/// The deck is fixed for the lifetime of a carousel; a deck with zero
/// slides is accepted and degrades to a static single-page view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, rename = "slide")]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Load a deck from a TOML file. A missing or unparsable file fails
    /// construction immediately.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| crate::Error::Deck(format!("{}: {}", path.display(), e)))
    }

    /// Serialize the deck back to TOML (used by `caravel init`).
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Deck(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Built-in demo deck, used by `caravel init` and by `caravel run`
    /// without a deck argument.
    pub fn sample() -> Self {
        let slides = [
            (
                "Welcome to caravel",
                "A breakpoint-aware slide carousel for the terminal.\n\n\
                 Use the arrow keys, h/l, the \u{2039} \u{203a} controls, or \
                 drag with the mouse to move between slides.",
            ),
            (
                "Responsive layout",
                "The number of visible slides and the advance step follow\n\
                 the terminal width. Resize the window and watch the deck\n\
                 reflow without a transition sweep.",
            ),
            (
                "Drag to navigate",
                "Press and hold the left mouse button on the deck, then\n\
                 drag sideways. A clear pull commits a full step; a small\n\
                 jitter snaps back to where you were.",
            ),
            (
                "Looping",
                "Set `loop = true` under [carousel] in the config to wrap\n\
                 navigation past either end of the deck.",
            ),
            (
                "Make it yours",
                "Run `caravel init` to write a sample deck and config,\n\
                 then edit deck.toml to tell your own story.",
            ),
        ];

        Self {
            title: Some("caravel demo".to_string()),
            slides: slides
                .into_iter()
                .map(|(title, body)| Slide {
                    title: title.to_string(),
                    body: body.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deck() {
        let deck: Deck = toml::from_str(
            r#"
            title = "demo"

            [[slide]]
            title = "one"
            body = "first"

            [[slide]]
            title = "two"
            "#,
        )
        .unwrap();
        assert_eq!(deck.title.as_deref(), Some("demo"));
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.slides[1].body, "");
    }

    #[test]
    fn test_empty_deck_accepted() {
        let deck: Deck = toml::from_str("").unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_sample_round_trip() {
        let deck = Deck::sample();
        let toml = deck.to_toml().unwrap();
        let parsed: Deck = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.len(), deck.len());
        assert_eq!(parsed.slides[0].title, deck.slides[0].title);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = Deck::load(Path::new("/nonexistent/deck.toml")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
