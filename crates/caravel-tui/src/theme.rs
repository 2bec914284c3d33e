use ratatui::style::Color;

/// UI colors, gruvbox-material flavored.
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    pub fg0: Color,
    pub fg1: Color,
    pub grey: Color,

    /// Highlight for the active slide and enabled controls
    pub accent: Color,
    /// Dimmed elements: disabled controls, inactive pager dots
    pub disabled: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey: Color::Rgb(0x92, 0x83, 0x74),
            accent: Color::Rgb(0xd8, 0xa6, 0x57),
            disabled: Color::Rgb(0x7c, 0x6f, 0x64),
            error: Color::Rgb(0xea, 0x69, 0x62),
        }
    }
}
