use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::theme::Theme;

/// A previous/next control gutter beside the viewport.
///
/// Disabled at the respective bound when navigation does not wrap; the
/// styling mirrors that so a dimmed glyph reads as inert.
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn render(frame: &mut Frame, area: Rect, glyph: &str, enabled: bool, theme: &Theme) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let style = if enabled {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.disabled)
        };

        let y = area.y + area.height / 2;
        let line_area = Rect::new(area.x, y, area.width, 1);
        let paragraph = Paragraph::new(glyph).alignment(Alignment::Center).style(style);
        frame.render_widget(paragraph, line_area);
    }
}
