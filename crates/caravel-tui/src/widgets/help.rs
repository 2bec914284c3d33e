use caravel_core::config::KeymapConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Centered key-binding overlay; any key dismisses it.
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let area = frame.area();

        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = 12u16.min(area.height.saturating_sub(2));
        if popup_width == 0 || popup_height == 0 {
            return;
        }
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows = [
            (format!("{} / \u{2190}", keymap.prev), "previous page"),
            (format!("{} / \u{2192}", keymap.next), "next page"),
            (keymap.first.clone(), "first slide"),
            (keymap.last.clone(), "last page"),
            ("mouse drag".to_string(), "pull the deck sideways"),
            ("\u{2039} \u{203a} click".to_string(), "page controls"),
            (keymap.help.clone(), "toggle this help"),
            (keymap.quit.clone(), "quit"),
        ];

        let lines: Vec<Line> = rows
            .iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {keys:<12}"),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
