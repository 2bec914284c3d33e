use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Maximum page count for which the pager dots are drawn.
const MAX_DOTS: usize = 16;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let slide_count = app.deck.len();
        let current = app.carousel.current_index();
        let visible = app.carousel.slides_to_show() as usize;

        let position = if slide_count == 0 {
            "empty deck".to_string()
        } else {
            let first = current + 1;
            let last = (current + visible).min(slide_count);
            if first == last {
                format!("Slide {first} / {slide_count}")
            } else {
                format!("Slides {first}-{last} / {slide_count}")
            }
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {msg}")
        } else {
            match app.deck.title.as_deref() {
                Some(title) => format!(" {title} | {position}"),
                None => format!(" {position}"),
            }
        };

        let dots = if slide_count > 0 && app.carousel.max_index() < MAX_DOTS {
            let mut dots = String::from("  ");
            for i in 0..=app.carousel.max_index() {
                dots.push(if i == current { '\u{25cf}' } else { '\u{25cb}' });
                dots.push(' ');
            }
            dots
        } else {
            String::new()
        };

        let help_hint = " \u{2190}/\u{2192}:move  g/G:ends  ?:help  q:quit ";
        let padding_len = area
            .width
            .saturating_sub((status_text.width() + dots.width() + help_hint.width()) as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(dots, Style::default().fg(theme.accent).bg(theme.bg2)),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
