use caravel_core::Deck;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Widget, Wrap},
};

use crate::theme::Theme;

/// The viewport onto the slide track.
///
/// The full track is rendered into an off-screen buffer and blitted
/// through the viewport at the current offset, so partially visible slides
/// clip correctly — including at the fractional offsets produced by a live
/// drag or a running transition. Offsets past either end leave blank
/// space, matching the elastic overscroll of a drag beyond the bounds.
pub struct TrackWidget<'a> {
    deck: &'a Deck,
    current_index: usize,
    slides_to_show: u32,
    /// Per-slide width in terminal columns
    slide_width: u16,
    /// Track offset in terminal columns (may be negative during overscroll)
    offset_columns: i32,
    theme: &'a Theme,
}

impl<'a> TrackWidget<'a> {
    pub fn new(
        deck: &'a Deck,
        current_index: usize,
        slides_to_show: u32,
        slide_width: u16,
        offset_columns: i32,
        theme: &'a Theme,
    ) -> Self {
        Self {
            deck,
            current_index,
            slides_to_show,
            slide_width,
            offset_columns,
            theme,
        }
    }

    fn render_slide(&self, index: usize, area: Rect, buf: &mut Buffer) {
        let slide = &self.deck.slides[index];

        // Slides on the current page get the accent border.
        let end = self.current_index + self.slides_to_show as usize;
        let on_page = index >= self.current_index && index < end;
        let border_style = if on_page {
            Style::default().fg(self.theme.accent)
        } else {
            Style::default().fg(self.theme.grey)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Line::from(Span::styled(
                format!(" {} ", slide.title),
                Style::default()
                    .fg(self.theme.fg1)
                    .add_modifier(Modifier::BOLD),
            )))
            .title_bottom(
                Line::from(Span::styled(
                    format!(" {}/{} ", index + 1, self.deck.len()),
                    Style::default().fg(self.theme.grey),
                ))
                .alignment(Alignment::Right),
            )
            .padding(Padding::new(2, 2, 1, 1));

        let body = Paragraph::new(slide.body.as_str())
            .style(Style::default().fg(self.theme.fg0))
            .wrap(Wrap { trim: true })
            .block(block);

        body.render(area, buf);
    }
}

impl Widget for TrackWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.deck.is_empty() {
            let y = area.y + area.height / 2;
            let line_area = Rect::new(area.x, y, area.width, 1);
            Paragraph::new("This deck has no slides")
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.disabled))
                .render(line_area, buf);
            return;
        }

        let slide_width = self.slide_width.max(1);
        let track_width =
            (slide_width as u32 * self.deck.len() as u32).min(u16::MAX as u32) as u16;
        let track_area = Rect::new(0, 0, track_width, area.height);
        let mut track = Buffer::empty(track_area);

        for index in 0..self.deck.len() {
            let x = index as u32 * slide_width as u32;
            if x >= track_width as u32 {
                break;
            }
            let width = slide_width.min(track_width - x as u16);
            let slide_area = Rect::new(x as u16, 0, width, area.height);
            self.render_slide(index, slide_area, &mut track);
        }

        // Blit the visible window of the track into the viewport.
        for y in 0..area.height {
            for x in 0..area.width {
                let src_x = x as i32 + self.offset_columns;
                if src_x < 0 || src_x >= track_width as i32 {
                    continue;
                }
                if let Some(src) = track.cell((src_x as u16, y)) {
                    if let Some(dst) = buf.cell_mut((area.x + x, area.y + y)) {
                        *dst = src.clone();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caravel_core::deck::Slide;

    fn deck(n: usize) -> Deck {
        Deck {
            title: None,
            slides: (0..n)
                .map(|i| Slide {
                    title: format!("slide {i}"),
                    body: format!("body {i}"),
                })
                .collect(),
        }
    }

    fn rendered_text(buf: &Buffer, y: u16) -> String {
        let area = buf.area;
        (0..area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_first_slide_at_zero_offset() {
        let deck = deck(3);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        TrackWidget::new(&deck, 0, 1, 40, 0, &theme).render(area, &mut buf);

        let top = rendered_text(&buf, 0);
        assert!(top.contains("slide 0"), "top row: {top:?}");
        assert!(!top.contains("slide 1"));
    }

    #[test]
    fn test_offset_reveals_next_slide() {
        let deck = deck(3);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        // One full slide width to the right.
        TrackWidget::new(&deck, 1, 1, 40, 40, &theme).render(area, &mut buf);

        let top = rendered_text(&buf, 0);
        assert!(top.contains("slide 1"), "top row: {top:?}");
    }

    #[test]
    fn test_fractional_offset_shows_both_slides() {
        let deck = deck(3);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        // Mid-drag: half a slide in. Slide 0's title is scrolled out of
        // view, but its right border stays on screen next to slide 1.
        TrackWidget::new(&deck, 0, 1, 40, 20, &theme).render(area, &mut buf);

        let top = rendered_text(&buf, 0);
        assert!(top.contains("slide 1"), "top row: {top:?}");
        assert!(!top.contains("slide 0"));
        // Slide 0's top-right corner lands at viewport column 19.
        assert_eq!(buf.cell((19, 0)).unwrap().symbol(), "\u{2510}");
    }

    #[test]
    fn test_empty_deck_placeholder() {
        let deck = deck(0);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        TrackWidget::new(&deck, 0, 1, 40, 0, &theme).render(area, &mut buf);

        let middle = rendered_text(&buf, 4);
        assert!(middle.contains("no slides"));
    }

    #[test]
    fn test_negative_overscroll_leaves_blank_left_edge() {
        let deck = deck(2);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 8);
        let mut buf = Buffer::empty(area);
        TrackWidget::new(&deck, 0, 1, 40, -10, &theme).render(area, &mut buf);

        let top = rendered_text(&buf, 0);
        assert!(top.starts_with("          "), "top row: {top:?}");
    }
}
