use heatmap::tooltip::TooltipContent;
use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// Box sized for `content` with its top-left at `(left, top)`, shifted to
/// stay inside `bounds`. When the requested top is above the bounds the
/// box drops below the pointer row instead.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tooltip_rect(
    content: &TooltipContent,
    left: f64,
    top: f64,
    pointer_row: u16,
    bounds: Rect,
) -> Rect {
    let text_width = content
        .heading()
        .chars()
        .count()
        .max(content.detail().chars().count());
    let width = u16::try_from(text_width + 2)
        .unwrap_or(u16::MAX)
        .min(bounds.width);
    let height = 4_u16.min(bounds.height);

    let x = (left.max(0.0) as u16)
        .min(bounds.right().saturating_sub(width))
        .max(bounds.x);

    let y = if top >= f64::from(bounds.y) {
        top as u16
    } else {
        pointer_row.saturating_add(1)
    };
    let y = y.min(bounds.bottom().saturating_sub(height)).max(bounds.y);

    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Floating tooltip for the hovered cell.
pub struct TooltipPopup<'a> {
    pub content: &'a TooltipContent,
}

impl Widget for TooltipPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            TextLine::from(Span::styled(
                self.content.heading(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            TextLine::from(self.content.detail()),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .style(Style::default().fg(Color::White).bg(Color::Black))
            .render(area, buf);
    }
}

/// Shown instead of the chart when the terminal is too small for the grid.
pub struct TooSmallNotice;

impl Widget for TooSmallNotice {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = centered_rect(80, 50, area);
        Paragraph::new("Terminal too small for the heat map. Enlarge the window.")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .render(rect, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> TooltipContent {
        TooltipContent {
            month: "January",
            year: 1753,
            temp: 6.16,
            variance: -2.5,
        }
    }

    #[test]
    fn tooltip_sits_above_pointer() {
        let bounds = Rect::new(0, 0, 100, 40);
        let rect = tooltip_rect(&content(), 20.0, 10.0, 15, bounds);
        assert_eq!(rect.x, 20);
        assert_eq!(rect.y, 10);
        assert_eq!(rect.height, 4);
        assert_eq!(usize::from(rect.width), "Temp: 6.16°C / var = -2.50°C".chars().count() + 2);
    }

    #[test]
    fn tooltip_drops_below_pointer_near_top() {
        let bounds = Rect::new(0, 0, 100, 40);
        let rect = tooltip_rect(&content(), 20.0, -3.0, 2, bounds);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn tooltip_is_kept_inside_bounds() {
        let bounds = Rect::new(0, 0, 40, 20);
        let rect = tooltip_rect(&content(), 39.0, 30.0, 19, bounds);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.bottom(), 20);
    }

    #[test]
    fn popup_renders_both_lines() {
        let area = Rect::new(0, 0, 32, 4);
        let mut buf = Buffer::empty(area);
        TooltipPopup { content: &content() }.render(area, &mut buf);

        let row: String = (1..15).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "January, 1753:");
    }
}
