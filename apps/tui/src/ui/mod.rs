// UI module for heatmap
// Draws the header, the grid, the legend and the tooltip for one frame

pub mod layout;
pub mod widgets;

use crate::app::App;
use heatmap::export::html::PAGE_TITLE;
use layout::ScreenLayout;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use widgets::heatmap::HeatmapGrid;
use widgets::legend::Legend;
use widgets::popup::{tooltip_rect, TooSmallNotice, TooltipPopup};

pub fn ui(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let screen = ScreenLayout::new(area);

    render_header(app, f, screen.header);
    render_chart(app, f, area, &screen);
    f.render_widget(
        Legend {
            model: &app.model,
            config: &app.config,
        },
        screen.legend,
    );
    render_shortcuts(app, f, screen.footer);
    render_tooltip(app, f, area);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!("== {PAGE_TITLE} =="))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let text = Text::from(vec![
        TextLine::from(Span::styled(
            app.dataset.description(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(Span::styled(
            format!("Source: {}", app.source),
            Style::default().fg(Color::Gray),
        )),
    ]);

    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_chart(app: &App, f: &mut Frame<'_>, area: Rect, screen: &ScreenLayout) {
    let title = app.visible_years(area).map_or_else(
        || format!(" {} / {} ", app.config.y_label, app.config.x_label),
        |(first, last)| {
            format!(
                " {} / {} {first} - {last} ",
                app.config.y_label, app.config.x_label
            )
        },
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    f.render_widget(block, screen.chart);

    let inner = screen.chart_inner();
    match app.grid_layout(area) {
        Some(layout) => f.render_widget(
            HeatmapGrid {
                dataset: &app.dataset,
                model: &app.model,
                layout,
                highlight: app.hovered,
            },
            inner,
        ),
        None => f.render_widget(TooSmallNotice, inner),
    }
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let line = TextLine::from(vec![
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit  "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" scroll  "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
        Span::raw(" decade  "),
        Span::styled("Home/End", Style::default().fg(Color::Yellow)),
        Span::raw(" ends  "),
        Span::styled("mouse", Style::default().fg(Color::Yellow)),
        Span::raw(" details  "),
        Span::styled(app.status_message.as_str(), Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_tooltip(app: &App, f: &mut Frame<'_>, area: Rect) {
    let (Some(content), Some((left, top)), Some((_, pointer_row))) = (
        app.tooltip.content(),
        app.tooltip.position(),
        app.pointer,
    ) else {
        return;
    };

    let rect = tooltip_rect(content, left, top, pointer_row, area);
    f.render_widget(TooltipPopup { content }, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::fixtures::{app, AREA};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &App) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &ratatui::buffer::Buffer, row: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn header_shows_description() {
        let buffer = draw(&app());
        assert!(row_text(&buffer, 0).contains(PAGE_TITLE));
        assert!(row_text(&buffer, 1).contains("1753 - 1852: base temperature 8.66"));
    }

    #[test]
    fn hovered_cell_gets_a_tooltip() {
        let mut app = app();
        app.hover(11, 16, AREA);
        let buffer = draw(&app);

        assert_eq!(buffer[(11, 16)].symbol(), "◆");
        // Top edge is five rows above the pointer.
        let popup: String = (12..26).map(|x| buffer[(x, 12)].symbol().to_string()).collect();
        assert_eq!(popup, "January, 1753:");
    }

    #[test]
    fn narrow_terminal_skips_the_grid() {
        let mut terminal = Terminal::new(TestBackend::new(10, 30)).unwrap();
        terminal.draw(|f| ui(&app(), f)).unwrap();
        let buffer = terminal.backend().buffer();

        let painted = (4..24)
            .flat_map(|row| (0..10).map(move |x| (x, row)))
            .any(|pos| matches!(buffer[pos].bg, Color::Rgb(..)));
        assert!(!painted);
    }
}
