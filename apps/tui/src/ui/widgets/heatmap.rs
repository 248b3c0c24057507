use heatmap::chart::month::month_name;
use heatmap::chart::ChartModel;
use heatmap::Dataset;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

use crate::ui::layout::{GridLayout, MONTH_AXIS_WIDTH};

pub fn cell_color(record: &heatmap::Record) -> Color {
    let (r, g, b) = record.color.to_rgb();
    Color::Rgb(r, g, b)
}

/// The year × month grid with its month and decade axes. Each record fills
/// its cell's background with the record's color.
pub struct HeatmapGrid<'a> {
    pub dataset: &'a Dataset,
    pub model: &'a ChartModel,
    pub layout: GridLayout,
    /// `(year index, month)` of the hovered cell.
    pub highlight: Option<(usize, u8)>,
}

impl Widget for HeatmapGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let axis_style = Style::default().fg(Color::Gray);
        let axis_x = self.layout.grid.x.saturating_sub(MONTH_AXIS_WIDTH);

        for month in 0..12_u8 {
            let row = self.layout.month_row(month) + self.layout.row_height / 2;
            if row < area.bottom() {
                buf.set_stringn(
                    axis_x,
                    row,
                    month_name(i32::from(month)),
                    usize::from(MONTH_AXIS_WIDTH - 1),
                    axis_style,
                );
            }
        }

        let years = self.model.years.domain();
        for offset in 0..self.layout.visible_years {
            let year_index = self.layout.first_year + offset;
            let Some(&year) = years.get(year_index) else {
                continue;
            };

            for month in 0..12_u8 {
                let Some(record) = self
                    .model
                    .record_index(year, month)
                    .and_then(|index| self.dataset.records.get(index))
                else {
                    continue;
                };
                let Some(rect) = self.layout.cell_rect(year_index, month) else {
                    continue;
                };
                let color = cell_color(record);
                let highlighted = self.highlight == Some((year_index, month));

                for y in rect.top()..rect.bottom().min(area.bottom()) {
                    if let Some(cell) = buf.cell_mut((rect.x, y)) {
                        cell.set_bg(color);
                        if highlighted {
                            cell.set_symbol("◆").set_fg(Color::Black);
                        } else {
                            cell.set_symbol(" ");
                        }
                    }
                }
            }
        }

        self.render_year_axis(area, buf, years);
    }
}

impl HeatmapGrid<'_> {
    fn render_year_axis(&self, area: Rect, buf: &mut Buffer, years: &[i32]) {
        let row = self.layout.axis_row();
        if row >= area.bottom() {
            return;
        }

        let tick_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let right = self.layout.grid.right().min(area.right());
        let mut next_free = self.layout.grid.x;

        for &tick in &self.model.year_ticks {
            let Some(year_index) = years.iter().position(|y| *y == tick) else {
                continue;
            };
            let Some(rect) = self.layout.cell_rect(year_index, 0) else {
                continue;
            };
            let label = tick.to_string();
            let Ok(label_width) = u16::try_from(label.len()) else {
                continue;
            };
            if rect.x < next_free || rect.x + label_width > right {
                continue;
            }
            buf.set_string(rect.x, row, &label, tick_style);
            next_free = rect.x + label_width + 1;
        }
    }
}
