use heatmap::chart::scale::format_tick;
use heatmap::chart::{ChartModel, HueScale};
use heatmap::ChartConfig;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Gradient palette across the legend width with the temperature axis
/// beneath it. The gradient only depends on the hue range.
pub struct Legend<'a> {
    pub model: &'a ChartModel,
    pub config: &'a ChartConfig,
}

impl Widget for Legend<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.config.legend_label.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height < 2 {
            return;
        }

        let last_column = f64::from(inner.width - 1);
        let hues = HueScale::new([0.0, last_column], self.config.hue_range);
        let swatch_rows = inner.height - 1;

        for column in 0..inner.width {
            let (r, g, b) = hues.color(f64::from(column)).to_rgb();
            for row in 0..swatch_rows {
                if let Some(cell) = buf.cell_mut((inner.x + column, inner.y + row)) {
                    cell.set_symbol(" ").set_bg(Color::Rgb(r, g, b));
                }
            }
        }

        let [d0, d1] = self.model.temperature.domain;
        let step = self.model.temperature_tick_step();
        let axis_row = inner.y + swatch_rows;
        let mut next_free = inner.x;

        for tick in self.model.temperature_ticks() {
            let label = format_tick(tick, step);
            let Some(column) = tick_column(tick, [d0, d1], inner.width) else {
                continue;
            };
            let Ok(width) = u16::try_from(label.len()) else {
                continue;
            };
            let x = (inner.x + column).saturating_sub(width / 2).max(inner.x);
            if x < next_free || x + width > inner.right() {
                continue;
            }
            buf.set_string(x, axis_row, &label, Style::default().fg(Color::Gray));
            next_free = x + width + 1;
        }
    }
}

/// Column offset of `value` along a legend `width` columns wide.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn tick_column(value: f64, domain: [f64; 2], width: u16) -> Option<u16> {
    let [d0, d1] = domain;
    let fraction = (value - d0) / (d1 - d0);
    if !(0.0..=1.0).contains(&fraction) {
        return None;
    }
    Some((fraction * f64::from(width.saturating_sub(1))).round() as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap::data::parse_dataset;

    fn model(config: &ChartConfig) -> ChartModel {
        let json = r#"{"baseTemperature": 8.66, "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -6.976},
            {"year": 1753, "month": 2, "variance": 5.228}
        ]}"#;
        let dataset = parse_dataset(json, config.hue_range).unwrap();
        ChartModel::new(&dataset, config)
    }

    #[test]
    fn gradient_runs_cold_to_hot() {
        let config = ChartConfig::default();
        let model = model(&config);
        let area = Rect::new(0, 0, 42, 5);
        let mut buf = Buffer::empty(area);

        Legend {
            model: &model,
            config: &config,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(1, 1)].bg, Color::Rgb(0, 0, 255));
        assert_eq!(buf[(40, 1)].bg, Color::Rgb(255, 0, 0));
    }

    #[test]
    fn axis_starts_at_domain_floor() {
        let config = ChartConfig::default();
        let model = model(&config);
        let area = Rect::new(0, 0, 42, 5);
        let mut buf = Buffer::empty(area);

        Legend {
            model: &model,
            config: &config,
        }
        .render(area, &mut buf);

        assert_eq!(buf[(1, 3)].symbol(), "1");
    }

    #[test]
    fn tick_columns_span_the_width() {
        assert_eq!(tick_column(1.0, [1.0, 14.0], 40), Some(0));
        assert_eq!(tick_column(14.0, [1.0, 14.0], 40), Some(39));
        assert_eq!(tick_column(20.0, [1.0, 14.0], 40), None);
    }
}
