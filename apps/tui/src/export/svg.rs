//! SVG markup for the chart canvas and the legend palette.

use crate::chart::model::{palette, ChartModel};
use crate::chart::scale::format_tick;
use crate::config::ChartConfig;
use crate::domain::Dataset;
use crate::tooltip::TooltipContent;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// A rendered axis: a domain line across `range` plus labelled ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: Orientation,
    pub range: [f64; 2],
    /// `(offset along the axis, label)` pairs.
    pub ticks: Vec<(f64, String)>,
    /// `translate(x, y)` applied to the whole group.
    pub translate: (f64, f64),
}

impl Axis {
    pub fn to_svg(&self) -> String {
        let [r0, r1] = self.range;
        let (tx, ty) = self.translate;
        let mut out = format!(
            r#"<g id="{}" transform="translate({tx},{ty})" fill="none" font-size="10" font-family="sans-serif" text-anchor="{}">"#,
            self.id,
            match self.orientation {
                Orientation::Bottom => "middle",
                Orientation::Left => "end",
            }
        );

        let domain = match self.orientation {
            Orientation::Bottom => format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
            Orientation::Left => format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}"),
        };
        out.push_str(&format!(
            r#"<path class="domain" stroke="currentColor" d="{domain}"/>"#
        ));

        let label_offset = TICK_SIZE + TICK_PADDING;
        for (offset, label) in &self.ticks {
            let label = escape(label);
            let tick = match self.orientation {
                Orientation::Bottom => format!(
                    r#"<g class="tick" transform="translate({offset},0)"><line stroke="currentColor" y2="{TICK_SIZE}"/><text fill="currentColor" y="{label_offset}" dy="0.71em">{label}</text></g>"#
                ),
                Orientation::Left => format!(
                    r#"<g class="tick" transform="translate(0,{offset})"><line stroke="currentColor" x2="-{TICK_SIZE}"/><text fill="currentColor" x="-{label_offset}" dy="0.32em">{label}</text></g>"#
                ),
            };
            out.push_str(&tick);
        }

        out.push_str("</g>");
        out
    }
}

/// Year axis under the grid, labelled every decade.
pub fn year_axis(model: &ChartModel, config: &ChartConfig) -> Axis {
    let ticks = model
        .year_ticks
        .iter()
        .filter_map(|year| model.years.center(year).map(|x| (x, year.to_string())))
        .collect();
    Axis {
        id: "x-axis",
        orientation: Orientation::Bottom,
        range: model.years.range(),
        ticks,
        translate: (config.h_margin, model.size.height - config.v_margin),
    }
}

/// Month axis to the left of the grid.
pub fn month_axis(model: &ChartModel, config: &ChartConfig) -> Axis {
    let ticks = model
        .months
        .domain()
        .iter()
        .filter_map(|name| model.months.center(name).map(|y| (y, (*name).to_string())))
        .collect();
    Axis {
        id: "y-axis",
        orientation: Orientation::Left,
        range: model.months.range(),
        ticks,
        translate: (config.h_margin, 0.0),
    }
}

/// Temperature axis under the palette.
pub fn temperature_axis(model: &ChartModel, config: &ChartConfig) -> Axis {
    let step = model.temperature_tick_step();
    let ticks = model
        .temperature_ticks()
        .into_iter()
        .map(|t| (model.temperature.scale(t), format_tick(t, step)))
        .collect();
    Axis {
        id: "z-axis",
        orientation: Orientation::Bottom,
        range: model.temperature.range,
        ticks,
        translate: (config.palette_margin, config.palette_height),
    }
}

/// Chart canvas: axis labels, axes and one rectangle per record.
pub fn chart_svg(dataset: &Dataset, model: &ChartModel, config: &ChartConfig) -> String {
    let width = model.size.width;
    let height = model.size.height;

    let mut out = format!(
        r#"<svg id="chart" xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    );

    out.push_str(&format!(
        r#"<text class="Label" id="x-Label" x="{}" y="{height}">{}</text>"#,
        width / 2.0,
        escape(&config.x_label)
    ));
    out.push_str(&format!(
        r#"<text class="Label" id="y-Label" transform="rotate(-90)" x="{}" y="{}">{}</text>"#,
        -height / 2.0,
        config.h_margin / 3.0,
        escape(&config.y_label)
    ));

    out.push_str(&year_axis(model, config).to_svg());
    out.push_str(&month_axis(model, config).to_svg());

    for cell in model.cells(dataset, config) {
        let record = &dataset.records[cell.record];
        let tooltip = TooltipContent::from_record(record).to_html();
        out.push_str(&format!(
            r#"<rect class="cell" x="{}" y="{}" width="{}" height="{}" data-month="{}" data-year="{}" data-temp="{}" data-tooltip="{}" style="fill: {}"/>"#,
            cell.x,
            cell.y,
            cell.width,
            cell.height,
            record.month,
            record.year,
            record.temp,
            escape(&tooltip),
            record.color
        ));
    }

    out.push_str("</svg>");
    out
}

/// Legend palette: a 1-unit swatch per pixel followed by the temperature axis.
pub fn palette_svg(model: &ChartModel, config: &ChartConfig) -> String {
    let mut out = format!(
        r#"<svg id="palette" xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        config.palette_svg_width(),
        config.legend_height()
    );

    for (i, color) in palette(config).iter().enumerate() {
        out.push_str(&format!(
            r#"<rect x="{}" width="1" height="{}" style="fill: {color}"/>"#,
            config.palette_margin + i as f64,
            config.palette_height
        ));
    }

    out.push_str(&temperature_axis(model, config).to_svg());
    out.push_str("</svg>");
    out
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::two_year_dataset;
    use crate::domain::{RawDataset, RawRecord};

    #[test]
    fn chart_has_one_rect_per_record() {
        let config = ChartConfig::default();
        let dataset = two_year_dataset();
        let model = ChartModel::new(&dataset, &config);
        let svg = chart_svg(&dataset, &model, &config);

        assert_eq!(svg.matches(r#"class="cell""#).count(), 24);
        assert!(svg.starts_with(r#"<svg id="chart" xmlns="http://www.w3.org/2000/svg" width="78" height="520">"#));
        assert!(svg.contains(r#"data-month="0" data-year="1753""#));
        assert!(svg.contains(
            r#"data-tooltip="January, 1753:&lt;br /&gt;Temp: 6.16°C / var = -2.50°C""#
        ));
        assert!(svg.contains(&format!(r#"style="fill: {}""#, dataset.records[0].color)));
    }

    #[test]
    fn chart_carries_axis_labels() {
        let config = ChartConfig::default();
        let dataset = two_year_dataset();
        let model = ChartModel::new(&dataset, &config);
        let svg = chart_svg(&dataset, &model, &config);

        assert!(svg.contains(r#"<text class="Label" id="x-Label" x="39" y="520">Year</text>"#));
        assert!(svg.contains(r#"id="y-Label" transform="rotate(-90)" x="-260""#));
        assert!(svg.contains(r#"<g id="x-axis" transform="translate(70,480)""#));
        assert!(svg.contains(r#"<g id="y-axis" transform="translate(70,0)""#));
        assert!(svg.contains(">January</text>"));
        assert!(svg.contains(">December</text>"));
    }

    #[test]
    fn palette_has_a_swatch_per_pixel() {
        let config = ChartConfig::default();
        let dataset = two_year_dataset();
        let model = ChartModel::new(&dataset, &config);
        let svg = palette_svg(&model, &config);

        assert_eq!(svg.matches(r#"width="1""#).count(), 251);
        assert!(svg.contains(r#"<rect x="25" width="1" height="20" style="fill: hsl(240, 100%, 50%)"/>"#));
        assert!(svg.contains(r#"<rect x="275" width="1" height="20" style="fill: hsl(0, 100%, 50%)"/>"#));
        assert!(svg.contains(r#"<g id="z-axis" transform="translate(25,20)""#));
    }

    #[test]
    fn bottom_axis_places_ticks_at_band_centers() {
        let axis = Axis {
            id: "x-axis",
            orientation: Orientation::Bottom,
            range: [0.0, 40.0],
            ticks: vec![(2.0, "1760".to_string())],
            translate: (70.0, 480.0),
        };
        let svg = axis.to_svg();
        assert!(svg.contains(r#"d="M0,6V0H40V6""#));
        assert!(svg.contains(r#"<g class="tick" transform="translate(2,0)">"#));
        assert!(svg.contains(">1760</text>"));
    }

    #[test]
    fn flat_temperatures_render_nan_hues_unchanged() {
        let config = ChartConfig::default();
        let monthly_variance = (1..=12)
            .map(|month| RawRecord {
                year: 1900,
                month,
                variance: 0.0,
            })
            .collect();
        let dataset = Dataset::normalize(
            RawDataset {
                base_temperature: 8.0,
                monthly_variance,
            },
            config.hue_range,
        )
        .unwrap();
        assert_eq!(dataset.temp_domain, [8.0, 8.0]);

        let model = ChartModel::new(&dataset, &config);
        let chart = chart_svg(&dataset, &model, &config);
        assert_eq!(chart.matches(r#"style="fill: hsl(NaN, 100%, 50%)""#).count(), 12);

        // The gradient only depends on the hue range.
        let legend = palette_svg(&model, &config);
        assert!(legend.contains("hsl(240, 100%, 50%)"));
        assert!(legend.contains(">8</text>"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
