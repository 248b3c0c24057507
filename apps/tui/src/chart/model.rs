use std::collections::HashMap;

use crate::chart::color::{HslColor, HueScale};
use crate::chart::month::month_name;
use crate::chart::scale::{BandScale, LinearScale};
use crate::config::ChartConfig;
use crate::domain::{Dataset, Record};

/// Number of ticks requested from the temperature axis.
pub const TEMP_TICK_COUNT: usize = 10;

/// Pixel size of the chart canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl ChartSize {
    /// Width grows with the number of years of records; height is always
    /// twelve rows.
    pub fn for_records(record_count: usize, config: &ChartConfig) -> Self {
        Self {
            width: config
                .cell_width
                .mul_add(record_count as f64 / 12.0, config.h_margin),
            height: config.cell_height.mul_add(12.0, config.v_margin),
        }
    }
}

/// Placement of one record's rectangle on the chart canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub record: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scales and derived geometry for one dataset. Built once; every renderer
/// reads from it.
#[derive(Debug, Clone)]
pub struct ChartModel {
    pub size: ChartSize,
    /// Every year in the extent, including years with no records.
    pub years: BandScale<i32>,
    pub months: BandScale<&'static str>,
    /// Temperature to legend position.
    pub temperature: LinearScale,
    /// Temperature to hue.
    pub hues: HueScale,
    pub year_ticks: Vec<i32>,
    lookup: HashMap<(i32, u8), usize>,
}

impl ChartModel {
    pub fn new(dataset: &Dataset, config: &ChartConfig) -> Self {
        let size = ChartSize::for_records(dataset.len(), config);

        let year_domain: Vec<i32> = dataset
            .year_extent()
            .map(|[first, last]| (first..=last).collect())
            .unwrap_or_default();
        let year_ticks = year_domain
            .iter()
            .copied()
            .filter(|year| year % 10 == 0)
            .collect();
        let years = BandScale::new(year_domain, [0.0, size.width - config.h_margin]);

        let month_domain: Vec<&'static str> = dataset
            .month_extent()
            .map(|[first, last]| {
                (first..=last)
                    .map(|month| month_name(i32::from(month)))
                    .collect()
            })
            .unwrap_or_default();
        let months = BandScale::new(month_domain, [size.height - config.v_margin, 0.0]);

        let temperature = LinearScale::new(
            dataset.temp_domain,
            [0.0, f64::from(config.palette_width)],
        );
        let hues = HueScale::new(dataset.temp_domain, config.hue_range);

        let lookup = dataset
            .records
            .iter()
            .enumerate()
            .map(|(index, record)| ((record.year, record.month), index))
            .collect();

        Self {
            size,
            years,
            months,
            temperature,
            hues,
            year_ticks,
            lookup,
        }
    }

    /// Rectangle for the record at `index`, or `None` when its year or month
    /// falls outside the scales.
    pub fn cell(&self, index: usize, record: &Record, config: &ChartConfig) -> Option<Cell> {
        let x = self.years.position(&record.year)?;
        let y = self.months.position(&record.month_name())?;
        Some(Cell {
            record: index,
            x: config.h_margin + x,
            y,
            width: self.years.bandwidth(),
            height: self.months.bandwidth(),
        })
    }

    pub fn cells<'a>(
        &'a self,
        dataset: &'a Dataset,
        config: &'a ChartConfig,
    ) -> impl Iterator<Item = Cell> + 'a {
        dataset
            .records
            .iter()
            .enumerate()
            .filter_map(move |(index, record)| self.cell(index, record, config))
    }

    /// Index of the record observed in `year` and zero-based `month`.
    pub fn record_index(&self, year: i32, month: u8) -> Option<usize> {
        self.lookup.get(&(year, month)).copied()
    }

    pub fn temperature_ticks(&self) -> Vec<f64> {
        self.temperature.ticks(TEMP_TICK_COUNT)
    }

    pub fn temperature_tick_step(&self) -> f64 {
        self.temperature.tick_step(TEMP_TICK_COUNT)
    }
}

/// One swatch per integer pixel across the palette, coldest first. Depends
/// only on the layout, never on the data.
pub fn palette(config: &ChartConfig) -> Vec<HslColor> {
    let scale = HueScale::new([0.0, f64::from(config.palette_width)], config.hue_range);
    (0..=config.palette_width)
        .map(|pixel| scale.color(f64::from(pixel)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_support::two_year_dataset;
    use crate::domain::{RawDataset, RawRecord};

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(
            diff < 1e-9,
            "expected {expected}, got {actual} (diff {diff})"
        );
    }

    fn full_range_dataset() -> Dataset {
        let monthly_variance = (1753..=2015)
            .flat_map(|year| {
                (1..=12).map(move |month| RawRecord {
                    year,
                    month,
                    variance: 0.0,
                })
            })
            .collect();
        Dataset::normalize(
            RawDataset {
                base_temperature: 8.66,
                monthly_variance,
            },
            [240.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn chart_width_grows_with_record_count() {
        let config = ChartConfig::default();
        let size = ChartSize::for_records(3153, &config);
        assert_close(size.width, 70.0 + 4.0 * (3153.0 / 12.0));
        assert_close(size.height, 520.0);

        let size = ChartSize::for_records(24, &config);
        assert_close(size.width, 78.0);
    }

    #[test]
    fn year_ticks_are_decades() {
        let config = ChartConfig::default();
        let model = ChartModel::new(&full_range_dataset(), &config);

        assert_eq!(model.years.domain().len(), 263);
        assert_eq!(model.year_ticks.first(), Some(&1760));
        assert_eq!(model.year_ticks.last(), Some(&2010));
        assert_eq!(model.year_ticks.len(), 26);
    }

    #[test]
    fn missing_years_still_get_a_slot() {
        let dataset = Dataset::normalize(
            RawDataset {
                base_temperature: 8.66,
                monthly_variance: vec![
                    RawRecord { year: 1800, month: 1, variance: 0.1 },
                    RawRecord { year: 1803, month: 1, variance: 0.2 },
                ],
            },
            [240.0, 0.0],
        )
        .unwrap();
        let model = ChartModel::new(&dataset, &ChartConfig::default());
        assert_eq!(model.years.domain(), &[1800, 1801, 1802, 1803]);
    }

    #[test]
    fn january_is_the_bottom_row() {
        let config = ChartConfig::default();
        let dataset = two_year_dataset();
        let model = ChartModel::new(&dataset, &config);

        let january = model.cell(0, &dataset.records[0], &config).unwrap();
        assert_close(january.y, 440.0);
        assert_close(january.height, 40.0);

        let december = model.cell(11, &dataset.records[11], &config).unwrap();
        assert_close(december.y, 0.0);
    }

    #[test]
    fn cells_are_offset_by_horizontal_margin() {
        let config = ChartConfig::default();
        let dataset = two_year_dataset();
        let model = ChartModel::new(&dataset, &config);

        let cells: Vec<Cell> = model.cells(&dataset, &config).collect();
        assert_eq!(cells.len(), 24);
        assert_close(cells[0].x, 70.0);
        assert_close(cells[12].x, 74.0);
        assert_close(cells[12].width, 4.0);
    }

    #[test]
    fn record_lookup_by_year_and_month() {
        let dataset = two_year_dataset();
        let model = ChartModel::new(&dataset, &ChartConfig::default());
        assert_eq!(model.record_index(1754, 2), Some(14));
        assert_eq!(model.record_index(1755, 0), None);
    }

    #[test]
    fn palette_spans_the_hue_range() {
        let config = ChartConfig::default();
        let swatches = palette(&config);
        assert_eq!(swatches.len(), 251);
        assert_eq!(swatches[0].to_string(), "hsl(240, 100%, 50%)");
        assert_eq!(swatches[250].to_string(), "hsl(0, 100%, 50%)");
    }

    #[test]
    fn temperature_axis_uses_rounded_domain() {
        let dataset = two_year_dataset();
        let model = ChartModel::new(&dataset, &ChartConfig::default());
        assert_eq!(model.temperature.domain, [6.0, 12.0]);
        assert_close(model.temperature.scale(12.0), 250.0);
        assert_eq!(model.temperature_ticks().first(), Some(&6.0));
    }
}
