use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::data::DataSource;

/// Published monthly variance dataset (1753-2015).
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Layout constants for the chart, legend and tooltip. Passed by reference
/// into every renderer; nothing mutates it after startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Horizontal margin reserved for the month axis.
    pub h_margin: f64,
    /// Vertical margin reserved for the year axis.
    pub v_margin: f64,
    /// Horizontal margin of the palette inside the legend.
    pub palette_margin: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub tip_height: f64,
    pub x_label: String,
    pub y_label: String,
    /// Hue at the cold and hot ends (240 = blue, 0 = red).
    pub hue_range: [f64; 2],
    pub palette_height: f64,
    pub palette_width: u32,
    pub container_width: f64,
    pub container_height: f64,
    pub legend_width: f64,
    pub legend_label: String,
    pub tooltip_opacity: f64,
    /// Distance the tooltip sits above the pointer.
    pub tooltip_offset: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            h_margin: 70.0,
            v_margin: 40.0,
            palette_margin: 25.0,
            cell_width: 4.0,
            cell_height: 40.0,
            tip_height: 50.0,
            x_label: "Year".to_string(),
            y_label: "Month".to_string(),
            hue_range: [240.0, 0.0],
            palette_height: 20.0,
            palette_width: 250,
            container_width: 1200.0,
            container_height: 750.0,
            legend_width: 290.0,
            legend_label: "Temperature color code".to_string(),
            tooltip_opacity: 0.8,
            tooltip_offset: 40.0,
        }
    }
}

impl ChartConfig {
    pub fn legend_height(&self) -> f64 {
        2.0f64.mul_add(self.palette_margin, self.palette_height)
    }

    pub fn palette_svg_width(&self) -> f64 {
        2.0f64.mul_add(self.palette_margin, f64::from(self.palette_width))
    }
}

/// Where the dataset is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub source: DataSource,
}

impl SourceConfig {
    /// Reads `HEATMAP_DATA_FILE` and `HEATMAP_DATA_URL` (after loading any
    /// `.env` file). A file path wins over a URL; empty values count as unset.
    pub fn from_env() -> Self {
        dotenv().ok();

        let source = match (non_empty_var("HEATMAP_DATA_FILE"), non_empty_var("HEATMAP_DATA_URL")) {
            (Some(path), _) => DataSource::File(PathBuf::from(path)),
            (None, Some(url)) => DataSource::Remote(url),
            (None, None) => DataSource::Remote(DEFAULT_DATA_URL.to_string()),
        };

        Self { source }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

/// Tracing filter directive: `HEATMAP_LOG` if set, `debug` when `DEBUG` is
/// set, `warn` otherwise.
pub fn log_filter() -> String {
    env::var("HEATMAP_LOG").unwrap_or_else(|_| {
        if env::var("DEBUG").is_ok() {
            "debug".to_string()
        } else {
            "warn".to_string()
        }
    })
}
