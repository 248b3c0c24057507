// Chart module for heatmap
// Color mapping, month names, scales and the per-dataset chart model

pub mod color;
pub mod model;
pub mod month;
pub mod scale;

pub use color::{color_hsl, HslColor, HueScale};
pub use model::{palette, Cell, ChartModel, ChartSize};
pub use month::month_name;
pub use scale::{BandScale, LinearScale};
