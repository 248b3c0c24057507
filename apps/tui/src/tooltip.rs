use std::fmt;

use crate::config::ChartConfig;
use crate::domain::Record;

/// Text shown for one hovered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipContent {
    pub month: &'static str,
    pub year: i32,
    pub temp: f64,
    pub variance: f64,
}

impl TooltipContent {
    pub fn from_record(record: &Record) -> Self {
        Self {
            month: record.month_name(),
            year: record.year,
            temp: record.temp,
            variance: record.variance,
        }
    }

    pub fn heading(&self) -> String {
        format!("{}, {}:", self.month, self.year)
    }

    pub fn detail(&self) -> String {
        format!(
            "Temp: {}°C / var = {}°C",
            fixed_2(self.temp),
            fixed_2(self.variance)
        )
    }

    /// HTML form with a line break between heading and detail.
    pub fn to_html(&self) -> String {
        format!("{}<br />{}", self.heading(), self.detail())
    }
}

/// Two-decimal fixed notation with exact ties rounded away from zero, as
/// `toFixed(2)` does. `{:.2}` alone rounds ties to even.
fn fixed_2(value: f64) -> String {
    // The only binary fractions exactly halfway between hundredths are odd
    // multiples of 1/8, and scaling by 8 or 100 keeps them exact.
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && (eighths.rem_euclid(2.0) - 1.0).abs() < f64::EPSILON;
    if is_tie {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{value:.2}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipState {
    Hidden,
    Visible {
        content: TooltipContent,
        left: f64,
        top: f64,
    },
}

impl fmt::Display for TooltipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "Hidden"),
            Self::Visible { content, .. } => write!(f, "Visible({})", content.heading()),
        }
    }
}

/// Pointer activity over the chart grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Hover { record: Record, x: f64, y: f64 },
    Unhover,
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hover { record, x, y } => write!(
                f,
                "Hover({} {} at {x},{y})",
                record.month_name(),
                record.year
            ),
            Self::Unhover => write!(f, "Unhover"),
        }
    }
}

/// Two-state tooltip view model. Every event is accepted in every state;
/// a hover while visible simply replaces the content and position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    state: TooltipState,
    visible_opacity: f64,
    offset: f64,
}

impl Tooltip {
    pub const fn new(visible_opacity: f64, offset: f64) -> Self {
        Self {
            state: TooltipState::Hidden,
            visible_opacity,
            offset,
        }
    }

    pub const fn from_config(config: &ChartConfig) -> Self {
        Self::new(config.tooltip_opacity, config.tooltip_offset)
    }

    pub fn handle(&mut self, event: PointerEvent) {
        self.state = match event {
            PointerEvent::Hover { record, x, y } => TooltipState::Visible {
                content: TooltipContent::from_record(&record),
                left: x,
                top: y - self.offset,
            },
            PointerEvent::Unhover => TooltipState::Hidden,
        };
    }

    pub const fn state(&self) -> &TooltipState {
        &self.state
    }

    pub const fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible { .. })
    }

    pub const fn opacity(&self) -> f64 {
        match self.state {
            TooltipState::Hidden => 0.0,
            TooltipState::Visible { .. } => self.visible_opacity,
        }
    }

    pub const fn content(&self) -> Option<&TooltipContent> {
        match &self.state {
            TooltipState::Hidden => None,
            TooltipState::Visible { content, .. } => Some(content),
        }
    }

    /// `(left, top)` of the tooltip while visible.
    pub const fn position(&self) -> Option<(f64, f64)> {
        match self.state {
            TooltipState::Hidden => None,
            TooltipState::Visible { left, top, .. } => Some((left, top)),
        }
    }
}
