use heatmap::chart::ChartModel;
use heatmap::{ChartConfig, Dataset, PointerEvent, Tooltip};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::layout::{max_scroll, GridLayout, ScreenLayout};

/// Rows between the pointer and the top edge of the tooltip.
pub const TOOLTIP_ROW_OFFSET: f64 = 5.0;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub dataset: Dataset,
    pub config: ChartConfig,
    pub model: ChartModel,
    pub tooltip: Tooltip,
    /// Index of the leftmost visible year.
    pub scroll: usize,
    /// `(year index, month)` under the pointer.
    pub hovered: Option<(usize, u8)>,
    pub pointer: Option<(u16, u16)>,
    pub source: String,
    pub status_message: String,
}

impl App {
    pub fn new(dataset: Dataset, config: ChartConfig, source: String) -> Self {
        let model = ChartModel::new(&dataset, &config);
        let tooltip = Tooltip::new(config.tooltip_opacity, TOOLTIP_ROW_OFFSET);
        let status_message = format!("{} records loaded", dataset.len());

        Self {
            running: true,
            dataset,
            config,
            model,
            tooltip,
            scroll: 0,
            hovered: None,
            pointer: None,
            source,
            status_message,
        }
    }

    pub fn year_count(&self) -> usize {
        self.model.years.domain().len()
    }

    /// Grid geometry for a frame of size `area`.
    pub fn grid_layout(&self, area: Rect) -> Option<GridLayout> {
        GridLayout::new(
            ScreenLayout::new(area).chart_inner(),
            self.year_count(),
            self.scroll,
        )
    }

    pub fn scroll_by(&mut self, delta: isize, area: Rect) {
        let target = self.scroll.saturating_add_signed(delta);
        self.scroll_to(target, area);
    }

    pub fn scroll_to(&mut self, target: usize, area: Rect) {
        let limit = self.grid_layout(area).map_or_else(
            || self.year_count().saturating_sub(1),
            |layout| max_scroll(self.year_count(), layout.grid.width),
        );
        let scroll = target.min(limit);
        if scroll != self.scroll {
            self.scroll = scroll;
            // Cells moved under the pointer.
            self.unhover();
        }
    }

    /// Show the tooltip for the record under `(column, row)`, or hide it when
    /// the pointer is not over a record.
    pub fn hover(&mut self, column: u16, row: u16, area: Rect) {
        let hit = self
            .grid_layout(area)
            .and_then(|layout| layout.cell_at(column, row));

        let record = hit.and_then(|(year_index, month)| {
            let year = *self.model.years.domain().get(year_index)?;
            let index = self.model.record_index(year, month)?;
            self.dataset.records.get(index).copied()
        });

        match (hit, record) {
            (Some(cell), Some(record)) => {
                if self.hovered != Some(cell) {
                    debug!(year = record.year, month = record.month, "hover");
                }
                self.hovered = Some(cell);
                self.pointer = Some((column, row));
                self.tooltip.handle(PointerEvent::Hover {
                    record,
                    x: f64::from(column),
                    y: f64::from(row),
                });
            }
            _ => self.unhover(),
        }
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
        self.pointer = None;
        self.tooltip.handle(PointerEvent::Unhover);
    }

    /// First and last visible year for a frame of size `area`.
    pub fn visible_years(&self, area: Rect) -> Option<(i32, i32)> {
        let layout = self.grid_layout(area)?;
        let years = self.model.years.domain();
        let first = *years.get(layout.first_year)?;
        let last = *years.get(layout.first_year + layout.visible_years.checked_sub(1)?)?;
        Some((first, last))
    }
}
