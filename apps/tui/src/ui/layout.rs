use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Width of the month-name axis to the left of the grid.
pub const MONTH_AXIS_WIDTH: u16 = 10;
/// Rows used for decade tick labels under the grid.
pub const YEAR_AXIS_HEIGHT: u16 = 1;
const MONTHS: u16 = 12;

/// Top-level screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub chart: Rect,
    pub legend: Rect,
    pub footer: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let regions = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(MONTHS + YEAR_AXIS_HEIGHT + 2),
                Constraint::Length(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: regions[0],
            chart: regions[1],
            legend: regions[2],
            footer: regions[3],
        }
    }

    /// Area inside the chart block's border.
    pub fn chart_inner(&self) -> Rect {
        self.chart.inner(Margin::new(1, 1))
    }
}

/// Geometry of the heat map grid inside the chart block: one column per
/// year starting at `first_year`, twelve month rows with January at the
/// bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub grid: Rect,
    pub first_year: usize,
    pub visible_years: usize,
    pub row_height: u16,
}

impl GridLayout {
    /// `None` when `inner` cannot hold the axes plus a twelve-row grid.
    pub fn new(inner: Rect, year_count: usize, scroll: usize) -> Option<Self> {
        let width = inner.width.checked_sub(MONTH_AXIS_WIDTH)?;
        let height = inner.height.checked_sub(YEAR_AXIS_HEIGHT)?;
        if width == 0 || height < MONTHS || year_count == 0 {
            return None;
        }

        let row_height = height / MONTHS;
        let first_year = scroll.min(max_scroll(year_count, width));
        let visible_years = usize::from(width).min(year_count - first_year);

        Some(Self {
            grid: Rect {
                x: inner.x + MONTH_AXIS_WIDTH,
                y: inner.y,
                width,
                height: row_height * MONTHS,
            },
            first_year,
            visible_years,
            row_height,
        })
    }

    /// Year index and zero-based month under the terminal cell, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, u8)> {
        if column < self.grid.x || row < self.grid.y {
            return None;
        }
        let offset = usize::from(column - self.grid.x);
        let band = (row - self.grid.y) / self.row_height;
        if offset >= self.visible_years || band >= MONTHS {
            return None;
        }
        let month = u8::try_from(MONTHS - 1 - band).ok()?;
        Some((self.first_year + offset, month))
    }

    /// Terminal rectangle covered by a year column and month row.
    pub fn cell_rect(&self, year_index: usize, month: u8) -> Option<Rect> {
        let offset = year_index.checked_sub(self.first_year)?;
        if offset >= self.visible_years || u16::from(month) >= MONTHS {
            return None;
        }
        let column = u16::try_from(offset).ok()?;
        Some(Rect {
            x: self.grid.x + column,
            y: self.grid.y + (MONTHS - 1 - u16::from(month)) * self.row_height,
            width: 1,
            height: self.row_height,
        })
    }

    /// Top row of the band for `month`.
    pub const fn month_row(&self, month: u8) -> u16 {
        self.grid.y + (MONTHS - 1 - month as u16) * self.row_height
    }

    /// Row holding the decade labels.
    pub const fn axis_row(&self) -> u16 {
        self.grid.y + self.grid.height
    }
}

/// Largest useful scroll offset for a grid `width` columns wide.
pub fn max_scroll(year_count: usize, width: u16) -> usize {
    year_count.saturating_sub(usize::from(width))
}
