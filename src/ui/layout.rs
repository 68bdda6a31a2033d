//! Layout management and calculations

use crate::constants::{BREAKPOINT_LARGE, BREAKPOINT_MEDIUM, MAIN_AREA_MIN_WIDTH, SIDEBAR_ICON_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub sidebar: Rect,
    pub main: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into sidebar, main content and a one-line status bar.
    /// The sidebar gives way before the main area drops below its minimum.
    #[must_use]
    pub fn main_layout(area: Rect, sidebar_width: u16, icon_only: bool) -> MainAreas {
        let [top, status] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let wanted = if icon_only { SIDEBAR_ICON_WIDTH } else { sidebar_width };
        let width = wanted.min(top.width.saturating_sub(MAIN_AREA_MIN_WIDTH));

        let [sidebar, main] = Layout::horizontal([Constraint::Length(width), Constraint::Min(0)]).areas(top);

        MainAreas { sidebar, main, status }
    }

    /// Number of KPI card columns for a content width
    #[must_use]
    pub fn kpi_columns(width: u16) -> usize {
        if width >= BREAKPOINT_LARGE {
            4
        } else if width >= BREAKPOINT_MEDIUM {
            2
        } else {
            1
        }
    }

    /// Lay `count` cells out row by row, `columns` per row, each row
    /// `row_height` lines tall. Cells past the bottom of `area` are clipped.
    #[must_use]
    pub fn grid(area: Rect, count: usize, columns: usize, row_height: u16) -> Vec<Rect> {
        let columns = columns.max(1);
        let rows = count.div_ceil(columns);
        let mut cells = Vec::with_capacity(count);

        for row in 0..rows {
            let y = area.y.saturating_add(row as u16 * row_height);
            if y >= area.bottom() {
                break;
            }
            let height = row_height.min(area.bottom() - y);
            let row_area = Rect::new(area.x, y, area.width, height);
            let constraints = vec![Constraint::Ratio(1, columns as u32); columns];
            let row_cells = Layout::horizontal(constraints).split(row_area);

            let in_row = (count - row * columns).min(columns);
            cells.extend(row_cells.iter().take(in_row).copied());
        }

        cells
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// A `width` x `height` popup anchored at (`x`, `y`), shifted back inside
    /// `bounds` when it would overflow
    #[must_use]
    pub fn anchored_rect(x: u16, y: u16, width: u16, height: u16, bounds: Rect) -> Rect {
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);
        let x = x.clamp(bounds.x, bounds.right().saturating_sub(width));
        let y = y.clamp(bounds.y, bounds.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}
