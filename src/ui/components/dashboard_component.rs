//! Main content view.
//!
//! Panels are laid out on a canvas as tall as the content needs, then the
//! visible slice is copied into the frame. `PageUp`/`PageDown` and the mouse
//! wheel scroll the canvas.

use crate::constants::{BREAKPOINT_LARGE, WELCOME_SUBTITLE, WELCOME_TITLE};
use crate::fixtures;
use crate::models::{ActivityEvent, KpiMetric, OrderRecord, ProductStat, SecondaryMetric};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::components::widgets::{
    activity_feed, chart_placeholder, kpi_cards, metric_cards, orders_table, top_products,
};
use crate::ui::core::{Action, Affordance, Component, MenuKind, RenderContext};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, TableState, Widget, Wrap},
    Frame,
};

/// Blank lines between panels
const GAP: u16 = 1;
/// Height of the chart placeholder when it is not beside the products card
const CHART_MIN_HEIGHT: u16 = 10;

/// Records shown on the dashboard
#[derive(Debug, Clone, Copy)]
pub struct DashboardData {
    pub kpis: &'static [KpiMetric],
    pub products: &'static [ProductStat],
    pub orders: &'static [OrderRecord],
    pub activity: &'static [ActivityEvent],
    pub metrics: &'static [SecondaryMetric],
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            kpis: fixtures::KPI_METRICS,
            products: fixtures::TOP_PRODUCTS,
            orders: fixtures::RECENT_ORDERS,
            activity: fixtures::RECENT_ACTIVITY,
            metrics: fixtures::SECONDARY_METRICS,
        }
    }
}

/// Panel positions on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardLayout {
    pub welcome: Rect,
    pub kpis: Rect,
    pub chart: Rect,
    pub products: Rect,
    pub orders: Rect,
    pub activity: Rect,
    pub metrics: Rect,
    pub height: u16,
}

impl DashboardLayout {
    /// Stack the panels for a canvas `width` columns wide. Side-by-side rows
    /// split 4:3 on large screens.
    #[must_use]
    pub fn compute(width: u16, data: &DashboardData) -> Self {
        let mut y = 0;
        let mut next = |height: u16| {
            let rect = Rect::new(0, y, width, height);
            y += height + GAP;
            rect
        };

        let subtitle_lines = (WELCOME_SUBTITLE.chars().count() as u16).div_ceil(width.max(1));
        let welcome = next(1 + subtitle_lines);
        let kpis = next(kpi_cards::height(data.kpis.len(), width));

        let products_height = top_products::height(data.products.len());
        let orders_height = orders_table::height(data.orders.len());
        let activity_height = activity_feed::height(data.activity.len());

        let (chart, products, orders, activity) = if width >= BREAKPOINT_LARGE {
            let split = |row: Rect| {
                let [left, _, right] =
                    Layout::horizontal([Constraint::Ratio(4, 7), Constraint::Length(1), Constraint::Ratio(3, 7)])
                        .areas(row);
                (left, right)
            };
            let (chart, products) = split(next(products_height.max(CHART_MIN_HEIGHT)));
            let (orders, activity) = split(next(orders_height.max(activity_height)));
            (chart, products, orders, activity)
        } else {
            (
                next(CHART_MIN_HEIGHT),
                next(products_height),
                next(orders_height),
                next(activity_height),
            )
        };

        let metrics = next(metric_cards::height(data.metrics.len(), width));

        Self {
            welcome,
            kpis,
            chart,
            products,
            orders,
            activity,
            metrics,
            height: metrics.bottom(),
        }
    }
}

pub struct DashboardComponent {
    data: DashboardData,
    table_state: TableState,
    orders_focused: bool,
    scroll: u16,
    viewport: Rect,
    layout: DashboardLayout,
    scrollbar_helper: ScrollbarHelper,
}

impl Default for DashboardComponent {
    fn default() -> Self {
        Self::new(DashboardData::default())
    }
}

impl DashboardComponent {
    pub fn new(data: DashboardData) -> Self {
        Self {
            data,
            table_state: TableState::default().with_selected(Some(0)),
            orders_focused: false,
            scroll: 0,
            viewport: Rect::default(),
            layout: DashboardLayout::default(),
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    #[must_use]
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    #[must_use]
    pub fn selected_order(&self) -> Option<usize> {
        self.table_state.selected()
    }

    #[must_use]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Give or take keyboard focus; focusing brings the orders table into view
    pub fn set_orders_focused(&mut self, focused: bool) {
        self.orders_focused = focused;
        if focused {
            let orders = self.layout.orders;
            if orders.y < self.scroll || orders.bottom() > self.scroll + self.viewport.height {
                self.scroll = orders.y;
                self.clamp_scroll();
            }
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = (i32::from(self.scroll) + delta).max(0) as u16;
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let max = self.layout.height.saturating_sub(self.viewport.height);
        self.scroll = self.scroll.min(max);
    }

    fn move_order(&mut self, forward: bool) {
        let len = self.data.orders.len();
        if len == 0 {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.table_state.select(Some(next));
    }

    fn open_order_menu(&self) -> Action {
        match self.table_state.selected() {
            Some(order_index) if order_index < self.data.orders.len() => {
                Action::OpenMenu(MenuKind::OrderActions { order_index })
            }
            _ => Action::None,
        }
    }

    /// Row of the orders table under canvas line `y`
    fn order_at(&self, y: u16) -> Option<usize> {
        // border, description, blank line, header
        let first_row = self.layout.orders.y + 4;
        if y < first_row || y >= self.layout.orders.bottom().saturating_sub(1) {
            return None;
        }
        let index = self.table_state.offset() + ((y - first_row) / 2) as usize;
        (index < self.data.orders.len()).then_some(index)
    }

    /// Handle mouse events inside the main `area`
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let area = self.viewport;
        let inside =
            mouse.column >= area.x && mouse.column < area.right() && mouse.row >= area.y && mouse.row < area.bottom();
        if !inside {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_by(-3);
                Action::None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(3);
                Action::None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                // Canvas starts after the left padding column
                let x = (mouse.column - area.x).saturating_sub(1);
                let y = mouse.row - area.y + self.scroll;
                let orders = self.layout.orders;
                if x < orders.x || x >= orders.right() {
                    return Action::None;
                }
                match self.order_at(y) {
                    Some(index) => {
                        self.table_state.select(Some(index));
                        self.open_order_menu()
                    }
                    None => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn render_welcome(buf: &mut Buffer, area: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        let lines = vec![
            Line::from(Span::styled(
                WELCOME_TITLE,
                Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(WELCOME_SUBTITLE, Style::default().fg(palette.muted))),
        ];
        Paragraph::new(lines).wrap(Wrap { trim: true }).render(area, buf);
    }

    /// Draw every panel onto an off-screen canvas `width` columns wide
    fn render_canvas(&mut self, width: u16, ctx: &RenderContext) -> Buffer {
        let palette = &ctx.palette;
        self.layout = DashboardLayout::compute(width, &self.data);
        let layout = self.layout;

        let mut canvas = Buffer::empty(Rect::new(0, 0, width, layout.height));
        canvas.set_style(canvas.area, Style::default().bg(palette.background).fg(palette.foreground));

        Self::render_welcome(&mut canvas, layout.welcome, ctx);
        kpi_cards::render(&mut canvas, layout.kpis, ctx, self.data.kpis);
        chart_placeholder::render(&mut canvas, layout.chart, ctx);
        top_products::render(&mut canvas, layout.products, ctx, self.data.products);
        orders_table::render(
            &mut canvas,
            layout.orders,
            ctx,
            self.data.orders,
            &mut self.table_state,
            self.orders_focused,
        );
        activity_feed::render(&mut canvas, layout.activity, ctx, self.data.activity);
        metric_cards::render(&mut canvas, layout.metrics, ctx, self.data.metrics);

        canvas
    }
}

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::PageDown => {
                self.scroll_by(i32::from(self.viewport.height.max(2) / 2));
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_by(-i32::from(self.viewport.height.max(2) / 2));
                Action::None
            }
            _ if !self.orders_focused => Action::None,
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_order(true);
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_order(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.open_order_menu(),
            KeyCode::Char('v') => Action::Inert(Affordance::ViewAllOrders),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let palette = &ctx.palette;
        f.buffer_mut()
            .set_style(rect, Style::default().bg(palette.background).fg(palette.foreground));

        // One column of padding on both sides
        let padded = Rect::new(rect.x + 1, rect.y, rect.width.saturating_sub(2), rect.height);
        self.viewport = rect;

        let mut canvas = self.render_canvas(padded.width, ctx);
        let (content, scrollbar_area) = if canvas.area.height > padded.height {
            let content = Rect::new(padded.x, padded.y, padded.width.saturating_sub(1), padded.height);
            canvas = self.render_canvas(content.width, ctx);
            let scrollbar = Rect::new(rect.right().saturating_sub(1), rect.y, 1, rect.height);
            (content, Some(scrollbar))
        } else {
            (padded, None)
        };
        self.clamp_scroll();

        let frame_buf = f.buffer_mut();
        for y in 0..content.height {
            for x in 0..content.width {
                if let (Some(src), Some(dst)) = (
                    canvas.cell((x, y + self.scroll)),
                    frame_buf.cell_mut((content.x + x, content.y + y)),
                ) {
                    *dst = src.clone();
                }
            }
        }

        let total = self.layout.height as usize;
        let visible = content.height as usize;
        self.scrollbar_helper
            .update_state(total.saturating_sub(visible), self.scroll as usize, visible);
        self.scrollbar_helper.render(f, scrollbar_area, ctx);
    }
}
