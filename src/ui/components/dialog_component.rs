//! Modal dialogs: key binding help and the in-memory log viewer.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{Action, Component, DialogType, RenderContext};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{block::BorderType, Block, Clear, Paragraph},
    Frame,
};

const HELP_CONTENT: &str = r"
ADMINBOARD - Terminal Admin Dashboard
=====================================

NAVIGATION
----------
j/k ↑/↓     Move in the focused pane
Enter/Space Open a section, follow a link or open a row menu
h/l ←/→     Collapse/expand the section under the cursor
Tab         Switch focus between sidebar and orders table
PgUp/PgDn   Scroll the dashboard
b           Collapse the sidebar to icons (and back)
u           Open the account menu

THEME
-----
t           Toggle light/dark
T           Choose light, dark or system
i           Cycle icon set (emoji, unicode, ascii)

DASHBOARD
---------
/           Search (not available yet)
f           Filter (not available yet)
x           Export (not available yet)
n           Add new (not available yet)
v           View all orders (not available yet)

GENERAL
-------
?           Toggle this help
G           Show logs
Esc         Close menus and dialogs
q, Ctrl+C   Quit
";

const PAGE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    logger: Logger,
    scroll_offset: usize,
    scrollbar_helper: ScrollbarHelper,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            logger,
            scroll_offset: 0,
            scrollbar_helper: ScrollbarHelper::new(),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn lines(&self) -> Vec<String> {
        match self.dialog_type {
            Some(DialogType::Help) => HELP_CONTENT.lines().map(str::to_string).collect(),
            Some(DialogType::Logs) => {
                let logs = self.logger.get_logs();
                if logs.is_empty() {
                    vec!["No logs yet".to_string()]
                } else {
                    logs
                }
            }
            None => Vec::new(),
        }
    }

    /// Clamped to the content on the next render
    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = self.dialog_type else {
            return Action::None;
        };

        let closes = match key.code {
            KeyCode::Esc | KeyCode::Char('q') => true,
            KeyCode::Char('?') => dialog_type == DialogType::Help,
            KeyCode::Char('G') => dialog_type == DialogType::Logs,
            _ => false,
        };
        if closes {
            return Action::HideDialog;
        }

        let offset = self.scroll_offset;
        let target = match key.code {
            KeyCode::Char('j') | KeyCode::Down => offset.saturating_add(1),
            KeyCode::Char('k') | KeyCode::Up => offset.saturating_sub(1),
            KeyCode::PageDown => offset.saturating_add(PAGE),
            KeyCode::PageUp => offset.saturating_sub(PAGE),
            KeyCode::Home => 0,
            KeyCode::End => usize::MAX,
            _ => offset,
        };
        self.scroll_to(target);
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.dialog_type = Some(dialog_type);
                self.scroll_to(0);
                Action::None
            }
            Action::HideDialog => {
                self.dialog_type = None;
                self.scroll_to(0);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext) {
        let Some(dialog_type) = self.dialog_type else {
            return;
        };
        let palette = &ctx.palette;

        let (title, percent_x) = match dialog_type {
            DialogType::Help => (DIALOG_TITLE_HELP, 70),
            DialogType::Logs => (DIALOG_TITLE_LOGS, 90),
        };
        let area = LayoutManager::centered_rect(percent_x, 80, rect);
        f.render_widget(Clear, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .title(title)
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(palette.foreground).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(palette.accent))
            .style(Style::default().bg(palette.background).fg(palette.foreground));
        let content_area = block.inner(area);
        f.render_widget(block, area);

        let lines = self.lines();
        let total_lines = lines.len();
        let visible_height = content_area.height as usize;
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = self.scroll_offset.min(max_scroll);
        self.scroll_offset = clamped_offset;

        let visible: Vec<String> = lines.into_iter().skip(clamped_offset).take(visible_height).collect();
        let paragraph = Paragraph::new(visible.join("\n")).style(Style::default().fg(palette.foreground));
        let text_area = Rect::new(
            content_area.x + 1,
            content_area.y,
            content_area.width.saturating_sub(2),
            content_area.height,
        );
        f.render_widget(paragraph, text_area);

        let (_, scrollbar_area) = ScrollbarHelper::split(content_area, total_lines, 0);
        self.scrollbar_helper.update_state(max_scroll, clamped_offset, visible_height);
        self.scrollbar_helper.render(f, scrollbar_area, ctx);
    }
}
