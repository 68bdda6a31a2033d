use super::actions::Action;
use super::context::RenderContext;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// A piece of the screen that turns input into [`Action`]s and draws itself.
///
/// Actions produced by one component are offered to the others through
/// [`Component::update`]; whatever comes back out is handled by the app.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Mouse input is ignored unless a component opts in
    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    /// React to an action; return it (or a follow-up) to keep it moving
    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, ctx: &RenderContext);
}
