//! Core UI building blocks.
//!
//! - [`actions`] - the [`Action`] messages components exchange
//! - [`component`] - the [`Component`] trait every pane implements
//! - [`context`] - [`RenderContext`], theme and icons shared while drawing
//! - [`event_handler`] - terminal input polling and ticks
//! - [`task_manager`] - background preference reads and writes
//!
//! Components turn input into actions, the app component applies the ones
//! that change shared state, and background tasks report back through the
//! same action channel.

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, Affordance, DialogType, Focus, MenuKind, NavTarget};
pub use component::Component;
pub use context::RenderContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
