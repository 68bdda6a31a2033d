#[path = "core/actions.rs"]
mod actions;
#[path = "core/layout.rs"]
mod layout;
#[path = "core/task_manager.rs"]
mod task_manager;
