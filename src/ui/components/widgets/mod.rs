//! Dashboard panels.
//!
//! Each panel renders straight into a [`ratatui::buffer::Buffer`] so the
//! dashboard can lay them out on a canvas taller than the screen and scroll it.

pub mod activity_feed;
pub mod card;
pub mod chart_placeholder;
pub mod kpi_cards;
pub mod metric_cards;
pub mod orders_table;
pub mod top_products;

pub use card::{card, change_indicator};
