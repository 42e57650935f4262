//! UI layer for the order form window: app shell, form panels, and theme.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::OrderFormApp;
