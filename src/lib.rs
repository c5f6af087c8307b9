// Gridcal Library
// Calendar grid, event placement, drag reordering, holiday overlay, theming.

pub mod config;
pub mod controller;
pub mod models;
pub mod services;
pub mod theme;
pub mod utils;

pub use controller::CalendarController;
