pub mod ai;
pub mod theme;
pub mod transform;
pub mod types;
pub mod ui;
pub mod views;
