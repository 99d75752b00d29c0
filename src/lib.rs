pub mod actions;
pub mod conditional;
pub mod config;
pub mod layout;
pub mod model;
pub mod navigation;
pub mod render;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod ui;
pub mod value;
