pub mod app;
pub mod run_gui;
