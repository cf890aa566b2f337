pub mod api;
pub mod app;
pub mod cli;
pub mod events;
pub mod feed;
pub mod theme;
pub mod ui;

pub use app::App;
