pub mod aggregate;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod palette;
pub mod state;
pub mod storage;
pub mod theme;
pub mod themes;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use theme::{Theme, ThemeController};
