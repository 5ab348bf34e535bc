pub mod app;
pub mod config;
pub mod day;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod store;
pub mod sync;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use seed::load_seed;
