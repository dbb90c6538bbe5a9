pub mod aggregate;
pub mod analytics;
pub mod app;
pub mod classify;
pub mod config;
pub mod drill;
pub mod errors;
pub mod handlers;
pub mod lexicon;
pub mod models;
pub mod nlp;
pub mod phrase;
pub mod range;
pub mod state;
pub mod stats;
pub mod storage;
pub mod taxonomy;
pub mod templates;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_data;
