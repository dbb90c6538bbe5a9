use crate::analytics::AnalyticsSession;
use crate::config::Config;
use crate::models::AppData;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub data: Arc<Mutex<AppData>>,
    /// Analytics view state per user; never persisted.
    pub sessions: Arc<Mutex<HashMap<String, AnalyticsSession>>>,
}

impl AppState {
    pub fn new(config: Config, data: AppData) -> Self {
        Self {
            config: Arc::new(config),
            data: Arc::new(Mutex::new(data)),
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}
