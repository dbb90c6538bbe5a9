use crate::errors::AppError;
use crate::models::{AppData, CustomTemplate, Entry, UserData};
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Entry persistence as seen by the analytics and HTTP layers.
///
/// Range bounds are inclusive and compared as strings, which is correct for
/// zero-padded `YYYY-MM-DD` dates.
pub trait EntryStore {
    fn list_entries(&self) -> Result<Vec<Entry>, AppError>;

    fn entries_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Entry>, AppError>;

    fn entries_by_date(&self, date: &str) -> Result<Vec<Entry>, AppError> {
        self.entries_by_date_range(date, date)
    }

    fn get_entry(&self, id: u64) -> Result<Entry, AppError>;

    fn add_entry(&mut self, name: &str, date: &str, base_score: i64) -> Result<Entry, AppError>;

    fn update_entry(&mut self, entry: &Entry) -> Result<(), AppError>;

    fn delete_entry(&mut self, id: u64) -> Result<(), AppError>;
}

impl UserData {
    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Updates the score of the template named `name`, or creates it.
    pub fn upsert_template(&mut self, name: &str, score: i64) -> CustomTemplate {
        if let Some(existing) = self.templates.iter_mut().find(|t| t.name == name) {
            existing.score = score;
            return existing.clone();
        }
        let template = CustomTemplate {
            id: self.allocate_id(),
            name: name.to_string(),
            score,
        };
        self.templates.push(template.clone());
        template
    }
}

impl EntryStore for UserData {
    fn list_entries(&self) -> Result<Vec<Entry>, AppError> {
        Ok(self.entries.clone())
    }

    fn entries_by_date_range(&self, start: &str, end: &str) -> Result<Vec<Entry>, AppError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.date.as_str() >= start && entry.date.as_str() <= end)
            .cloned()
            .collect())
    }

    fn get_entry(&self, id: u64) -> Result<Entry, AppError> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("entry {id} not found")))
    }

    fn add_entry(&mut self, name: &str, date: &str, base_score: i64) -> Result<Entry, AppError> {
        let entry = Entry::new(self.allocate_id(), name, date, base_score);
        self.entries.push(entry.clone());
        Ok(entry)
    }

    fn update_entry(&mut self, entry: &Entry) -> Result<(), AppError> {
        let slot = self
            .entries
            .iter_mut()
            .find(|existing| existing.id == entry.id)
            .ok_or_else(|| AppError::not_found(format!("entry {} not found", entry.id)))?;
        *slot = entry.clone();
        Ok(())
    }

    fn delete_entry(&mut self, id: u64) -> Result<(), AppError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return Err(AppError::not_found(format!("entry {id} not found")));
        }
        Ok(())
    }
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
