use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::{error::AppError, models::car::Car};

#[derive(Clone)]
pub struct StorageService {
    path: Arc<PathBuf>,
}

impl StorageService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load_cars(&self) -> Result<Vec<Car>, AppError> {
        let raw = fs::read(self.path())
            .await
            .with_context(|| format!("read {}", self.path().display()))
            .map_err(AppError::Storage)?;
        let cars: Vec<Car> = serde_json::from_slice(&raw)
            .with_context(|| format!("parse {}", self.path().display()))
            .map_err(AppError::Storage)?;
        for car in &cars {
            if let Err(err) = car.validate() {
                return Err(AppError::Storage(anyhow::anyhow!(
                    "invalid record in {}: {err}",
                    self.path().display()
                )));
            }
        }
        Ok(cars)
    }

    // A later load sees either the old or the new complete collection,
    // never a partially written file.
    pub async fn save_cars(&self, cars: &[Car]) -> Result<(), AppError> {
        let data = serde_json::to_vec_pretty(cars)
            .context("serialize car collection")
            .map_err(AppError::Storage)?;

        let temp = self.temp_path();
        {
            let mut file = fs::File::create(&temp)
                .await
                .with_context(|| format!("create {}", temp.display()))
                .map_err(AppError::Storage)?;
            file.write_all(&data)
                .await
                .with_context(|| format!("write {}", temp.display()))
                .map_err(AppError::Storage)?;
            file.sync_all()
                .await
                .with_context(|| format!("sync {}", temp.display()))
                .map_err(AppError::Storage)?;
        }
        fs::rename(&temp, self.path())
            .await
            .with_context(|| format!("replace {}", self.path().display()))
            .map_err(AppError::Storage)?;

        debug!(path = %self.path().display(), cars = cars.len(), "collection saved");
        Ok(())
    }

    // Sibling of the target so the rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path()
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "cars.json".into());
        name.push(".tmp");
        self.path().with_file_name(name)
    }
}
