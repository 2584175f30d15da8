use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::{
    error::AppError,
    models::car::{Car, CarDraft, Trip, TripDraft},
    services::storage::StorageService,
};

#[derive(Debug, Clone, Default)]
pub struct CarFilter {
    pub size: Option<String>,
    pub min_doors: Option<i64>,
}

/// The single in-memory authority for the fleet. Every mutation holds the
/// write lock across mutate-then-save, so a failed save leaves the in-memory
/// collection ahead of the file until the next save succeeds.
#[derive(Clone)]
pub struct CarStore {
    cars: Arc<RwLock<Vec<Car>>>,
    storage: StorageService,
}

impl CarStore {
    pub async fn open(storage: StorageService) -> Result<Self, AppError> {
        let cars = storage.load_cars().await?;
        info!(cars = cars.len(), "car collection loaded");
        Ok(Self {
            cars: Arc::new(RwLock::new(cars)),
            storage,
        })
    }

    pub async fn list_cars(&self, filter: &CarFilter) -> Vec<Car> {
        let cars = self.cars.read().await;
        cars.iter()
            .filter(|car| filter.size.as_deref().map_or(true, |size| car.size == size))
            .filter(|car| filter.min_doors.map_or(true, |min| car.doors >= min))
            .cloned()
            .collect()
    }

    pub async fn get_car(&self, id: i64) -> Result<Car, AppError> {
        let cars = self.cars.read().await;
        cars.iter()
            .find(|car| car.id == id)
            .cloned()
            .ok_or(AppError::CarNotFound(id))
    }

    pub async fn create_car(&self, draft: CarDraft) -> Result<Car, AppError> {
        let mut cars = self.cars.write().await;
        let id = cars.last().map_or(1, |car| car.id + 1);
        let car = Car::new(id, draft)?;
        cars.push(car.clone());
        self.storage.save_cars(&cars).await?;
        Ok(car)
    }

    pub async fn update_car(&self, id: i64, draft: CarDraft) -> Result<Car, AppError> {
        let mut cars = self.cars.write().await;
        let car = cars
            .iter_mut()
            .find(|car| car.id == id)
            .ok_or(AppError::CarNotFound(id))?;
        car.apply(draft)?;
        let updated = car.clone();
        self.storage.save_cars(&cars).await?;
        Ok(updated)
    }

    pub async fn delete_car(&self, id: i64) -> Result<(), AppError> {
        let mut cars = self.cars.write().await;
        let index = cars
            .iter()
            .position(|car| car.id == id)
            .ok_or(AppError::CarNotFound(id))?;
        cars.remove(index);
        self.storage.save_cars(&cars).await?;
        Ok(())
    }

    pub async fn add_trip(&self, car_id: i64, draft: TripDraft) -> Result<Car, AppError> {
        let mut cars = self.cars.write().await;
        let car = cars
            .iter_mut()
            .find(|car| car.id == car_id)
            .ok_or(AppError::CarNotFound(car_id))?;
        let trip = Trip::new(car.next_trip_id(), draft);
        car.trips.push(trip);
        let updated = car.clone();
        self.storage.save_cars(&cars).await?;
        Ok(updated)
    }

    pub async fn update_trip(
        &self,
        car_id: i64,
        trip_id: i64,
        draft: TripDraft,
    ) -> Result<Car, AppError> {
        let mut cars = self.cars.write().await;
        let car = cars
            .iter_mut()
            .find(|car| car.id == car_id)
            .ok_or(AppError::CarNotFound(car_id))?;
        let trip = car
            .trips
            .iter_mut()
            .find(|trip| trip.id == trip_id)
            .ok_or(AppError::TripNotFound { car_id, trip_id })?;
        trip.apply(draft);
        let updated = car.clone();
        self.storage.save_cars(&cars).await?;
        Ok(updated)
    }

    pub async fn remove_trip(&self, car_id: i64, trip_id: i64) -> Result<(), AppError> {
        let mut cars = self.cars.write().await;
        let car = cars
            .iter_mut()
            .find(|car| car.id == car_id)
            .ok_or(AppError::CarNotFound(car_id))?;
        let index = car
            .trips
            .iter()
            .position(|trip| trip.id == trip_id)
            .ok_or(AppError::TripNotFound { car_id, trip_id })?;
        car.trips.remove(index);
        self.storage.save_cars(&cars).await?;
        Ok(())
    }
}
