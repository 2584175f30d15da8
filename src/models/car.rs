use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_FUEL: &str = "electric";
pub const DEFAULT_TRANSMISSION: &str = "auto";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub start: i64,
    pub end: i64,
    pub description: String,
}

impl Trip {
    pub fn new(id: i64, draft: TripDraft) -> Self {
        Self {
            id,
            start: draft.start,
            end: draft.end,
            description: draft.description,
        }
    }

    pub fn apply(&mut self, draft: TripDraft) {
        self.start = draft.start;
        self.end = draft.end;
        self.description = draft.description;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub size: String,
    #[serde(default = "default_fuel")]
    pub fuel: String,
    pub doors: i64,
    #[serde(default = "default_transmission")]
    pub transmission: String,
    #[serde(default)]
    pub trips: Vec<Trip>,
}

impl Car {
    pub fn new(id: i64, draft: CarDraft) -> Result<Self, AppError> {
        draft.validate()?;
        Ok(Self {
            id,
            size: draft.size,
            fuel: draft.fuel.unwrap_or_else(|| DEFAULT_FUEL.to_string()),
            doors: draft.doors,
            transmission: draft
                .transmission
                .unwrap_or_else(|| DEFAULT_TRANSMISSION.to_string()),
            trips: Vec::new(),
        })
    }

    // Full replace of the mutable field set; id and trips stay as they are.
    pub fn apply(&mut self, draft: CarDraft) -> Result<(), AppError> {
        draft.validate()?;
        self.size = draft.size;
        self.fuel = draft.fuel.unwrap_or_else(|| DEFAULT_FUEL.to_string());
        self.doors = draft.doors;
        self.transmission = draft
            .transmission
            .unwrap_or_else(|| DEFAULT_TRANSMISSION.to_string());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.size.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "car {}: size must not be empty",
                self.id
            )));
        }
        if self.doors < 0 {
            return Err(AppError::Validation(format!(
                "car {}: doors must not be negative",
                self.id
            )));
        }
        Ok(())
    }

    pub fn next_trip_id(&self) -> i64 {
        self.trips.last().map_or(1, |trip| trip.id + 1)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CarDraft {
    pub size: String,
    #[serde(default)]
    pub fuel: Option<String>,
    pub doors: i64,
    #[serde(default)]
    pub transmission: Option<String>,
}

impl CarDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.size.trim().is_empty() {
            return Err(AppError::Validation("size must not be empty".into()));
        }
        if self.doors < 0 {
            return Err(AppError::Validation("doors must not be negative".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TripDraft {
    pub start: i64,
    pub end: i64,
    pub description: String,
}

fn default_fuel() -> String {
    DEFAULT_FUEL.to_string()
}

fn default_transmission() -> String {
    DEFAULT_TRANSMISSION.to_string()
}
