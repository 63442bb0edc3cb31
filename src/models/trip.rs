use std::error::Error;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_TRIP_DAYS: i64 = 30;

/// Incoming request body for itinerary generation.
///
/// Dates use the `%Y-%m-%d` wire format and budget is expressed in whole
/// currency units.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: i64,
    pub travelers: u32,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    EndBeforeStart,
    TripTooLong(i64),
    NonPositiveBudget(i64),
    NoTravelers,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::EndBeforeStart => write!(f, "End date must be after start date"),
            RequestError::TripTooLong(_) => {
                write!(f, "Maximum trip duration is {} days", MAX_TRIP_DAYS)
            }
            RequestError::NonPositiveBudget(budget) => {
                write!(f, "Budget must be a positive amount, got {}", budget)
            }
            RequestError::NoTravelers => write!(f, "At least one traveler is required"),
        }
    }
}

impl Error for RequestError {}

impl TripRequest {
    /// Trip length in days, both endpoints inclusive.
    pub fn trip_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Validate the request and return the trip length.
    ///
    /// Runs before any provider call so a bad request never triggers
    /// outbound fetches.
    pub fn validate(&self) -> Result<u32, RequestError> {
        let days = self.trip_days();
        if days < 1 {
            return Err(RequestError::EndBeforeStart);
        }
        if days > MAX_TRIP_DAYS {
            return Err(RequestError::TripTooLong(days));
        }
        if self.budget <= 0 {
            return Err(RequestError::NonPositiveBudget(self.budget));
        }
        if self.travelers == 0 {
            return Err(RequestError::NoTravelers);
        }
        Ok(days as u32)
    }
}
