use serde::{Deserialize, Serialize};

/// One-way flight leg.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Flight {
    pub airline: String,
    pub departure: String,
    pub arrival: String,
    pub price: i64,
    pub duration: String,
}

/// Outbound and return legs of a round trip.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FlightPair {
    pub outbound: Flight,
    #[serde(rename = "return")]
    pub return_flight: Flight,
}

impl FlightPair {
    pub fn total_price(&self) -> i64 {
        self.outbound.price + self.return_flight.price
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Hotel {
    pub name: String,
    pub rating: f32,
    #[serde(rename = "pricePerNight")]
    pub price_per_night: i64,
    #[serde(rename = "totalPrice")]
    pub total_price: i64,
    pub amenities: Vec<String>,
    pub distance: String,
    pub nights: i64,
}

impl Hotel {
    /// Build a hotel record with a derived total.
    ///
    /// `total_price` is always `price_per_night * nights`; upstream-supplied
    /// totals are never trusted. Nights are clamped to at least one.
    pub fn new(
        name: String,
        rating: f32,
        price_per_night: i64,
        nights: i64,
        amenities: Vec<String>,
        distance: String,
    ) -> Self {
        let nights = nights.max(1);
        Self {
            name,
            rating,
            price_per_night,
            total_price: price_per_night * nights,
            amenities,
            distance,
            nights,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub price: i64,
    pub duration: String,
    pub rating: f32,
    pub time: String,
}

/// One day of the trip: its activities and their summed cost.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DailyPlan {
    pub day: u32,
    pub date: String,
    pub activities: Vec<Activity>,
    #[serde(rename = "totalCost")]
    pub total_cost: i64,
}

impl DailyPlan {
    pub fn new(day: u32, date: String, activities: Vec<Activity>) -> Self {
        let mut plan = Self {
            day,
            date,
            activities,
            total_cost: 0,
        };
        plan.recompute_total();
        plan
    }

    /// Re-derive `total_cost` from the activity list. Called whenever the
    /// list changes; the stored value is never accepted from upstream.
    pub fn recompute_total(&mut self) {
        self.total_cost = self.activities.iter().map(|a| a.price).sum();
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct BudgetBreakdown {
    pub total: i64,
    pub flights: i64,
    pub hotel: i64,
    pub activities: i64,
    pub remaining: i64,
}

impl BudgetBreakdown {
    /// `remaining` may go negative; validation reports it, the pipeline
    /// still returns the itinerary.
    pub fn new(total: i64, flights: i64, hotel: i64, activities: i64) -> Self {
        Self {
            total,
            flights,
            hotel,
            activities,
            remaining: total - (flights + hotel + activities),
        }
    }
}

/// The fully assembled trip plan returned to the caller.
///
/// Constructed once per request and not modified after validation. The
/// component fields are optional so the validator can report on partially
/// assembled itineraries; the orchestrator always fills them.
#[derive(Debug, Serialize, Clone)]
pub struct Itinerary {
    pub destination: String,
    pub days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flights: Option<FlightPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Hotel>,
    #[serde(rename = "dailyPlans")]
    pub daily_plans: Vec<DailyPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetBreakdown>,
}
