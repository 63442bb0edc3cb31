use async_trait::async_trait;
use chrono::{Duration, NaiveDate};

use crate::models::itinerary::{Activity, DailyPlan, Flight, FlightPair, Hotel};
use crate::services::providers::{ProviderAdapter, ProviderError};

const TIME_SLOTS: [&str; 3] = ["9:00 AM", "1:00 PM", "5:00 PM"];

const BEACH_HOTELS: [&str; 3] = ["Seaside Paradise Resort", "Ocean Breeze Hotel", "Coastal Haven"];
const HERITAGE_HOTELS: [&str; 3] = ["Heritage Grand Palace", "Royal Residency", "Historic Manor"];

struct ActivityTemplate {
    name: &'static str,
    description: &'static str,
    price: i64,
    duration: &'static str,
    rating: f32,
}

/// Placeholder data source used when no model credential is configured.
///
/// Output is a pure function of the request, so repeated calls return
/// identical itineraries. None of the fetches can fail.
#[derive(Default)]
pub struct DeterministicProvider;

impl DeterministicProvider {
    pub fn new() -> Self {
        Self
    }

    fn templates_for(interest: &str) -> &'static [ActivityTemplate; 3] {
        match interest.to_lowercase().as_str() {
            "beach" => &BEACH_ACTIVITIES,
            "food" => &FOOD_ACTIVITIES,
            "history" => &HISTORY_ACTIVITIES,
            "adventure" => &ADVENTURE_ACTIVITIES,
            "shopping" => &SHOPPING_ACTIVITIES,
            "nature" => &NATURE_ACTIVITIES,
            "nightlife" => &NIGHTLIFE_ACTIVITIES,
            _ => &CULTURE_ACTIVITIES,
        }
    }
}

#[async_trait]
impl ProviderAdapter for DeterministicProvider {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    fn is_ready(&self) -> bool {
        false
    }

    async fn fetch_flights(
        &self,
        _destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: i64,
    ) -> Result<FlightPair, ProviderError> {
        // Split the flight budget evenly across the two legs.
        let leg_price = budget / 2;

        Ok(FlightPair {
            outbound: Flight {
                airline: "IndiGo 6E-2345".to_string(),
                departure: format!("{} 08:30 AM", start_date.format("%Y-%m-%d")),
                arrival: format!("{} 11:45 AM", start_date.format("%Y-%m-%d")),
                price: leg_price,
                duration: "3h 15m".to_string(),
            },
            return_flight: Flight {
                airline: "SpiceJet SG-8732".to_string(),
                departure: format!("{} 06:15 PM", end_date.format("%Y-%m-%d")),
                arrival: format!("{} 09:30 PM", end_date.format("%Y-%m-%d")),
                price: leg_price,
                duration: "3h 15m".to_string(),
            },
        })
    }

    async fn fetch_hotel(
        &self,
        _destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: i64,
        interests: &[String],
    ) -> Result<Hotel, ProviderError> {
        let nights = (end_date - start_date).num_days().max(1);

        let beach_trip = interests
            .iter()
            .any(|interest| interest.eq_ignore_ascii_case("beach"));
        let name = if beach_trip {
            BEACH_HOTELS[0]
        } else {
            HERITAGE_HOTELS[0]
        };

        Ok(Hotel::new(
            name.to_string(),
            4.5,
            budget / nights,
            nights,
            vec![
                "Free WiFi".to_string(),
                "Breakfast Included".to_string(),
                "Swimming Pool".to_string(),
                "Spa & Wellness".to_string(),
            ],
            "2.5 km from city center".to_string(),
        ))
    }

    async fn fetch_activity_candidates(
        &self,
        _destination: &str,
        start_date: NaiveDate,
        days: u32,
        interests: &[String],
        budget: i64,
    ) -> Result<Vec<DailyPlan>, ProviderError> {
        let per_day_budget = budget / days.max(1) as i64;

        let default_interests = ["Culture".to_string(), "Food".to_string()];
        let relevant: &[String] = if interests.is_empty() {
            &default_interests
        } else {
            interests
        };

        let mut daily_plans = Vec::with_capacity(days as usize);
        for day in 1..=days {
            let mut activities = Vec::new();
            let mut day_spent = 0;

            // Cycle interests across the morning/afternoon/evening slots,
            // stopping within a day once the next pick would blow its share
            // of the budget.
            for (slot, time) in TIME_SLOTS.iter().enumerate() {
                let interest = &relevant[slot % relevant.len()];
                let templates = Self::templates_for(interest);
                let template = &templates[slot % templates.len()];

                if day_spent + template.price <= per_day_budget {
                    activities.push(Activity {
                        name: template.name.to_string(),
                        description: template.description.to_string(),
                        price: template.price,
                        duration: template.duration.to_string(),
                        rating: template.rating,
                        time: time.to_string(),
                    });
                    day_spent += template.price;
                }
            }

            let date = start_date + Duration::days(day as i64 - 1);
            daily_plans.push(DailyPlan::new(
                day,
                date.format("%b %d").to_string(),
                activities,
            ));
        }

        Ok(daily_plans)
    }
}

const BEACH_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Beach Parasailing",
        description: "Soar high above crystal-clear waters with breathtaking coastal views",
        price: 2500,
        duration: "2 hours",
        rating: 4.7,
    },
    ActivityTemplate {
        name: "Sunset Beach Walk",
        description: "Romantic stroll along pristine shoreline as the sun sets",
        price: 0,
        duration: "1.5 hours",
        rating: 4.8,
    },
    ActivityTemplate {
        name: "Beach Volleyball",
        description: "Join locals for energetic beach sports and fun",
        price: 300,
        duration: "2 hours",
        rating: 4.6,
    },
];

const FOOD_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Street Food Tour",
        description: "Culinary adventure through bustling local markets",
        price: 800,
        duration: "3 hours",
        rating: 4.6,
    },
    ActivityTemplate {
        name: "Cooking Class",
        description: "Learn traditional dishes from expert local chefs",
        price: 2000,
        duration: "4 hours",
        rating: 4.7,
    },
    ActivityTemplate {
        name: "Fine Dining",
        description: "Exquisite multi-course meal at renowned restaurant",
        price: 3000,
        duration: "2 hours",
        rating: 4.8,
    },
];

const HISTORY_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Fort Tour",
        description: "Explore ancient fortifications with rich historical significance",
        price: 500,
        duration: "3 hours",
        rating: 4.8,
    },
    ActivityTemplate {
        name: "Museum Visit",
        description: "Discover fascinating artifacts chronicling regional heritage",
        price: 300,
        duration: "2 hours",
        rating: 4.5,
    },
    ActivityTemplate {
        name: "Heritage Walk",
        description: "Wander historic neighborhoods with knowledgeable guide",
        price: 400,
        duration: "2.5 hours",
        rating: 4.7,
    },
];

const CULTURE_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Traditional Dance Show",
        description: "Mesmerizing classical dance performance",
        price: 800,
        duration: "2 hours",
        rating: 4.6,
    },
    ActivityTemplate {
        name: "Temple Visit",
        description: "Experience spiritual serenity at ornate temples",
        price: 0,
        duration: "2 hours",
        rating: 4.7,
    },
    ActivityTemplate {
        name: "Local Market Tour",
        description: "Vibrant markets brimming with handicrafts",
        price: 200,
        duration: "2.5 hours",
        rating: 4.5,
    },
];

const ADVENTURE_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Zip Lining",
        description: "Adrenaline rush through lush canopies",
        price: 1500,
        duration: "2 hours",
        rating: 4.7,
    },
    ActivityTemplate {
        name: "ATV Safari",
        description: "Navigate rugged terrain on all-terrain vehicle",
        price: 2500,
        duration: "3 hours",
        rating: 4.6,
    },
    ActivityTemplate {
        name: "Rock Climbing",
        description: "Challenge yourself with guided climbing",
        price: 2000,
        duration: "4 hours",
        rating: 4.5,
    },
];

const SHOPPING_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Handicraft Market",
        description: "Browse authentic handmade items from local artisans",
        price: 1000,
        duration: "2 hours",
        rating: 4.4,
    },
    ActivityTemplate {
        name: "Mall Shopping",
        description: "Explore modern shopping complexes",
        price: 2000,
        duration: "3 hours",
        rating: 4.3,
    },
    ActivityTemplate {
        name: "Bazaar Experience",
        description: "Navigate colorful traditional bazaars",
        price: 800,
        duration: "2.5 hours",
        rating: 4.6,
    },
];

const NATURE_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Nature Trek",
        description: "Hike through pristine natural landscapes",
        price: 600,
        duration: "4 hours",
        rating: 4.8,
    },
    ActivityTemplate {
        name: "Bird Watching",
        description: "Observe diverse bird species with expert guides",
        price: 800,
        duration: "3 hours",
        rating: 4.5,
    },
    ActivityTemplate {
        name: "Botanical Garden",
        description: "Stroll through beautifully landscaped gardens",
        price: 200,
        duration: "2 hours",
        rating: 4.6,
    },
];

const NIGHTLIFE_ACTIVITIES: [ActivityTemplate; 3] = [
    ActivityTemplate {
        name: "Rooftop Bar",
        description: "Sip cocktails under the stars with city views",
        price: 1500,
        duration: "2 hours",
        rating: 4.5,
    },
    ActivityTemplate {
        name: "Live Music Venue",
        description: "Enjoy electrifying performances by talented musicians",
        price: 1000,
        duration: "3 hours",
        rating: 4.6,
    },
    ActivityTemplate {
        name: "Night Market",
        description: "Experience vibrant energy of night markets",
        price: 500,
        duration: "2 hours",
        rating: 4.7,
    },
];
