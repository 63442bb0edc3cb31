use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::models::itinerary::{Activity, DailyPlan, FlightPair, Hotel};
use crate::services::providers::{ProviderAdapter, ProviderError};

const MESSAGES_PATH: &str = "/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 3000;

/// Itinerary components generated by the Anthropic Messages API.
///
/// Every fetch sends one prompt asking for pure JSON, strips any Markdown
/// code fences from the reply and parses it into the typed records. The
/// model's arithmetic is never trusted: hotel totals and daily costs are
/// recomputed after parsing.
pub struct AnthropicProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl AnthropicProvider {
    pub fn new(api_key: String, model: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    async fn complete(&self, prompt: String) -> Result<String, ProviderError> {
        let request = MessagesRequest {
            model: &self.model,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}{}", self.api_base, MESSAGES_PATH))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: MessagesResponse = response
            .json()
            .await
            .map_err(|err| ProviderError::Parse(err.to_string()))?;

        let text: String = body
            .content
            .iter()
            .filter_map(|block| block.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse);
        }

        Ok(text)
    }

    fn flights_prompt(
        &self,
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: i64,
    ) -> String {
        format!(
            r#"You are a travel research assistant. Find realistic round-trip flights to {destination}, departing {start_date} and returning {end_date}, with both legs together costing at most {budget}.

Return ONLY a JSON object, no prose:
{{
  "outbound": {{"airline": "Carrier FL-123", "departure": "{start_date} 08:30 AM", "arrival": "{start_date} 11:45 AM", "price": <number>, "duration": "3h 15m"}},
  "return": {{"airline": "Carrier FL-456", "departure": "{end_date} 06:15 PM", "arrival": "{end_date} 09:30 PM", "price": <number>, "duration": "3h 15m"}}
}}"#
        )
    }

    fn hotel_prompt(
        &self,
        destination: &str,
        nights: i64,
        budget: i64,
        interests: &[String],
    ) -> String {
        format!(
            r#"You are a travel research assistant. Recommend one hotel in {destination} for {nights} night(s) within a total budget of {budget}.
Traveler interests: {interests}.

Return ONLY a JSON object, no prose:
{{
  "name": "Hotel Name",
  "rating": 4.5,
  "pricePerNight": <number>,
  "amenities": ["Free WiFi", "Breakfast Included"],
  "distance": "2.5 km from city center"
}}"#,
            interests = interests.join(", "),
        )
    }

    fn activities_prompt(
        &self,
        destination: &str,
        days: u32,
        interests: &[String],
        per_day_budget: i64,
    ) -> String {
        format!(
            r#"You are a creative travel content generator. Create a {days}-day itinerary for {destination}.

Traveler Interests: {interests}
Budget per day: {per_day_budget}
Activities per day: 3

For each day, create 3 diverse activities with:
- Morning (9 AM), Afternoon (1 PM), Evening (5 PM) activities
- Mix of free/paid activities
- Engaging descriptions (20-30 words)
- Realistic prices
- Durations (1-4 hours)
- High ratings (4.5-4.9)

Return ONLY a JSON array of {days} days:
[
  {{
    "day": 1,
    "activities": [
      {{
        "name": "Activity Name",
        "desc": "Engaging description...",
        "price": <number>,
        "duration": "X hours",
        "rating": 4.7,
        "time": "9:00 AM"
      }}
    ]
  }}
]"#,
            interests = interests.join(", "),
        )
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn is_ready(&self) -> bool {
        true
    }

    async fn fetch_flights(
        &self,
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: i64,
    ) -> Result<FlightPair, ProviderError> {
        let prompt = self.flights_prompt(destination, start_date, end_date, budget);
        let text = self.complete(prompt).await?;
        parse_json_payload::<FlightPair>(&text)
    }

    async fn fetch_hotel(
        &self,
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: i64,
        interests: &[String],
    ) -> Result<Hotel, ProviderError> {
        let nights = (end_date - start_date).num_days().max(1);
        let prompt = self.hotel_prompt(destination, nights, budget, interests);
        let text = self.complete(prompt).await?;

        let raw = parse_json_payload::<RawHotel>(&text)?;
        Ok(raw.into_hotel(nights))
    }

    async fn fetch_activity_candidates(
        &self,
        destination: &str,
        start_date: NaiveDate,
        days: u32,
        interests: &[String],
        budget: i64,
    ) -> Result<Vec<DailyPlan>, ProviderError> {
        let per_day_budget = budget / days.max(1) as i64;
        let prompt = self.activities_prompt(destination, days, interests, per_day_budget);
        let text = self.complete(prompt).await?;

        let raw = parse_json_payload::<Vec<RawDayPlan>>(&text)?;
        Ok(normalize_daily_plans(raw, start_date))
    }
}

/// Strip a single surrounding Markdown code fence, if present.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_json_payload<T: DeserializeOwned>(raw: &str) -> Result<T, ProviderError> {
    serde_json::from_str(strip_code_fences(raw)).map_err(|err| ProviderError::Parse(err.to_string()))
}

/// Re-index, date and cost the model's day groups. Day numbers and costs
/// from the model are ignored; dates are derived from the trip start.
fn normalize_daily_plans(raw: Vec<RawDayPlan>, start_date: NaiveDate) -> Vec<DailyPlan> {
    raw.into_iter()
        .enumerate()
        .map(|(i, day)| {
            let date = start_date + Duration::days(i as i64);
            DailyPlan::new(i as u32 + 1, date.format("%b %d").to_string(), day.activities)
        })
        .collect()
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Hotel as the model returns it: totals and night counts are advisory
/// only and recomputed locally.
#[derive(Deserialize)]
struct RawHotel {
    name: String,
    rating: f32,
    #[serde(rename = "pricePerNight")]
    price_per_night: i64,
    #[serde(default)]
    amenities: Vec<String>,
    #[serde(default)]
    distance: String,
}

impl RawHotel {
    fn into_hotel(self, nights: i64) -> Hotel {
        Hotel::new(
            self.name,
            self.rating,
            self.price_per_night,
            nights,
            self.amenities,
            self.distance,
        )
    }
}

#[derive(Deserialize)]
struct RawDayPlan {
    #[serde(default)]
    activities: Vec<Activity>,
}
