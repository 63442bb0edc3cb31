pub mod anthropic;
pub mod fallback;

use std::env;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::itinerary::{DailyPlan, FlightPair, Hotel};

pub use anthropic::AnthropicProvider;
pub use fallback::DeterministicProvider;

#[derive(Debug)]
pub enum ProviderError {
    Http(reqwest::Error),
    Api { status: u16, message: String },
    Parse(String),
    EmptyResponse,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(err) => write!(f, "HTTP error: {}", err),
            ProviderError::Api { status, message } => {
                write!(f, "API error ({}): {}", status, message)
            }
            ProviderError::Parse(msg) => write!(f, "Response parse error: {}", msg),
            ProviderError::EmptyResponse => write!(f, "Model returned no content"),
        }
    }
}

impl Error for ProviderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProviderError::Http(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

/// Source of itinerary components: a generative model or the deterministic
/// fallback generator. The pipeline treats both the same.
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether remote generation is available. False means the service is
    /// serving deterministic placeholder data.
    fn is_ready(&self) -> bool;

    async fn fetch_flights(
        &self,
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: i64,
    ) -> Result<FlightPair, ProviderError>;

    async fn fetch_hotel(
        &self,
        destination: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: i64,
        interests: &[String],
    ) -> Result<Hotel, ProviderError>;

    /// Raw activity candidates, one group per trip day, days contiguous
    /// from 1 and dated from `start_date`.
    async fn fetch_activity_candidates(
        &self,
        destination: &str,
        start_date: NaiveDate,
        days: u32,
        interests: &[String],
        budget: i64,
    ) -> Result<Vec<DailyPlan>, ProviderError>;
}

const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_API_BASE: &str = "https://api.anthropic.com";

// .env templates ship this placeholder; treat it the same as no key.
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl ProviderConfig {
    /// Read provider settings from the environment once at startup.
    pub fn from_env() -> Self {
        let api_key = env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty() && key != PLACEHOLDER_API_KEY);

        Self {
            api_key,
            model: env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            api_base: env::var("ANTHROPIC_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Select the provider implementation once at startup.
pub fn build_provider(config: &ProviderConfig) -> Arc<dyn ProviderAdapter> {
    match &config.api_key {
        Some(api_key) => Arc::new(AnthropicProvider::new(
            api_key.clone(),
            config.model.clone(),
            config.api_base.clone(),
        )),
        None => {
            println!("WARNING: ANTHROPIC_API_KEY not set! Using deterministic fallback data.");
            Arc::new(DeterministicProvider::new())
        }
    }
}
