use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::models::agent_log::{AgentLogEntry, ExecutionLog, LogStatus};
use crate::models::itinerary::{BudgetBreakdown, Itinerary};
use crate::models::trip::{RequestError, TripRequest};
use crate::services::activity_scorer::ActivityScorer;
use crate::services::budget_allocator::BudgetAllocator;
use crate::services::itinerary_validator::{ItineraryValidator, Verification};
use crate::services::providers::{ProviderAdapter, ProviderError};

const MAX_ACTIVITIES_PER_DAY: usize = 3;

#[derive(Debug)]
pub enum GenerationError {
    InvalidRequest(RequestError),
    Provider {
        stage: &'static str,
        source: ProviderError,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidRequest(err) => write!(f, "{}", err),
            GenerationError::Provider { stage, source } => {
                write!(f, "{} failed: {}", stage, source)
            }
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GenerationError::InvalidRequest(err) => Some(err),
            GenerationError::Provider { source, .. } => Some(source),
        }
    }
}

/// A failed pipeline run: the error plus the log as it stood when the
/// pipeline stopped, so callers can still show per-stage progress.
#[derive(Debug)]
pub struct GenerationFailure {
    pub error: GenerationError,
    pub agent_logs: Vec<AgentLogEntry>,
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl Error for GenerationFailure {}

/// A successful pipeline run.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub itinerary: Itinerary,
    pub agent_logs: Vec<AgentLogEntry>,
    pub verification: Verification,
}

/// Drives the generation pipeline: allocate budget, fetch flights, hotel
/// and activity candidates from the provider, score and trim activities,
/// recompute realized costs, then validate the assembled itinerary.
///
/// Stages run strictly sequentially; each consumes the previous stage's
/// output. The orchestrator never retries or substitutes data; fallback
/// behavior lives entirely behind the provider boundary.
pub struct ItineraryGenerator {
    provider: Arc<dyn ProviderAdapter>,
    scorer: ActivityScorer,
}

impl ItineraryGenerator {
    pub fn new(provider: Arc<dyn ProviderAdapter>) -> Self {
        Self {
            provider,
            scorer: ActivityScorer::new(),
        }
    }

    pub fn with_scorer(provider: Arc<dyn ProviderAdapter>, scorer: ActivityScorer) -> Self {
        Self { provider, scorer }
    }

    pub async fn generate(
        &self,
        request: &TripRequest,
    ) -> Result<GenerationOutcome, GenerationFailure> {
        let mut log = ExecutionLog::new();

        // Fail fast on bad input: no provider call has happened yet.
        let days = match request.validate() {
            Ok(days) => days,
            Err(err) => {
                log.push("System", format!("Error: {}", err), LogStatus::Error);
                return Err(GenerationFailure {
                    error: GenerationError::InvalidRequest(err),
                    agent_logs: log.into_entries(),
                });
            }
        };

        // Step 1: budget allocation
        log.begin(
            "Optimizer Agent",
            "Analyzing budget and optimizing allocation...",
        );
        let allocation = BudgetAllocator::allocate(request.budget);
        log.complete();

        // Step 2: flights
        log.begin(
            "Research Agent",
            format!("Finding best flight options to {}...", request.destination),
        );
        let flights = match self
            .provider
            .fetch_flights(
                &request.destination,
                request.start_date,
                request.end_date,
                allocation.flights,
            )
            .await
        {
            Ok(flights) => flights,
            Err(err) => return Err(provider_failure(log, "Flight search", err)),
        };
        log.complete();

        // Step 3: hotel
        log.begin("Research Agent", "Searching for perfect accommodation...");
        let hotel = match self
            .provider
            .fetch_hotel(
                &request.destination,
                request.start_date,
                request.end_date,
                allocation.hotel,
                &request.interests,
            )
            .await
        {
            Ok(hotel) => hotel,
            Err(err) => return Err(provider_failure(log, "Hotel search", err)),
        };
        log.complete();

        // Step 4: activity candidates, pre-grouped by day
        log.begin(
            "Content Generator",
            "Creating personalized activity recommendations...",
        );
        let mut daily_plans = match self
            .provider
            .fetch_activity_candidates(
                &request.destination,
                request.start_date,
                days,
                &request.interests,
                allocation.activities,
            )
            .await
        {
            Ok(plans) => plans,
            Err(err) => return Err(provider_failure(log, "Activity generation", err)),
        };
        log.complete();

        // Step 5: rank candidates per day, keep the top picks, re-derive
        // each day's spend.
        log.begin(
            "Optimizer Agent",
            "Optimizing activities based on your preferences...",
        );
        let per_day_budget = allocation.activities / days as i64;
        for plan in &mut daily_plans {
            let candidates = std::mem::take(&mut plan.activities);
            plan.activities = self
                .scorer
                .rank(candidates, &request.interests, per_day_budget)
                .into_iter()
                .take(MAX_ACTIVITIES_PER_DAY)
                .collect();
            plan.recompute_total();
        }
        log.complete();

        // Step 6: realized costs, recomputed from the assembled parts
        let flight_cost = flights.total_price();
        let hotel_cost = hotel.total_price;
        let activity_cost: i64 = daily_plans.iter().map(|plan| plan.total_cost).sum();

        let itinerary = Itinerary {
            destination: request.destination.clone(),
            days,
            flights: Some(flights),
            hotel: Some(hotel),
            daily_plans,
            budget: Some(BudgetBreakdown::new(
                request.budget,
                flight_cost,
                hotel_cost,
                activity_cost,
            )),
        };

        // Step 7: quality assurance, reported but never blocking
        log.begin(
            "Quality Assurance",
            "Verifying itinerary quality and budget compliance...",
        );
        let mut verification = ItineraryValidator::verify(&itinerary);
        verification.suggestions =
            ItineraryValidator::suggest_improvements(&itinerary, &verification);

        if verification.checks.all_passed {
            log.complete();
        } else {
            log.warn(&format!(
                " (Quality score: {:.0}%)",
                verification.quality_score
            ));
        }

        log.push(
            "System",
            format!(
                "✨ Your perfect {}-day {} itinerary is ready!",
                days, request.destination
            ),
            LogStatus::Complete,
        );

        Ok(GenerationOutcome {
            itinerary,
            agent_logs: log.into_entries(),
            verification,
        })
    }
}

/// Finalize the in-flight stage as failed and wrap the provider error.
/// The log must never be left claiming a stage is still processing.
fn provider_failure(
    mut log: ExecutionLog,
    stage: &'static str,
    source: ProviderError,
) -> GenerationFailure {
    log.fail();
    log.push("System", format!("Error: {}", source), LogStatus::Error);
    GenerationFailure {
        error: GenerationError::Provider { stage, source },
        agent_logs: log.into_entries(),
    }
}
