use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::models::trip::TripRequest;
use crate::services::itinerary_generation_service::{GenerationError, ItineraryGenerator};
use crate::services::providers::ProviderAdapter;

/*
    /api/generate-itinerary
*/
pub async fn generate(
    provider: web::Data<Arc<dyn ProviderAdapter>>,
    input: web::Json<TripRequest>,
) -> impl Responder {
    let request = input.into_inner();
    let generator = ItineraryGenerator::new(provider.get_ref().clone());

    match generator.generate(&request).await {
        Ok(outcome) => HttpResponse::Ok().json(json!({
            "success": true,
            "itinerary": outcome.itinerary,
            "agent_logs": outcome.agent_logs,
            "verification": outcome.verification,
        })),
        Err(failure) => {
            eprintln!("Failed to generate itinerary: {}", failure.error);

            match &failure.error {
                GenerationError::InvalidRequest(err) => HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "error": err.to_string(),
                    "agent_logs": failure.agent_logs,
                })),
                GenerationError::Provider { .. } => {
                    HttpResponse::InternalServerError().json(json!({
                        "success": false,
                        "error": format!("Failed to generate itinerary: {}", failure.error),
                        "agent_logs": failure.agent_logs,
                    }))
                }
            }
        }
    }
}
