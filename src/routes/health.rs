use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;

use crate::services::providers::{ProviderAdapter, ProviderConfig};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    / (service banner)
*/
pub async fn api_info(provider: web::Data<Arc<dyn ProviderAdapter>>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "AI Trip Planner API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "provider": provider.name(),
        "mock_mode": !provider.is_ready(),
    }))
}

/*
    /health
*/
pub async fn health_check(provider: web::Data<Arc<dyn ProviderAdapter>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let provider_result = check_provider(provider.get_ref().as_ref());
    health
        .services
        .insert("provider".to_string(), provider_result.clone());

    // Serving fallback data is not an outage, but callers should know the
    // itineraries are canned.
    if provider_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_provider(provider: &dyn ProviderAdapter) -> ServiceStatus {
    let config = ProviderConfig::from_env();

    if !config.is_configured() || !provider.is_ready() {
        return ServiceStatus {
            status: "fallback".to_string(),
            details: Some(format!(
                "ANTHROPIC_API_KEY not configured; serving deterministic data via {} provider",
                provider.name()
            )),
        };
    }

    let key = config.api_key.unwrap_or_default();
    let masked_key = if key.len() > 8 {
        format!("{}***{}", &key[0..4], &key[key.len() - 4..])
    } else {
        "***".to_string()
    };

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!(
            "Anthropic API key configured ({}), model {}",
            masked_key, config.model
        )),
    }
}
