use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::errors::AppError;
use crate::models::{identifier, intent, EnrichedData, ExtractedIdentifier, Intent};
use crate::services::{compose, enrichment};
use crate::services::compose::Composition;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SupportRequest {
    pub text: Option<String>,
    pub mobile_number: Option<String>,
}

// POST /support
pub async fn support(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SupportRequest>,
) -> Result<Response, AppError> {
    let query = req
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("No text provided".to_string()))?;

    let query_intent = intent::classify(&query);
    let extracted = find_identifier(&query, query_intent, req.mobile_number.as_deref());

    tracing::info!(
        intent = ?query_intent,
        identifier = ?extracted,
        "processing support query"
    );

    let lookup = match &extracted {
        None => None,
        Some(ExtractedIdentifier::OrderId(order_id)) => {
            if !state.config.has_order_credentials() {
                return Err(AppError::Config(
                    "Order service authentication is not properly configured".to_string(),
                ));
            }
            Some(
                enrichment::order_details(state.orders.as_ref(), order_id)
                    .await
                    .map(EnrichedData::Order),
            )
        }
        Some(ExtractedIdentifier::Phone(mobile)) => {
            if !state.config.has_loyalty_credentials() {
                return Err(AppError::Config(
                    "Loyalty service credentials are not properly configured".to_string(),
                ));
            }
            Some(
                enrichment::loyalty_account(state.loyalty.as_ref(), mobile)
                    .await
                    .map(EnrichedData::Loyalty),
            )
        }
    };

    let response = match compose::compose(&query, query_intent, extracted.as_ref(), lookup) {
        Composition::CapabilityMenu => {
            Json(json!({ "message": compose::CAPABILITY_MENU })).into_response()
        }
        Composition::OrderRecord(record) => Json(record).into_response(),
        Composition::CancellationAnswer { order_id, reason } => match reason {
            Some(reason) => Json(json!({
                "cancellationReason": reason,
                "orderId": order_id,
            }))
            .into_response(),
            None => Json(json!({
                "message": format!("Order {order_id} has no cancellation reason on record."),
            }))
            .into_response(),
        },
        Composition::Rendered(text) => Json(json!({ "result": text })).into_response(),
        Composition::Generate(prompt) => {
            if !state.config.has_gemini_key() {
                return Err(AppError::Config("API key not configured".to_string()));
            }
            let generated = state.generation.generate(&prompt).await.map_err(|e| {
                tracing::error!(error = %e, "failed to process support request");
                AppError::Generation("Failed to process support request".to_string())
            })?;
            Json(json!({ "result": generated })).into_response()
        }
        Composition::NotFound(message) => {
            let status = if state.config.not_found_as_error {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::OK
            };
            (status, Json(json!({ "message": message }))).into_response()
        }
        Composition::ProviderFailure => {
            return Err(AppError::Provider(
                compose::PROVIDER_FAILURE_MESSAGE.to_string(),
            ));
        }
    };

    Ok(response)
}

/// Pick the identifier family the intent expects. Order intents only accept
/// an order ID, loyalty intents only a mobile number (falling back to the
/// caller-supplied one); free-form queries take whatever the generic scan
/// finds, order IDs first.
fn find_identifier(
    query: &str,
    query_intent: Intent,
    mobile_number: Option<&str>,
) -> Option<ExtractedIdentifier> {
    // Greetings short-circuit to the capability menu; never look anything up.
    if query_intent == Intent::Greeting {
        return None;
    }
    if query_intent.wants_order() {
        return identifier::extract_order_id(query).map(ExtractedIdentifier::OrderId);
    }
    if query_intent.wants_loyalty() {
        return identifier::extract_phone(query)
            .or_else(|| mobile_number.and_then(identifier::extract_phone))
            .map(ExtractedIdentifier::Phone);
    }
    identifier::extract(query).or_else(|| {
        mobile_number
            .and_then(identifier::extract_phone)
            .map(ExtractedIdentifier::Phone)
    })
}
