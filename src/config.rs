use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    pub order_api_url: String,
    pub order_api_token: String,
    pub loyalty_api_url: String,
    pub loyalty_api_key: String,
    pub loyalty_access_token: String,
    pub request_timeout_secs: u64,
    pub not_found_as_error: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string()),
            order_api_url: env::var("ORDER_API_URL")
                .unwrap_or_else(|_| "https://apigateway.example.in/corporate-portal".to_string()),
            order_api_token: env::var("ORDER_API_TOKEN").unwrap_or_default(),
            loyalty_api_url: env::var("LOYALTY_API_URL")
                .unwrap_or_else(|_| "https://loyalty.example.in/api".to_string()),
            loyalty_api_key: env::var("LOYALTY_API_KEY").unwrap_or_default(),
            loyalty_access_token: env::var("LOYALTY_ACCESS_TOKEN").unwrap_or_default(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8),
            not_found_as_error: env::var("NOT_FOUND_AS_ERROR")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
        }
    }

    pub fn has_gemini_key(&self) -> bool {
        credential_ok(&self.gemini_api_key)
    }

    pub fn has_order_credentials(&self) -> bool {
        credential_ok(&self.order_api_token)
    }

    pub fn has_loyalty_credentials(&self) -> bool {
        credential_ok(&self.loyalty_api_key) && credential_ok(&self.loyalty_access_token)
    }
}

/// A usable credential is non-empty after trimming and carries no embedded
/// whitespace (a pasted token with a stray space breaks the auth header).
pub fn credential_ok(token: &str) -> bool {
    let trimmed = token.trim();
    !trimmed.is_empty() && !trimmed.contains(' ')
}
