use crate::config::AppConfig;
use crate::services::generation::GenerationProvider;
use crate::services::providers::{LoyaltyProvider, OrderProvider};

pub struct AppState {
    pub config: AppConfig,
    pub generation: Box<dyn GenerationProvider>,
    pub orders: Box<dyn OrderProvider>,
    pub loyalty: Box<dyn LoyaltyProvider>,
}
