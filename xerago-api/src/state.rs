use std::sync::Arc;
use xerago_components::ComponentRegistry;
use xerago_core::{ContentRepository, RandomSource};
use xerago_store::CouponConfig;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ContentRepository>,
    pub random: Arc<dyn RandomSource>,
    pub components: Arc<ComponentRegistry>,
    pub coupons: CouponConfig,
}

impl AppState {
    pub fn new(repo: Arc<dyn ContentRepository>, random: Arc<dyn RandomSource>, coupons: CouponConfig) -> Self {
        Self {
            repo,
            random,
            components: Arc::new(ComponentRegistry::new()),
            coupons,
        }
    }
}
