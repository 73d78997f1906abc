use crate::rate_limit::RateLimiter;
use crate::template::TemplateStore;

// App's shared state
pub struct AppState {
    pub template: TemplateStore,
    pub limiter: RateLimiter,
}
