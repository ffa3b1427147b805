use std::sync::Arc;

use services::AppServices;

/// Shared handles provided to every component by the composition root (`crates/app`).
#[derive(Clone)]
pub struct AppContext {
    services: Arc<AppServices>,
}

impl AppContext {
    #[must_use]
    pub fn new(services: Arc<AppServices>) -> Self {
        Self { services }
    }

    #[must_use]
    pub fn services(&self) -> Arc<AppServices> {
        Arc::clone(&self.services)
    }
}

/// Build an `AppContext` from assembled services.
#[must_use]
pub fn build_app_context(services: AppServices) -> AppContext {
    AppContext::new(Arc::new(services))
}
