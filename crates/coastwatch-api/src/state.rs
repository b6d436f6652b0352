//! Shared application state for the API server.

use std::sync::Arc;

use coastwatch_registry::Registry;

use crate::forecast::{ForecastProvider, MockForecastProvider};

/// Shared state for the Axum application.
///
/// Cheap to clone and injected via Axum's `State` extractor. Holds the
/// registry handle and the forecast provider seam.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory data layer.
    pub registry: Registry,
    /// Forecast source; a mock by default.
    pub forecast: Arc<dyn ForecastProvider>,
}

impl AppState {
    /// Create state around a registry, with the mock forecast provider.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            forecast: Arc::new(MockForecastProvider),
        }
    }

    /// Replace the forecast provider (e.g. with a real upstream client).
    #[must_use]
    pub fn with_forecast(mut self, forecast: Arc<dyn ForecastProvider>) -> Self {
        self.forecast = forecast;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}
