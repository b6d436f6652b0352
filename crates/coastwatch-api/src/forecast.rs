//! Forecast provider seam.
//!
//! Forecast generation is an external collaborator: the service only
//! relays whatever the provider returns. The bundled
//! [`MockForecastProvider`] produces plausible pseudo-random days so the
//! client has something to render until a real provider is wired in.

use chrono::{Days, Utc};
use coastwatch_types::{Beach, ForecastDay};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Number of days in a forecast.
const FORECAST_DAYS: u64 = 5;

/// Compass directions the mock provider picks from.
const COMPASS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Source of multi-day weather forecasts for a beach.
pub trait ForecastProvider: Send + Sync {
    /// Produce a five-day forecast for the given beach.
    fn five_day(&self, beach: &Beach) -> Vec<ForecastDay>;
}

/// Stand-in provider generating random but plausible values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockForecastProvider;

impl ForecastProvider for MockForecastProvider {
    fn five_day(&self, beach: &Beach) -> Vec<ForecastDay> {
        let mut rng = rand::rng();
        let today = Utc::now().date_naive();

        (0..FORECAST_DAYS)
            .map(|offset| ForecastDay {
                date: today.checked_add_days(Days::new(offset)).unwrap_or(today),
                temperature: rng.random_range(20.0..30.0),
                wind_speed: rng.random_range(5.0..25.0),
                wind_direction: String::from(*COMPASS.choose(&mut rng).unwrap_or(&"N")),
                wave_height: rng.random_range(0.0..5.0),
                wave_period: rng.random_range(5.0..15.0),
                beach_id: beach.id,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use coastwatch_types::{BeachId, GeoPoint, SafetyLevel};

    fn beach() -> Beach {
        Beach {
            id: BeachId::new(),
            name: String::from("Forecast Beach"),
            location: GeoPoint::new(23.7, 37.9),
            description: String::from("d"),
            safety_level: SafetyLevel::Moderate,
            features: Vec::new(),
            restrictions: Vec::new(),
            lifeguard_available: false,
            lifeguard_hours: None,
            images: Vec::new(),
            wave_height: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn mock_produces_five_consecutive_days_in_range() {
        let beach = beach();
        let days = MockForecastProvider.five_day(&beach);
        assert_eq!(days.len(), 5);

        let today = Utc::now().date_naive();
        for (offset, day) in days.iter().enumerate() {
            let expected = today
                .checked_add_days(Days::new(u64::try_from(offset).unwrap_or(0)))
                .unwrap_or(today);
            assert_eq!(day.date, expected);
            assert_eq!(day.beach_id, beach.id);
            assert!((20.0..30.0).contains(&day.temperature));
            assert!((5.0..25.0).contains(&day.wind_speed));
            assert!((0.0..5.0).contains(&day.wave_height));
            assert!((5.0..15.0).contains(&day.wave_period));
            assert!(COMPASS.contains(&day.wind_direction.as_str()));
        }
    }
}
