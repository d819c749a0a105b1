//! Data aggregation service
//!
//! Fans out the three weather fetches, tolerates failure of the two
//! optional sources, and reconciles the results into one `WeatherView`.

use std::fmt;
use std::sync::Arc;

use domain::{GeoLocation, Glyph, WeatherCode};
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{AirQualityBundle, ForecastBundle, MarineBundle, WeatherDataPort};
use crate::services::view::WeatherView;

/// Aggregates the three upstream sources into one display model
pub struct AggregatorService {
    weather: Arc<dyn WeatherDataPort>,
}

impl fmt::Debug for AggregatorService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregatorService").finish_non_exhaustive()
    }
}

impl AggregatorService {
    /// Create an aggregator over a weather data port
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherDataPort>) -> Self {
        Self { weather }
    }

    /// Aggregate forecast, air-quality and marine data for a location
    ///
    /// The three fetches are dispatched together and joined, so latency is
    /// bounded by the slowest of them. A failed air-quality or marine fetch
    /// degrades those fields to placeholders; a failed forecast fetch
    /// aborts with `ForecastUnavailable`.
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    pub async fn aggregate(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherView, ApplicationError> {
        let (forecast, air, marine) = tokio::join!(
            self.weather.forecast(location),
            self.weather.air_quality(location),
            self.weather.marine(location),
        );

        let forecast =
            forecast.map_err(|e| ApplicationError::ForecastUnavailable(e.to_string()))?;
        let air = air
            .inspect_err(|e| debug!(error = %e, "air quality unavailable, degrading"))
            .ok();
        let marine = marine
            .inspect_err(|e| debug!(error = %e, "marine data unavailable, degrading"))
            .ok();

        Ok(build_view(&forecast, air.as_ref(), marine.as_ref()))
    }
}

/// Position of the current timestamp in the hourly time axis
///
/// Exact string match; no match or no timestamp defaults to index 0.
fn resolved_index(current_time: Option<&str>, times: &[String]) -> usize {
    current_time
        .and_then(|t| times.iter().position(|entry| entry == t))
        .unwrap_or(0)
}

/// Format a value with its unit suffix, or the field's placeholder
fn with_unit(value: Option<f64>, unit: &str, placeholder: &str) -> String {
    value.map_or_else(|| placeholder.to_string(), |v| format!("{v}{unit}"))
}

/// Reconcile the bundles into the flat display model
///
/// Extraction is built from total reads, so a missing series or index
/// degrades the affected field to its placeholder without touching the
/// others.
fn build_view(
    forecast: &ForecastBundle,
    air: Option<&AirQualityBundle>,
    marine: Option<&MarineBundle>,
) -> WeatherView {
    let current = forecast.current.as_ref();
    let hourly = &forecast.hourly;

    // Each current field falls back independently to hourly index 0.
    let temperature = current
        .and_then(|c| c.temperature)
        .or_else(|| hourly.temperature.at(0));
    let wind_speed = current
        .and_then(|c| c.wind_speed)
        .or_else(|| hourly.wind_speed.at(0));
    let weather_code = current
        .and_then(|c| c.weather_code)
        .or_else(|| hourly.weather_code.at(0));
    let current_time = current
        .and_then(|c| c.time.clone())
        .or_else(|| hourly.time.first().cloned());

    // One shared index for every hourly lookup.
    let index = resolved_index(current_time.as_deref(), &hourly.time);

    let humidity = hourly.relative_humidity.at(index);
    let pressure = hourly.pressure.at(index);
    let visibility = hourly.visibility.at(index);
    let soil = hourly.soil_moisture.at(index);
    let uv = hourly
        .uv_index
        .at(index)
        .or_else(|| forecast.daily.uv_index_max.at(0));

    // Cross-source reads stay at index 0, not the resolved index.
    let pm2_5 = air.and_then(|a| a.pm2_5.at(0));
    let wave = marine.and_then(|m| m.wave_height.at(0));

    let code = weather_code.map(WeatherCode);
    let phrase = code.map_or("Unknown", WeatherCode::phrase);
    let glyph = code.map_or(Glyph::Cloudy, WeatherCode::glyph);

    let date = current_time
        .as_deref()
        .map(|t| t.split('T').next().unwrap_or(t).to_string())
        .or_else(|| forecast.daily.time.first().cloned())
        .unwrap_or_else(|| "N/A".to_string());

    WeatherView {
        temperature: with_unit(temperature, " °C", "N/A"),
        windspeed: format!("Windspeed: {}", with_unit(wind_speed, " km/h", "N/A")),
        humidity: format!("Humidity : {}", with_unit(humidity, "%", "N/A")),
        condition: phrase.to_string(),
        glyph: glyph.emoji().to_string(),
        date,
        air_quality: pm2_5.map_or_else(|| "Air: N/A".to_string(), |v| format!("PM2.5: {v}")),
        soil_moisture: with_unit(soil, "", "Moisture: N/A"),
        wave_height: with_unit(wave, " m", "Wave: N/A"),
        uv_index: with_unit(uv, "", "UV: N/A"),
        wind: with_unit(wind_speed, " km/h", "Wind: N/A"),
        pressure: with_unit(pressure, " hPa", "Pressure: N/A"),
        visibility: with_unit(visibility, " m", "Visibility: N/A"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CurrentSnapshot, DailySeries, HourlySeries, MockWeatherDataPort, Series};

    fn berlin() -> GeoLocation {
        GeoLocation::new_unchecked(52.52, 13.405)
    }

    /// Forecast fixture from the Berlin worked example: the current
    /// timestamp matches hourly.time[5].
    fn berlin_forecast() -> ForecastBundle {
        let times: Vec<String> = (7..13)
            .map(|h| format!("2024-05-01T{h:02}:00"))
            .collect();
        ForecastBundle {
            current: Some(CurrentSnapshot {
                temperature: Some(18.4),
                wind_speed: Some(12.1),
                weather_code: Some(3),
                time: Some("2024-05-01T12:00".to_string()),
            }),
            hourly: HourlySeries {
                time: times,
                temperature: Series::from_values(vec![12.0, 13.0, 14.5, 15.8, 17.0, 18.4]),
                relative_humidity: Series::from_values(vec![80.0, 78.0, 74.0, 70.0, 65.0, 60.0]),
                pressure: Series::from_values(vec![
                    1014.0, 1013.8, 1013.6, 1013.5, 1013.4, 1013.2,
                ]),
                visibility: Series::from_values(vec![
                    18000.0, 19000.0, 20000.0, 22000.0, 23000.0, 24140.0,
                ]),
                uv_index: Series::from_values(vec![0.5, 1.0, 2.0, 3.0, 3.5, 4.2]),
                wind_speed: Series::from_values(vec![8.0, 9.0, 10.0, 11.0, 11.5, 12.1]),
                soil_moisture: Series::from_values(vec![0.30, 0.30, 0.31, 0.31, 0.31, 0.32]),
                weather_code: Series::from_values(vec![2, 2, 2, 3, 3, 3]),
            },
            daily: DailySeries {
                time: vec!["2024-05-01".to_string()],
                uv_index_max: Series::from_values(vec![5.1]),
            },
        }
    }

    fn berlin_air() -> AirQualityBundle {
        AirQualityBundle {
            time: vec!["2024-05-01T00:00".to_string()],
            pm2_5: Series::from_values(vec![12.5]),
        }
    }

    fn berlin_marine() -> MarineBundle {
        MarineBundle {
            time: vec!["2024-05-01T00:00".to_string()],
            wave_height: Series::from_values(vec![0.4]),
        }
    }

    #[test]
    fn worked_example_formats_exactly() {
        let view = build_view(&berlin_forecast(), Some(&berlin_air()), Some(&berlin_marine()));
        assert_eq!(view.temperature, "18.4 °C");
        assert_eq!(view.windspeed, "Windspeed: 12.1 km/h");
        assert_eq!(view.humidity, "Humidity : 60%");
        assert_eq!(view.condition, "Overcast");
        assert_eq!(view.glyph, "⛅");
        assert_eq!(view.date, "2024-05-01");
    }

    #[test]
    fn hourly_lookups_share_the_resolved_index() {
        // Current time matches hourly.time[5]; every hourly field must be
        // read there, not at 0.
        let view = build_view(&berlin_forecast(), None, None);
        assert_eq!(view.pressure, "1013.2 hPa");
        assert_eq!(view.visibility, "24140 m");
        assert_eq!(view.soil_moisture, "0.32");
        assert_eq!(view.uv_index, "4.2");
    }

    #[test]
    fn unmatched_current_time_defaults_to_index_zero() {
        let mut forecast = berlin_forecast();
        if let Some(current) = forecast.current.as_mut() {
            current.time = Some("1999-01-01T00:00".to_string());
        }
        let view = build_view(&forecast, None, None);
        assert_eq!(view.humidity, "Humidity : 80%");
        assert_eq!(view.pressure, "1014 hPa");
    }

    #[test]
    fn missing_current_falls_back_to_hourly_index_zero() {
        let mut forecast = berlin_forecast();
        forecast.current = None;
        let view = build_view(&forecast, None, None);
        assert_eq!(view.temperature, "12 °C");
        assert_eq!(view.windspeed, "Windspeed: 8 km/h");
        // hourly.weather_code[0] == 2
        assert_eq!(view.condition, "Partly cloudy");
        // time falls back to hourly.time[0], which then resolves index 0
        assert_eq!(view.date, "2024-05-01");
        assert_eq!(view.humidity, "Humidity : 80%");
    }

    #[test]
    fn each_current_field_falls_back_independently() {
        let mut forecast = berlin_forecast();
        if let Some(current) = forecast.current.as_mut() {
            current.temperature = None;
            current.weather_code = None;
        }
        let view = build_view(&forecast, None, None);
        assert_eq!(view.temperature, "12 °C");
        assert_eq!(view.windspeed, "Windspeed: 12.1 km/h");
        assert_eq!(view.condition, "Partly cloudy");
    }

    #[test]
    fn cross_source_fields_stay_at_index_zero() {
        // The resolved forecast index is 5, but PM2.5 and wave height are
        // pinned to the first entry of their own series.
        let air = AirQualityBundle {
            time: vec![],
            pm2_5: Series::from_values(vec![7.0, 8.0, 9.0, 10.0, 11.0, 99.0]),
        };
        let marine = MarineBundle {
            time: vec![],
            wave_height: Series::from_values(vec![0.2, 0.3, 0.4, 0.5, 0.6, 9.9]),
        };
        let view = build_view(&berlin_forecast(), Some(&air), Some(&marine));
        assert_eq!(view.air_quality, "PM2.5: 7");
        assert_eq!(view.wave_height, "0.2 m");
    }

    #[test]
    fn absent_optional_bundles_become_placeholders() {
        let view = build_view(&berlin_forecast(), None, None);
        assert_eq!(view.air_quality, "Air: N/A");
        assert_eq!(view.wave_height, "Wave: N/A");
        // Forecast-owned fields keep their real values.
        assert_eq!(view.temperature, "18.4 °C");
        assert_eq!(view.pressure, "1013.2 hPa");
    }

    #[test]
    fn uv_falls_back_to_daily_maximum() {
        let mut forecast = berlin_forecast();
        forecast.hourly.uv_index = Series::absent();
        let view = build_view(&forecast, None, None);
        assert_eq!(view.uv_index, "5.1");

        forecast.daily.uv_index_max = Series::absent();
        let view = build_view(&forecast, None, None);
        assert_eq!(view.uv_index, "UV: N/A");
    }

    #[test]
    fn empty_forecast_is_all_placeholders() {
        let view = build_view(&ForecastBundle::default(), None, None);
        assert_eq!(view.temperature, "N/A");
        assert_eq!(view.windspeed, "Windspeed: N/A");
        assert_eq!(view.humidity, "Humidity : N/A");
        assert_eq!(view.condition, "Unknown");
        assert_eq!(view.glyph, "🌤️");
        assert_eq!(view.date, "N/A");
        assert_eq!(view.soil_moisture, "Moisture: N/A");
        assert_eq!(view.uv_index, "UV: N/A");
        assert_eq!(view.wind, "Wind: N/A");
        assert_eq!(view.pressure, "Pressure: N/A");
        assert_eq!(view.visibility, "Visibility: N/A");
    }

    #[test]
    fn date_prefers_daily_axis_when_no_timestamps() {
        let forecast = ForecastBundle {
            daily: DailySeries {
                time: vec!["2024-05-02".to_string()],
                uv_index_max: Series::absent(),
            },
            ..ForecastBundle::default()
        };
        let view = build_view(&forecast, None, None);
        assert_eq!(view.date, "2024-05-02");
    }

    #[test]
    fn resolved_index_matches_exactly_or_zero() {
        let times: Vec<String> = vec![
            "2024-05-01T00:00".into(),
            "2024-05-01T01:00".into(),
            "2024-05-01T02:00".into(),
            "2024-05-01T03:00".into(),
        ];
        assert_eq!(resolved_index(Some("2024-05-01T03:00"), &times), 3);
        assert_eq!(resolved_index(Some("2024-05-01T03:30"), &times), 0);
        assert_eq!(resolved_index(None, &times), 0);
        assert_eq!(resolved_index(Some("2024-05-01T00:00"), &[]), 0);
    }

    // ========================================================================
    // Service-level tests (fan-out and failure semantics)
    // ========================================================================

    #[tokio::test]
    async fn aggregate_returns_full_view() {
        let mut weather = MockWeatherDataPort::new();
        weather
            .expect_forecast()
            .returning(|_| Ok(berlin_forecast()));
        weather.expect_air_quality().returning(|_| Ok(berlin_air()));
        weather.expect_marine().returning(|_| Ok(berlin_marine()));

        let service = AggregatorService::new(Arc::new(weather));
        let view = service.aggregate(&berlin()).await.expect("aggregate");
        assert_eq!(view.temperature, "18.4 °C");
        assert_eq!(view.air_quality, "PM2.5: 12.5");
        assert_eq!(view.wave_height, "0.4 m");
    }

    #[tokio::test]
    async fn optional_failures_degrade_only_their_fields() {
        let mut weather = MockWeatherDataPort::new();
        weather
            .expect_forecast()
            .returning(|_| Ok(berlin_forecast()));
        weather
            .expect_air_quality()
            .returning(|_| Err(ApplicationError::Internal("HTTP 500".to_string())));
        weather
            .expect_marine()
            .returning(|_| Err(ApplicationError::Internal("HTTP 404".to_string())));

        let service = AggregatorService::new(Arc::new(weather));
        let view = service.aggregate(&berlin()).await.expect("aggregate");
        assert_eq!(view.air_quality, "Air: N/A");
        assert_eq!(view.wave_height, "Wave: N/A");
        assert_eq!(view.temperature, "18.4 °C");
        assert_eq!(view.humidity, "Humidity : 60%");
        assert_eq!(view.condition, "Overcast");
    }

    #[tokio::test]
    async fn forecast_failure_aborts_aggregation() {
        let mut weather = MockWeatherDataPort::new();
        weather
            .expect_forecast()
            .returning(|_| Err(ApplicationError::Internal("HTTP 500".to_string())));
        weather.expect_air_quality().returning(|_| Ok(berlin_air()));
        weather.expect_marine().returning(|_| Ok(berlin_marine()));

        let service = AggregatorService::new(Arc::new(weather));
        let err = service.aggregate(&berlin()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ForecastUnavailable(_)));
    }
}
