//! Weather data adapter - implements WeatherDataPort using integration_openmeteo

use application::error::ApplicationError;
use application::ports::{
    AirQualityBundle, CurrentSnapshot, DailySeries, ForecastBundle, HourlySeries, MarineBundle,
    Series, WeatherDataPort,
};
use async_trait::async_trait;
use domain::{GeoLocation, InvalidCoordinates};
use integration_openmeteo::{
    AirQualityResponse, CurrentWeatherData, DailyData, ForecastResponse, HourlyData,
    MarineResponse, OpenMeteoClient, OpenMeteoConfig, OpenMeteoError,
};
use tracing::{debug, instrument};

/// Adapter for the forecast, air-quality, and marine fetches
pub struct WeatherDataAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherDataAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherDataAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl WeatherDataAdapter {
    /// Create a new adapter with default endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults().map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Create with custom endpoint configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: OpenMeteoConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Wrap an existing client; lets one client serve several adapters
    #[must_use]
    pub const fn from_client(client: OpenMeteoClient) -> Self {
        Self { client }
    }

    /// Map an integration error to an application error
    fn map_error(err: OpenMeteoError) -> ApplicationError {
        match err {
            OpenMeteoError::InvalidCoordinates => {
                ApplicationError::Domain(InvalidCoordinates.into())
            },
            OpenMeteoError::ConnectionFailed(_)
            | OpenMeteoError::RequestFailed { .. }
            | OpenMeteoError::ParseError(_) => ApplicationError::Internal(err.to_string()),
        }
    }

    /// Convert the raw current-weather block to a snapshot
    fn map_current(current: CurrentWeatherData) -> CurrentSnapshot {
        CurrentSnapshot {
            temperature: current.temperature,
            wind_speed: current.windspeed,
            weather_code: current.weathercode,
            time: current.time,
        }
    }

    /// Convert the raw hourly block to port series
    fn map_hourly(hourly: HourlyData) -> HourlySeries {
        HourlySeries {
            time: hourly.time,
            temperature: Series(hourly.temperature_2m),
            relative_humidity: Series(hourly.relative_humidity_2m),
            pressure: Series(hourly.pressure_msl),
            visibility: Series(hourly.visibility),
            uv_index: Series(hourly.uv_index),
            wind_speed: Series(hourly.wind_speed_10m),
            soil_moisture: Series(hourly.soil_moisture_0_to_1cm),
            weather_code: Series(hourly.weathercode),
        }
    }

    /// Convert the raw daily block to port series
    fn map_daily(daily: DailyData) -> DailySeries {
        DailySeries {
            time: daily.time,
            uv_index_max: Series(daily.uv_index_max),
        }
    }

    fn map_forecast(response: ForecastResponse) -> ForecastBundle {
        ForecastBundle {
            current: response.current_weather.map(Self::map_current),
            hourly: response.hourly.map(Self::map_hourly).unwrap_or_default(),
            daily: response.daily.map(Self::map_daily).unwrap_or_default(),
        }
    }

    fn map_air_quality(response: AirQualityResponse) -> AirQualityBundle {
        response
            .hourly
            .map(|hourly| AirQualityBundle {
                time: hourly.time,
                pm2_5: Series(hourly.pm2_5),
            })
            .unwrap_or_default()
    }

    fn map_marine(response: MarineResponse) -> MarineBundle {
        response
            .hourly
            .map(|hourly| MarineBundle {
                time: hourly.time,
                wave_height: Series(hourly.wave_height),
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl WeatherDataPort for WeatherDataAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn forecast(&self, location: &GeoLocation) -> Result<ForecastBundle, ApplicationError> {
        let response = self
            .client
            .forecast(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(
            hours = response.hourly.as_ref().map_or(0, |h| h.time.len()),
            has_current = response.current_weather.is_some(),
            "retrieved forecast"
        );
        Ok(Self::map_forecast(response))
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQualityBundle, ApplicationError> {
        let response = self
            .client
            .air_quality(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        Ok(Self::map_air_quality(response))
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn marine(&self, location: &GeoLocation) -> Result<MarineBundle, ApplicationError> {
        let response = self
            .client
            .marine(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        Ok(Self::map_marine(response))
    }
}
