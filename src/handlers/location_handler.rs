use std::net::SocketAddr;
use axum::extract::{ConnectInfo, RawQuery, State};
use axum::http::StatusCode;
use axum::TypedHeader;
use tracing::{debug, warn};
use crate::app::AppState;
use crate::models::location_record::LocationRecord;

/// Every `lat` and `lon` value in a query string, in order of appearance.
#[derive(Debug, Default, PartialEq)]
pub struct LocationQuery {
    lat: Vec<String>,
    lon: Vec<String>,
}

impl LocationQuery {
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            match key.as_ref() {
                "lat" => query.lat.push(value.into_owned()),
                "lon" => query.lon.push(value.into_owned()),
                _ => {}
            }
        }
        query
    }

    /// Both coordinates, if both were sent non-empty. A repeated key keeps
    /// all of its values, joined with commas.
    fn coordinates(self) -> Option<(String, String)> {
        Some((joined(self.lat)?, joined(self.lon)?))
    }
}

fn joined(values: Vec<String>) -> Option<String> {
    let value = values.join(",");
    (!value.is_empty()).then_some(value)
}

/// `GET /location?lat=..&lon=..`
///
/// Answers 200 with an empty body whatever happens.
pub async fn location_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    user_agent: Option<TypedHeader<headers::UserAgent>>,
    client: Option<ConnectInfo<SocketAddr>>,
) -> StatusCode {
    let client = client.map(|ConnectInfo(addr)| addr.to_string()).unwrap_or_default();
    let user_agent = user_agent.map(|TypedHeader(ua)| ua.as_str().to_string()).unwrap_or_default();

    let Some((lat, lon)) = query.and_then(|raw| LocationQuery::parse(&raw).coordinates()) else {
        debug!(%client, %user_agent, "location request without coordinates");
        return StatusCode::OK;
    };

    if let Err(e) = state.validator.validate(&lat, &lon) {
        debug!(%client, error = %e, "location rejected");
        return StatusCode::OK;
    }

    let record = LocationRecord::new(lat, lon);
    if let Err(e) = state.logger.log(&record).await {
        warn!(%client, error = %e, "location not recorded");
    }
    StatusCode::OK
}
