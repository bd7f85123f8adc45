//! Remote congestion data collaborator.
//!
//! The traffic service reports flow conditions for geographic points; this
//! module fetches them, quantises them onto grid cells, and exposes the
//! result as a [`CongestionMap`]. Network or payload failures degrade to "no
//! data available" — callers fall back to uniform costs, they never crash.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::grid::{Cell, Terrain};

/// Congestion classification reported by the traffic service.
///
/// Absence of a reading is represented with `Option`, not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CongestionLevel {
    Light,
    Moderate,
    Heavy,
}

impl CongestionLevel {
    /// Traversal cost under the fixed congestion schedule.
    pub fn cost(self) -> f64 {
        match self {
            CongestionLevel::Light => 1.0,
            CongestionLevel::Moderate => 2.0,
            CongestionLevel::Heavy => 5.0,
        }
    }

    /// Terrain class this level maps to when adjusting a grid.
    pub fn terrain(self) -> Terrain {
        match self {
            CongestionLevel::Light => Terrain::Light,
            CongestionLevel::Moderate => Terrain::Moderate,
            CongestionLevel::Heavy => Terrain::Heavy,
        }
    }

    fn from_condition(raw: &str) -> Option<Self> {
        match raw {
            "LOW" => Some(CongestionLevel::Light),
            "MEDIUM" => Some(CongestionLevel::Moderate),
            "HIGH" => Some(CongestionLevel::Heavy),
            _ => None,
        }
    }
}

/// Sparse congestion readings keyed by grid cell.
#[derive(Debug, Clone, Default)]
pub struct CongestionMap {
    readings: HashMap<Cell, CongestionLevel>,
}

impl CongestionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record or overwrite the reading for a cell.
    pub fn insert(&mut self, cell: Cell, level: CongestionLevel) {
        self.readings.insert(cell, level);
    }

    /// The reading for `cell`, or `None` when the service reported nothing.
    pub fn classify(&self, cell: Cell) -> Option<CongestionLevel> {
        self.readings.get(&cell).copied()
    }

    /// Iterate over all known readings.
    pub fn readings(&self) -> impl Iterator<Item = (Cell, CongestionLevel)> + '_ {
        self.readings.iter().map(|(&cell, &level)| (cell, level))
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Parse a raw flow payload, quantising coordinates by `cell_scale`.
    ///
    /// Exposed so fixtures can exercise the parsing path without a network.
    pub fn from_flow_json(raw: &str, cell_scale: f64) -> Result<Self> {
        let payload: FlowResponse = serde_json::from_str(raw)?;
        Ok(Self::from_flows(&payload.flows, cell_scale))
    }

    fn from_flows(flows: &[FlowReading], cell_scale: f64) -> Self {
        let mut map = Self::new();
        for flow in flows {
            let Some(level) = CongestionLevel::from_condition(&flow.condition) else {
                // Unknown conditions count as "no reading", same as absence.
                continue;
            };
            let cell = Cell::new(
                (flow.location.lat * cell_scale) as i32,
                (flow.location.lng * cell_scale) as i32,
            );
            map.insert(cell, level);
        }
        map
    }
}

/// Configuration for the traffic client. Every knob is explicit; there are
/// no baked-in endpoints or keys.
#[derive(Debug, Clone)]
pub struct TrafficConfig {
    /// Flow endpoint of the traffic service.
    pub base_url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Multiplier quantising lat/lng coordinates into grid rows/columns.
    pub cell_scale: f64,
}

impl TrafficConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
            cell_scale: 10.0,
        }
    }
}

/// Blocking HTTP client for the congestion feed.
pub struct TrafficClient {
    client: Client,
    config: TrafficConfig,
}

impl TrafficClient {
    pub fn new(config: TrafficConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Fetch congestion readings for the area spanned by `origin` and
    /// `destination` (each a "lat,lng" pair).
    ///
    /// Any failure — connection, status, malformed payload — is logged and
    /// surfaces as `None`; the caller treats absence as fallback cost.
    pub fn fetch_congestion(&self, origin: &str, destination: &str) -> Option<CongestionMap> {
        match self.try_fetch_congestion(origin, destination) {
            Ok(map) => {
                debug!(readings = map.len(), "fetched congestion data");
                Some(map)
            }
            Err(error) => {
                warn!(%error, "congestion fetch failed; continuing without traffic data");
                None
            }
        }
    }

    fn try_fetch_congestion(&self, origin: &str, destination: &str) -> Result<CongestionMap> {
        let bbox = format!("{origin},{destination}");
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("apikey", self.config.api_key.as_str()),
                ("bbox", bbox.as_str()),
                ("incl", "traffic,all"),
            ])
            .send()?
            .error_for_status()?;

        let payload: FlowResponse = response.json()?;
        Ok(CongestionMap::from_flows(
            &payload.flows,
            self.config.cell_scale,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct FlowResponse {
    #[serde(default)]
    flows: Vec<FlowReading>,
}

#[derive(Debug, Deserialize)]
struct FlowReading {
    location: FlowLocation,
    condition: String,
}

#[derive(Debug, Deserialize)]
struct FlowLocation {
    lat: f64,
    lng: f64,
}
