//! Where simulation batches come from.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::{ImportError, ImportResult, SimulationRequest, SimulationResponse};

/// A source of simulation batches.
///
/// Called from rayon worker threads, so implementations must be
/// `Send + Sync` and should block rather than spawn.
pub trait SimulationBackend: Send + Sync + 'static {
    fn simulate(&self, request: &SimulationRequest) -> ImportResult<SimulationResponse>;
}

/// Any suitable closure is a backend.
impl<F> SimulationBackend for F
where
    F: Fn(&SimulationRequest) -> ImportResult<SimulationResponse> + Send + Sync + 'static,
{
    fn simulate(&self, request: &SimulationRequest) -> ImportResult<SimulationResponse> {
        self(request)
    }
}

// ── HttpBackend ───────────────────────────────────────────────────────────────

/// POSTs the request as JSON to `{base_url}/simulation`.
pub struct HttpBackend {
    client:   Client,
    endpoint: String,
}

impl HttpBackend {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(base_url: &str, timeout: Duration) -> ImportResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!("{}/simulation", base_url.trim_end_matches('/'));
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SimulationBackend for HttpBackend {
    fn simulate(&self, request: &SimulationRequest) -> ImportResult<SimulationResponse> {
        debug!(endpoint = %self.endpoint, time_of_day = %request.time_of_day, "requesting simulation batch");
        let response = self.client.post(&self.endpoint).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ImportError::Status { status: status.as_u16(), body });
        }
        Ok(response.json::<SimulationResponse>()?)
    }
}

// ── StaticBackend ─────────────────────────────────────────────────────────────

/// Answers every request with the same batch (demos, offline runs).
#[derive(Clone, Debug)]
pub struct StaticBackend {
    response: SimulationResponse,
}

impl StaticBackend {
    pub fn new(response: SimulationResponse) -> Self {
        Self { response }
    }
}

impl SimulationBackend for StaticBackend {
    fn simulate(&self, _request: &SimulationRequest) -> ImportResult<SimulationResponse> {
        Ok(self.response.clone())
    }
}
