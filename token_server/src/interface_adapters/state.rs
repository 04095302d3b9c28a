use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::ports::{Clock, TokenCodec};

// Application state shared by the token handlers. Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    // Signing key identifier, embedded as the token issuer.
    pub api_key: Arc<str>,
    // Pre-shared value the front end sends to the grant endpoint.
    pub shared_secret: Arc<str>,
    pub ttl_seconds: u64,
    pub codec: Arc<dyn TokenCodec>,
}

// System clock adapter used by token use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
