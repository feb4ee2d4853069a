//! Setup-time accessibility probe for the external data source reference.
//! Probing is the only network I/O in the core and its failure is an
//! expected, recoverable outcome: the setup controller converts it into a
//! validation result, never a fault.

use std::time::Duration;
use anyhow::{anyhow, Result};
use tracing::debug;

/// Checks that a data source reference resolves to an accessible resource.
pub trait DataSourceProbe: Send + Sync {
    fn check(&self, reference: &str) -> Result<()>;
}

/// Probes the reference over HTTP. Accessible means the URL parses and the
/// endpoint answers with a success status within the timeout.
pub struct HttpProbe {
    client: reqwest::blocking::Client,
}

impl HttpProbe {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }
}

impl DataSourceProbe for HttpProbe {
    fn check(&self, reference: &str) -> Result<()> {
        let resp = self.client.get(reference).send()?;
        let status = resp.status();
        debug!(target: "anteroom::probe", "probe '{}' -> {}", reference, status);
        if status.is_success() {
            Ok(())
        } else {
            Err(anyhow!("probe returned status {}", status))
        }
    }
}

/// Accepts any reference. For hosts embedding the core without network access
/// and for tests that are not exercising the probe path.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllProbe;

impl DataSourceProbe for AcceptAllProbe {
    fn check(&self, _reference: &str) -> Result<()> { Ok(()) }
}
