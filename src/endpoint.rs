// src/endpoint.rs
use serde::Serialize;
use std::fmt;

/// Location of the GLIB control proxy relative to the page's base URL.
pub const SERVICE_PATH: &str = "../cbcTestStand/services/GlibControlProxy";

/// Absolute URL the control client posts its calls to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Endpoint(String);

impl Endpoint {
    /// Appends [`SERVICE_PATH`] to `base`. The value is kept verbatim; `..`
    /// segments are collapsed by the HTTP stack when a request is sent.
    pub fn resolve(base: &str) -> Self {
        Endpoint(format!("{}{}", base, SERVICE_PATH))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
