//! Device addressing configuration.

use std::time::Duration;

use serde::Deserialize;

use wordclock_domain::endpoint::DeviceMode;

/// Where the word clock can be reached.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL once the device has joined a network (its mDNS name).
    pub base_url: String,
    /// Base URL while the device hosts its provisioning access point.
    pub ap_url: String,
    /// Whole-request timeout in seconds, `0` disables it.
    pub timeout_secs: u64,
}

impl HttpConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Base URL for requests served in `mode`, without a trailing slash.
    #[must_use]
    pub fn base_url_for(&self, mode: DeviceMode) -> &str {
        let url = match mode {
            DeviceMode::Station => &self.base_url,
            DeviceMode::AccessPoint => &self.ap_url,
        };
        url.trim_end_matches('/')
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://wordclock.local".to_string(),
            ap_url: "http://192.168.251.1".to_string(),
            timeout_secs: 0,
        }
    }
}
