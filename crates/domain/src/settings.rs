//! Settings payloads accepted by the device.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of a `setTimeZone` request.
///
/// `tz` is forwarded verbatim; the device decides how to interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneSetting {
    pub tz: String,
    pub auto_dst: bool,
}

impl TimezoneSetting {
    #[must_use]
    pub fn new(tz: impl Into<String>, auto_dst: bool) -> Self {
        Self {
            tz: tz.into(),
            auto_dst,
        }
    }
}

/// Body of a `setBrightness` request.
///
/// `brightness` keeps the text the user typed, it is never coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrightnessSetting {
    pub auto_brightness: bool,
    pub brightness: String,
}

impl BrightnessSetting {
    #[must_use]
    pub fn new(auto_brightness: bool, brightness: impl Into<String>) -> Self {
        Self {
            auto_brightness,
            brightness: brightness.into(),
        }
    }
}

/// Body of a `connect` request: the network the device should join.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredential {
    pub ssid: String,
    pub password: String,
}

impl WifiCredential {
    #[must_use]
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for WifiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredential")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}
