//! One-shot control actions served under `/control/<action>`.
//!
//! Unlike the settings endpoints these take no body and answer with plain
//! text such as `Action (light_on) performed`.

use std::fmt;
use std::str::FromStr;

/// A control action the device understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// Allow the display to light up again.
    LightOn,
    /// Blank the display.
    LightOff,
    /// Turn the Wi-Fi radio off until the next restart.
    DisableWifi,
    /// Switch to summer time (UTC+2).
    TzSummer,
    /// Switch to winter time (UTC+1).
    TzWinter,
}

impl ControlAction {
    pub const ALL: [Self; 5] = [
        Self::LightOn,
        Self::LightOff,
        Self::DisableWifi,
        Self::TzSummer,
        Self::TzWinter,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LightOn => "light_on",
            Self::LightOff => "light_off",
            Self::DisableWifi => "disable_wifi",
            Self::TzSummer => "tz_summer",
            Self::TzWinter => "tz_winter",
        }
    }

    #[must_use]
    pub fn path(self) -> String {
        format!("/control/{}", self.as_str())
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown control action {0:?}")]
pub struct UnknownAction(pub String);

impl FromStr for ControlAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
