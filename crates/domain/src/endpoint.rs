//! Device endpoints addressed by their action name.

use std::fmt;

/// Shown as soon as a [`Endpoint::Connect`] request has been sent. The device
/// restarts instead of answering, so this is usually the only feedback.
pub const RESTARTING_TO_CONNECT: &str = "Restarting to connect";

/// A JSON endpoint on the device, addressed as `/<action name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ControlColor,
    SetTimeZone,
    SetBrightness,
    Connect,
}

impl Endpoint {
    pub const ALL: [Self; 4] = [
        Self::ControlColor,
        Self::SetTimeZone,
        Self::SetBrightness,
        Self::Connect,
    ];

    /// The action name, as it appears in the request path.
    #[must_use]
    pub const fn action_name(self) -> &'static str {
        match self {
            Self::ControlColor => "controlColor",
            Self::SetTimeZone => "setTimeZone",
            Self::SetBrightness => "setBrightness",
            Self::Connect => "connect",
        }
    }

    /// Request path, always `/` followed by the action name.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.action_name())
    }

    /// Where the device serves this endpoint.
    ///
    /// Wi-Fi provisioning only exists while the device hosts its own access
    /// point; everything else is served once it has joined a network.
    #[must_use]
    pub const fn mode(self) -> DeviceMode {
        match self {
            Self::Connect => DeviceMode::AccessPoint,
            _ => DeviceMode::Station,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action_name())
    }
}

/// Network role the device is in when it answers a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceMode {
    /// Joined a Wi-Fi network, reachable by its mDNS name.
    Station,
    /// Hosting its own provisioning network.
    AccessPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefix_action_name_with_slash() {
        assert_eq!(Endpoint::ControlColor.path(), "/controlColor");
        assert_eq!(Endpoint::SetTimeZone.path(), "/setTimeZone");
        assert_eq!(Endpoint::SetBrightness.path(), "/setBrightness");
        assert_eq!(Endpoint::Connect.path(), "/connect");
    }

    #[test]
    fn should_serve_only_connect_in_access_point_mode() {
        let ap: Vec<_> = Endpoint::ALL
            .into_iter()
            .filter(|e| e.mode() == DeviceMode::AccessPoint)
            .collect();
        assert_eq!(ap, vec![Endpoint::Connect]);
    }

    #[test]
    fn should_word_connect_notice_as_the_device_page_does() {
        assert_eq!(RESTARTING_TO_CONNECT, "Restarting to connect");
    }

    #[test]
    fn should_display_action_name() {
        assert_eq!(Endpoint::SetBrightness.to_string(), "setBrightness");
    }
}
