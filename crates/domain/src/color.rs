//! Colour values — `#RRGGBB` strings and their RGB decomposition.
//!
//! Two decompositions exist. [`decompose`] mirrors what the device's own web
//! page does: it reads each two-character window and keeps whatever leading
//! hex digits it finds, leaving a channel absent when there are none. Absent
//! channels still go over the wire, as `null`. [`Rgb::from_hex`] is the strict
//! variant and rejects anything that is not exactly `#` plus six hex digits.
//! [`ColorPolicy`] selects between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

const CHANNELS: [(&str, usize); 3] = [("red", 1), ("green", 3), ("blue", 5)];

/// A fully specified colour, each channel in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a strict `#RRGGBB` value (either letter case).
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the `#` is missing, the length is not
    /// 7 characters, or a channel contains a non-hex character.
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        if !value.starts_with('#') {
            return Err(ColorParseError::MissingHash);
        }
        let len = value.chars().count();
        if len != 7 {
            return Err(ColorParseError::Length(len));
        }

        let mut channels = [0_u8; 3];
        for (slot, (name, offset)) in channels.iter_mut().zip(CHANNELS) {
            let text = window(value, offset);
            if !text.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ColorParseError::InvalidChannel {
                    channel: name,
                    text,
                });
            }
            *slot = u8::from_str_radix(&text, 16).map_err(|_| ColorParseError::InvalidChannel {
                channel: name,
                text: text.clone(),
            })?;
        }

        let [r, g, b] = channels;
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Body of a `controlColor` request.
///
/// A `None` channel serializes as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPayload {
    pub r: Option<u8>,
    pub g: Option<u8>,
    pub b: Option<u8>,
}

impl ColorPayload {
    /// Whether every channel carries a value.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.to_rgb().is_some()
    }

    /// The colour, if every channel carries a value.
    #[must_use]
    pub fn to_rgb(&self) -> Option<Rgb> {
        Some(Rgb::new(self.r?, self.g?, self.b?))
    }
}

impl From<Rgb> for ColorPayload {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: Some(rgb.r),
            g: Some(rgb.g),
            b: Some(rgb.b),
        }
    }
}

/// Decompose a colour value the way the device's web page does.
///
/// The first character is skipped whatever it is. Each channel reads the two
/// characters at offsets 1, 3 and 5, ignores leading whitespace, accepts a
/// sign and a `0x` prefix, then keeps the longest run of hex digits (`"a"`
/// from `"ag"`). A window without any hex digit after that, or past the end of
/// the value, leaves the channel absent. So does a negative channel other than
/// `-0`.
#[must_use]
pub fn decompose(value: &str) -> ColorPayload {
    let [r, g, b] = CHANNELS.map(|(_, offset)| lenient_channel(&window(value, offset)));
    ColorPayload { r, g, b }
}

fn window(value: &str, offset: usize) -> String {
    value.chars().skip(offset).take(2).collect()
}

fn lenient_channel(text: &str) -> Option<u8> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let unprefixed = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .unwrap_or(unsigned);
    let digits: String = unprefixed
        .chars()
        .take_while(char::is_ascii_hexdigit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    // at most two hex digits, always fits in a u8
    let value = u8::from_str_radix(&digits, 16).ok()?;
    // a negative channel has no u8 form; -0 goes out as 0
    if negative && value != 0 {
        return None;
    }
    Some(value)
}

/// How a colour submit treats malformed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorPolicy {
    /// Send whatever [`decompose`] produces, absent channels included.
    #[default]
    Lenient,
    /// Reject anything [`Rgb::from_hex`] rejects.
    Strict,
}

impl ColorPolicy {
    /// Build the request body for `value` under this policy.
    ///
    /// # Errors
    ///
    /// Only [`ColorPolicy::Strict`] fails, with the [`ColorParseError`] from
    /// [`Rgb::from_hex`].
    pub fn payload(self, value: &str) -> Result<ColorPayload, ColorParseError> {
        match self {
            Self::Lenient => Ok(decompose(value)),
            Self::Strict => Rgb::from_hex(value).map(ColorPayload::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decompose_valid_hex_into_channels() {
        let payload = decompose("#FF00AA");
        assert_eq!(payload.to_rgb(), Some(Rgb::new(255, 0, 170)));
    }

    #[test]
    fn should_agree_with_standard_conversion_for_every_channel_value() {
        for value in 0..=255_u8 {
            let hex = format!("#{value:02x}{value:02X}{:02x}", 255 - value);
            let rgb = decompose(&hex).to_rgb().unwrap();
            assert_eq!(rgb, Rgb::new(value, value, 255 - value), "{hex}");
            assert_eq!(Rgb::from_hex(&hex).unwrap(), rgb);
        }
    }

    #[test]
    fn should_serialize_payload_as_integers() {
        let json = serde_json::to_value(decompose("#FF00AA")).unwrap();
        assert_eq!(json, serde_json::json!({"r": 255, "g": 0, "b": 170}));
    }

    #[test]
    fn should_leave_channels_absent_when_value_is_too_short() {
        let payload = decompose("#FF");
        assert_eq!(payload.r, Some(255));
        assert_eq!(payload.g, None);
        assert_eq!(payload.b, None);
        assert!(!payload.is_complete());
    }

    #[test]
    fn should_serialize_absent_channels_as_null() {
        let json = serde_json::to_value(decompose("#zz00aa")).unwrap();
        assert_eq!(json, serde_json::json!({"r": null, "g": 0, "b": 170}));
    }

    #[test]
    fn should_keep_leading_hex_digits_of_a_window() {
        let payload = decompose("#agb0c-");
        assert_eq!(payload.r, Some(0xa));
        assert_eq!(payload.g, Some(0xb0));
        assert_eq!(payload.b, Some(0xc));
    }

    #[test]
    fn should_treat_bare_hex_prefix_as_absent_channel() {
        let payload = decompose("#0x0000");
        assert_eq!(payload.r, None);
        assert_eq!(payload.g, Some(0));
        assert_eq!(payload.b, Some(0));
        assert!(!payload.is_complete());
    }

    #[test]
    fn should_accept_plus_sign_before_digits() {
        assert_eq!(decompose("#+f0000").r, Some(0xf));
        assert_eq!(decompose("#+").r, None);
    }

    #[test]
    fn should_accept_negative_zero_as_zero() {
        assert_eq!(decompose("#-00000").to_rgb(), Some(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn should_leave_negative_channel_absent() {
        let payload = decompose("#-f0000");
        assert_eq!(payload.r, None);
        assert_eq!(payload.g, Some(0));
    }

    #[test]
    fn should_ignore_whitespace_before_sign() {
        assert_eq!(decompose("# 10000").r, Some(1));
    }

    #[test]
    fn should_skip_first_character_whatever_it_is() {
        assert_eq!(decompose("x102030").to_rgb(), Some(Rgb::new(0x10, 0x20, 0x30)));
    }

    #[test]
    fn should_decompose_empty_value_to_absent_channels() {
        let payload = decompose("");
        assert_eq!(payload, ColorPayload { r: None, g: None, b: None });
    }

    #[test]
    fn should_reject_missing_hash_when_strict() {
        assert_eq!(Rgb::from_hex("FF00AA0"), Err(ColorParseError::MissingHash));
    }

    #[test]
    fn should_reject_wrong_length_when_strict() {
        assert_eq!(Rgb::from_hex("#FFF"), Err(ColorParseError::Length(4)));
    }

    #[test]
    fn should_reject_signed_channel_when_strict() {
        let err = Rgb::from_hex("#+f0000").unwrap_err();
        assert!(matches!(err, ColorParseError::InvalidChannel { channel: "red", .. }));
    }

    #[test]
    fn should_name_bad_channel_when_strict() {
        let err = Rgb::from_hex("#00zz00").unwrap_err();
        assert_eq!(
            err,
            ColorParseError::InvalidChannel {
                channel: "green",
                text: "zz".to_string()
            }
        );
    }

    #[test]
    fn should_format_as_lowercase_hex() {
        assert_eq!(Rgb::new(255, 0, 170).to_string(), "#ff00aa");
    }

    #[test]
    fn should_parse_through_from_str() {
        let rgb: Rgb = "#0a0b0c".parse().unwrap();
        assert_eq!(rgb, Rgb::new(10, 11, 12));
    }

    #[test]
    fn should_send_malformed_value_under_lenient_policy() {
        let payload = ColorPolicy::Lenient.payload("#nothex").unwrap();
        assert!(!payload.is_complete());
    }

    #[test]
    fn should_refuse_malformed_value_under_strict_policy() {
        assert!(ColorPolicy::Strict.payload("#nothex").is_err());
    }

    #[test]
    fn should_default_to_lenient_policy() {
        assert_eq!(ColorPolicy::default(), ColorPolicy::Lenient);
    }
}
