//! Voxel colors and their normalization to 8-bit RGB.
//!
//! A voxel color can arrive in several shapes: `#RRGGBB` text, CSS `rgb(...)`
//! text, a 0–255 channel array, or unit-scale channels. [`VoxelColor`] names
//! each shape explicitly and [`VoxelColor::normalize`] reduces all of them to a
//! single [`Rgb8`]. Anything unrecognized falls back to [`Rgb8::DEFAULT`].

use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Rgb8
// ---------------------------------------------------------------------------

/// A normalized 8-bit-per-channel RGB triple.
///
/// `Display` renders the material key form `r_g_b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Fallback used for any color that cannot be interpreted.
    pub const DEFAULT: Rgb8 = Rgb8::new(200, 200, 200);

    /// Creates a triple from raw channel bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a triple from unbounded channel values.
    ///
    /// Each channel is clamped to `[0, 255]` and rounded to the nearest
    /// integer. NaN counts as 0.
    pub fn from_channels(channels: [f64; 3]) -> Self {
        Self {
            r: clamp_channel(channels[0]),
            g: clamp_channel(channels[1]),
            b: clamp_channel(channels[2]),
        }
    }

    /// Channels scaled to `[0.0, 1.0]`.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.r, self.g, self.b)
    }
}

fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// VoxelColor
// ---------------------------------------------------------------------------

/// The color attached to a voxel, in whichever shape the producer used.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum VoxelColor {
    /// `#RRGGBB` text. Hex pairs are read at byte offsets 1, 3 and 5.
    Hex(String),
    /// CSS functional text such as `rgb(255, 0, 0)` or `rgba(1, 2, 3, 0.5)`.
    Css(String),
    /// Channel array on a 0–255 scale; only the first three entries are used.
    Levels(Vec<f64>),
    /// Channels on a `[0.0, 1.0]` scale.
    Unit {
        /// Red channel.
        red: f64,
        /// Green channel.
        green: f64,
        /// Blue channel.
        blue: f64,
    },
    /// Any shape that is not recognized. Normalizes to [`Rgb8::DEFAULT`].
    #[default]
    Unknown,
}

impl VoxelColor {
    /// Classifies free-form color text.
    ///
    /// Text starting with `#` is hex, text starting with `rgb` is CSS,
    /// everything else is [`VoxelColor::Unknown`].
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.starts_with('#') {
            Self::Hex(text)
        } else if text.starts_with("rgb") {
            Self::Css(text)
        } else {
            tracing::debug!(text = %text, "unrecognized color text");
            Self::Unknown
        }
    }

    /// Reduces this color to a clamped, rounded 8-bit triple.
    ///
    /// Never fails: malformed input degrades to zeroed channels (for partial
    /// hex/CSS text) or to [`Rgb8::DEFAULT`] (for unknown shapes).
    pub fn normalize(&self) -> Rgb8 {
        let channels = match self {
            Self::Hex(text) => [
                hex_channel(text, 1),
                hex_channel(text, 3),
                hex_channel(text, 5),
            ],
            Self::Css(text) => css_channels(text),
            Self::Levels(levels) => [
                levels.first().copied().unwrap_or(0.0),
                levels.get(1).copied().unwrap_or(0.0),
                levels.get(2).copied().unwrap_or(0.0),
            ],
            Self::Unit { red, green, blue } => [
                (red * 255.0).round(),
                (green * 255.0).round(),
                (blue * 255.0).round(),
            ],
            Self::Unknown => {
                tracing::debug!("color shape not recognized, using default gray");
                return Rgb8::DEFAULT;
            }
        };
        Rgb8::from_channels(channels)
    }
}

/// Parses the hex pair starting at byte `start`.
///
/// Only the leading run of hex digits counts, so `"#F"` yields 15 for red.
/// A pair with no hex digits yields 0.
fn hex_channel(text: &str, start: usize) -> f64 {
    let bytes = text.as_bytes();
    let end = (start + 2).min(bytes.len());
    let pair = bytes.get(start..end).unwrap_or(&[]);

    let mut value = None;
    for digit in pair.iter().map_while(|&b| (b as char).to_digit(16)) {
        value = Some(value.unwrap_or(0) * 16 + digit);
    }

    match value {
        Some(v) => f64::from(v),
        None => {
            tracing::debug!(text, offset = start, "missing hex pair, channel set to 0");
            0.0
        }
    }
}

/// Extracts the first three digit runs of a CSS `rgb(...)` string.
fn css_channels(text: &str) -> [f64; 3] {
    let mut runs = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<f64>().ok());

    match (runs.next(), runs.next(), runs.next()) {
        (Some(r), Some(g), Some(b)) => [r, g, b],
        _ => {
            tracing::debug!(text, "fewer than three channels in rgb() text");
            [0.0; 3]
        }
    }
}

impl From<&str> for VoxelColor {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for VoxelColor {
    fn from(text: String) -> Self {
        Self::from_text(text)
    }
}

impl From<Rgb8> for VoxelColor {
    fn from(rgb: Rgb8) -> Self {
        Self::Levels(vec![f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)])
    }
}

// ---------------------------------------------------------------------------
// Deserialization
// ---------------------------------------------------------------------------

/// Wire shapes accepted for a color. Tried in declaration order.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Text(String),
    Levels { levels: Vec<f64> },
    Unit { red: f64, green: f64, blue: f64 },
    Other(serde::de::IgnoredAny),
}

impl<'de> Deserialize<'de> for VoxelColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Text(text) => Self::from_text(text),
            ColorRepr::Levels { levels } => Self::Levels(levels),
            ColorRepr::Unit { red, green, blue } => Self::Unit { red, green, blue },
            ColorRepr::Other(_) => Self::Unknown,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
