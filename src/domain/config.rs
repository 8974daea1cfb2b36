//! Render configuration.
//!
//! Settings arrive from the host as a JSON document (`FieldSettings`, all
//! fields defaulted) and are validated into the immutable `RenderConfig` the
//! core runs with. Validation is the only fallible step in the whole engine:
//! an unsupported text alignment or baseline aborts setup before any dot is
//! created. Everything else falls back to a documented default.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Horizontal text anchor. Mirrors the canvas `textAlign` values the engine
/// accepts; anything else is a fatal [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(ConfigError::UnsupportedAlign(other.to_string())),
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical text anchor, canvas `textBaseline` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    Alphabetic,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s {
            "top" => Ok(Self::Top),
            "hanging" => Ok(Self::Hanging),
            "middle" => Ok(Self::Middle),
            "alphabetic" => Ok(Self::Alphabetic),
            "ideographic" => Ok(Self::Ideographic),
            "bottom" => Ok(Self::Bottom),
            other => Err(ConfigError::UnsupportedBaseline(other.to_string())),
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Hanging => "hanging",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
            Self::Ideographic => "ideographic",
            Self::Bottom => "bottom",
        }
    }
}

/// Where freshly sampled dots start before converging on their rest points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnDirection {
    Left,
    Right,
    Top,
    Bottom,
    LeftTop,
    RightTop,
    LeftBottom,
    RightBottom,
    /// Off the left or right edge, picked per dot.
    Horizontal,
    /// Off the top or bottom edge, picked per dot.
    Vertical,
    /// Random angle and distance around the rest point.
    Scatter,
    /// Spawn directly at rest. Also the fallback for unrecognized names;
    /// spawn direction is a visual knob, not a fatal one.
    InPlace,
}

impl SpawnDirection {
    pub fn parse(s: &str) -> Self {
        match s {
            "left" => Self::Left,
            "right" => Self::Right,
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "leftTop" => Self::LeftTop,
            "rightTop" => Self::RightTop,
            "leftBottom" => Self::LeftBottom,
            "rightBottom" => Self::RightBottom,
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            "allDirections" => Self::Scatter,
            _ => Self::InPlace,
        }
    }
}

/// Gradient fill selection. Unrecognized names keep the surface's current
/// solid brush, which still produces opaque glyphs for sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    Vertical,
    Horizontal,
    None,
}

impl GradientKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "gradient-vertical" => Self::Vertical,
            "gradient-horizontal" => Self::Horizontal,
            _ => Self::None,
        }
    }
}

/// The one error category of the engine, raised synchronously at setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedAlign(String),
    UnsupportedBaseline(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedAlign(v) => write!(f, "unsupported textAlign value: {v:?}"),
            Self::UnsupportedBaseline(v) => write!(f, "unsupported textBaseline value: {v:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Host viewport dimensions, supplied at construction and on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// JSON-facing settings. Every field has a default so `"{}"` is valid; the
/// field names match the original host markup (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldSettings {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub gradient_type: String,
    pub gradient_start_color: String,
    pub gradient_end_color: String,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_y: f64,
    pub text_align: String,
    pub text_baseline: String,
    pub full_surface: bool,
    pub spacing: u32,
    pub move_direction: String,
    pub move_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub hover_distance: f64,
    pub hover_offset: f64,
    pub vibration_rate: f64,
    pub lerp_speed: f64,
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            text: "HELLO".to_string(),
            font_size: 96.0,
            font_family: "sans-serif".to_string(),
            gradient_type: "gradient-vertical".to_string(),
            gradient_start_color: "#ffffff".to_string(),
            gradient_end_color: "#999999".to_string(),
            padding_left: 0.0,
            padding_right: 0.0,
            padding_y: 20.0,
            text_align: "center".to_string(),
            text_baseline: "middle".to_string(),
            full_surface: false,
            spacing: 6,
            move_direction: "allDirections".to_string(),
            move_speed: 0.1,
            min_radius: 1.0,
            max_radius: 2.5,
            hover_distance: 50.0,
            hover_offset: 30.0,
            vibration_rate: 0.05,
            lerp_speed: 0.08,
        }
    }
}

impl FieldSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Validate into the immutable run configuration. Fails fast on
    /// unsupported alignment/baseline; no dots exist yet at that point.
    pub fn validate(self) -> Result<RenderConfig, ConfigError> {
        let align = TextAlign::parse(&self.text_align)?;
        let baseline = TextBaseline::parse(&self.text_baseline)?;

        Ok(RenderConfig {
            text: self.text,
            font_size: self.font_size,
            font_family: self.font_family,
            gradient: GradientKind::parse(&self.gradient_type),
            gradient_start: self.gradient_start_color,
            gradient_end: self.gradient_end_color,
            padding_left: self.padding_left,
            padding_right: self.padding_right,
            padding_y: self.padding_y,
            align,
            baseline,
            full_surface: self.full_surface,
            // A zero pitch would walk the grid forever.
            spacing: self.spacing.max(1),
            spawn: SpawnDirection::parse(&self.move_direction),
            approach_speed: self.move_speed,
            min_radius: self.min_radius,
            max_radius: self.max_radius,
            hover_distance: self.hover_distance,
            hover_offset: self.hover_offset,
            jitter_rate: self.vibration_rate,
            approach_rate: self.lerp_speed,
        })
    }
}

/// Validated, immutable-for-the-session display parameters.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub gradient: GradientKind,
    pub gradient_start: String,
    pub gradient_end: String,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_y: f64,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub full_surface: bool,
    pub spacing: u32,
    pub spawn: SpawnDirection,
    pub approach_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub hover_distance: f64,
    pub hover_offset: f64,
    pub jitter_rate: f64,
    pub approach_rate: f64,
}

impl RenderConfig {
    /// CSS font shorthand for the surface.
    pub fn font(&self) -> String {
        format!("{}px {}", self.font_size, self.font_family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let settings = FieldSettings::from_json("{}").unwrap();
        let config = settings.validate().unwrap();
        assert_eq!(config.align, TextAlign::Center);
        assert_eq!(config.baseline, TextBaseline::Middle);
        assert_eq!(config.spawn, SpawnDirection::Scatter);
    }

    #[test]
    fn every_supported_align_baseline_pair_validates() {
        for align in ["left", "center", "right"] {
            for baseline in [
                "top",
                "hanging",
                "middle",
                "alphabetic",
                "ideographic",
                "bottom",
            ] {
                let settings = FieldSettings {
                    text_align: align.to_string(),
                    text_baseline: baseline.to_string(),
                    ..Default::default()
                };
                assert!(settings.validate().is_ok(), "{align}/{baseline}");
            }
        }
    }

    #[test]
    fn unsupported_align_is_fatal() {
        let settings = FieldSettings {
            text_align: "justify".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.validate().unwrap_err(),
            ConfigError::UnsupportedAlign("justify".to_string())
        );
    }

    #[test]
    fn unsupported_baseline_is_fatal() {
        let settings = FieldSettings {
            text_baseline: "sub".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.validate().unwrap_err(),
            ConfigError::UnsupportedBaseline("sub".to_string())
        );
    }

    #[test]
    fn unknown_spawn_direction_falls_back_in_place() {
        assert_eq!(SpawnDirection::parse("sideways"), SpawnDirection::InPlace);
    }

    #[test]
    fn unknown_gradient_keeps_solid_brush() {
        assert_eq!(GradientKind::parse("radial"), GradientKind::None);
    }

    #[test]
    fn zero_spacing_is_clamped() {
        let settings = FieldSettings {
            spacing: 0,
            ..Default::default()
        };
        assert_eq!(settings.validate().unwrap().spacing, 1);
    }

    #[test]
    fn camel_case_field_names_round_trip() {
        let json = r#"{"fontSize": 48, "moveDirection": "leftTop", "hoverDistance": 80}"#;
        let settings = FieldSettings::from_json(json).unwrap();
        assert_eq!(settings.font_size, 48.0);
        let config = settings.validate().unwrap();
        assert_eq!(config.spawn, SpawnDirection::LeftTop);
        assert_eq!(config.hover_distance, 80.0);
    }
}
