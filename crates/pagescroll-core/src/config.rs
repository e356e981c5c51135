use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::scroll::{Easing, ScrollSettings};

/// Widget configuration, merged over defaults at initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Button markup
    #[serde(default = "default_ui")]
    pub ui: String,
    /// Overlay markup
    #[serde(default = "default_overlay")]
    pub overlay: String,
    /// Enable the long-press side menu
    #[serde(default)]
    pub menu: bool,
    /// URL of a JSON shortcuts document shown in the side menu
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcuts: Option<String>,
    /// Scroll animation duration in milliseconds (0 = jump)
    #[serde(default = "default_duration")]
    pub duration: u64,
    /// Easing curve for the scroll animation
    #[serde(default)]
    pub easing: EasingType,
    /// Pixels left overlapping between the old and the new view
    #[serde(default)]
    pub common: CommonArea,
    /// Corner the button starts in before any stored preference applies
    #[serde(default, alias = "initial")]
    pub side: Side,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            ui: default_ui(),
            overlay: default_overlay(),
            menu: false,
            shortcuts: None,
            duration: default_duration(),
            easing: EasingType::default(),
            common: CommonArea::default(),
            side: Side::default(),
        }
    }
}

fn default_ui() -> String {
    r#"<button type="button" class="mobile-scroll button">Scroll Down</button>"#.to_string()
}

fn default_overlay() -> String {
    r#"<div class="mobile-scroll overlay"></div>"#.to_string()
}

fn default_duration() -> u64 {
    500
}

/// Screen corner the button is anchored to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// CSS class that pins the button to this corner
    pub fn class(&self) -> &'static str {
        self.as_str()
    }

    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Parse a stored preference value; anything unrecognized is treated as absent.
    pub fn from_preference(value: &str) -> Option<Side> {
        match value.trim() {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named easing curves available from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    #[default]
    Linear,
    Cubic,
    Quintic,
    EaseOut,
    Smoothstep,
}

/// Height of the common area: a fixed pixel count, or the button's rendered height
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommonArea {
    Pixels(f64),
    Auto,
}

impl Default for CommonArea {
    fn default() -> Self {
        CommonArea::Pixels(100.0)
    }
}

impl CommonArea {
    /// Resolve to pixels, using the button height for `Auto`
    pub fn resolve(&self, button_height: f64) -> f64 {
        match self {
            CommonArea::Pixels(px) => *px,
            CommonArea::Auto => button_height,
        }
    }
}

impl Serialize for CommonArea {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            CommonArea::Pixels(px) => serializer.serialize_f64(*px),
            CommonArea::Auto => serializer.serialize_str("auto"),
        }
    }
}

// Accept either a pixel number or the string "auto"
impl<'de> Deserialize<'de> for CommonArea {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct CommonAreaVisitor;

        impl<'de> Visitor<'de> for CommonAreaVisitor {
            type Value = CommonArea;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number of pixels or \"auto\"")
            }

            fn visit_f64<E>(self, value: f64) -> Result<CommonArea, E>
            where
                E: de::Error,
            {
                Ok(CommonArea::Pixels(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<CommonArea, E>
            where
                E: de::Error,
            {
                Ok(CommonArea::Pixels(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<CommonArea, E>
            where
                E: de::Error,
            {
                Ok(CommonArea::Pixels(value as f64))
            }

            fn visit_str<E>(self, value: &str) -> Result<CommonArea, E>
            where
                E: de::Error,
            {
                if value.eq_ignore_ascii_case("auto") {
                    Ok(CommonArea::Auto)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(CommonAreaVisitor)
    }
}

impl WidgetConfig {
    /// Parse configuration from TOML and validate it
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the type system cannot rule out
    pub fn validate(&self) -> crate::Result<()> {
        if let CommonArea::Pixels(px) = self.common {
            if !px.is_finite() || px < 0.0 {
                return Err(crate::Error::Config(format!(
                    "common must be a non-negative pixel count or \"auto\", got {}",
                    px
                )));
            }
        }

        if let Some(ref shortcuts) = self.shortcuts {
            let url = Url::parse(shortcuts)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(crate::Error::Config(format!(
                    "shortcuts must be an http(s) URL, got {}",
                    shortcuts
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, returning defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid configuration, using defaults");
                Self::default()
            }
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/pagescroll/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("pagescroll")
            .join("config.toml")
    }

    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.duration)
    }

    /// Settings consumed by the scroll animator
    pub fn scroll_settings(&self) -> ScrollSettings {
        ScrollSettings {
            common: self.common,
            duration: self.animation_duration(),
            easing: Easing::Preset(self.easing),
        }
    }
}
