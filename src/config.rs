use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuiConfig {
    #[serde(default = "GuiConfig::default_window_margin")]
    pub window_margin: f32,
    #[serde(default = "GuiConfig::default_collapse_windows")]
    pub collapse_windows: bool,
    #[serde(default = "GuiConfig::default_name_padding")]
    pub name_padding: char,
    #[serde(default = "GuiConfig::default_color_alpha")]
    pub color_alpha: bool,
    #[serde(default)]
    pub stepper: StepperConfig,
    #[serde(default = "GuiConfig::default_range_speed")]
    pub range_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct StepperConfig {
    #[serde(default = "StepperConfig::default_step")]
    pub step: i32,
    #[serde(default = "StepperConfig::default_step_fast")]
    pub step_fast: i32,
}

impl GuiConfig {
    const fn default_window_margin() -> f32 {
        10.0
    }

    const fn default_collapse_windows() -> bool {
        true
    }

    const fn default_name_padding() -> char {
        ' '
    }

    const fn default_color_alpha() -> bool {
        true
    }

    const fn default_range_speed() -> f32 {
        0.01
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            window_margin: Self::default_window_margin(),
            collapse_windows: Self::default_collapse_windows(),
            name_padding: Self::default_name_padding(),
            color_alpha: Self::default_color_alpha(),
            stepper: StepperConfig::default(),
            range_speed: Self::default_range_speed(),
        }
    }
}

impl StepperConfig {
    const fn default_step() -> i32 {
        1
    }

    const fn default_step_fast() -> i32 {
        100
    }
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self { step: Self::default_step(), step_fast: Self::default_step_fast() }
    }
}

impl GuiConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read GUI config file {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse GUI config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(err) => {
                tracing::warn!(error = ?err, "GUI config load failed, falling back to defaults");
                Self::default()
            }
        }
    }
}
