use crate::error::ScoreError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub patterns: PatternConfig,
    pub fusion: FusionConfig,
}

impl EngineConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let config: EngineConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    /// Try to load from path; if the file is missing or invalid, return defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({:#}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        self.patterns.validate()?;
        self.fusion.validate()
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

/// Pattern scorer tuning. The pattern table itself is fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// Score contributed by each match of a pattern group.
    pub match_weight: f64,
    /// Multiplier when any intensifier occurs in the message.
    pub intensifier_boost: f64,
    /// Multiplier when a diminisher (and no intensifier) occurs.
    pub diminisher_damping: f64,
    pub intensifiers: Vec<String>,
    pub diminishers: Vec<String>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            match_weight: 0.3,
            intensifier_boost: 1.5,
            diminisher_damping: 0.7,
            intensifiers: default_intensifiers(),
            diminishers: default_diminishers(),
        }
    }
}

impl PatternConfig {
    fn validate(&self) -> Result<(), ScoreError> {
        if !(self.match_weight.is_finite() && self.match_weight > 0.0) {
            return Err(ScoreError::InvalidConfig(format!(
                "patterns.match_weight must be positive, got {}",
                self.match_weight
            )));
        }
        for (name, value) in [
            ("intensifier_boost", self.intensifier_boost),
            ("diminisher_damping", self.diminisher_damping),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ScoreError::InvalidConfig(format!(
                    "patterns.{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        if self
            .intensifiers
            .iter()
            .chain(self.diminishers.iter())
            .any(|w| w.is_empty())
        {
            return Err(ScoreError::InvalidConfig(
                "intensifier/diminisher entries must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_intensifiers() -> Vec<String> {
    ["very", "extremely", "incredibly", "super", "really", "so", "absolutely"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_diminishers() -> Vec<String> {
    ["slightly", "somewhat", "kind of", "sort of", "a bit", "little"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Thresholds for the fusion decision. Positive-side thresholds compare
/// with `>=`, negative-side ones with `<=`, the pattern threshold with `>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    pub pattern_threshold: f64,
    pub positive_compound: f64,
    pub positive_polarity: f64,
    pub happy_compound: f64,
    pub happy_polarity: f64,
    pub negative_compound: f64,
    pub negative_polarity: f64,
    pub angry_compound: f64,
    pub angry_polarity: f64,
    /// Confidence reported for empty input.
    pub empty_confidence: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            pattern_threshold: 0.5,
            positive_compound: 0.5,
            positive_polarity: 0.3,
            happy_compound: 0.7,
            happy_polarity: 0.5,
            negative_compound: -0.5,
            negative_polarity: -0.3,
            angry_compound: -0.7,
            angry_polarity: -0.5,
            empty_confidence: 0.5,
        }
    }
}

impl FusionConfig {
    fn validate(&self) -> Result<(), ScoreError> {
        if !(self.pattern_threshold.is_finite() && self.pattern_threshold >= 0.0) {
            return Err(ScoreError::InvalidConfig(format!(
                "fusion.pattern_threshold must be non-negative, got {}",
                self.pattern_threshold
            )));
        }
        let bounded = [
            ("positive_compound", self.positive_compound),
            ("positive_polarity", self.positive_polarity),
            ("happy_compound", self.happy_compound),
            ("happy_polarity", self.happy_polarity),
            ("negative_compound", self.negative_compound),
            ("negative_polarity", self.negative_polarity),
            ("angry_compound", self.angry_compound),
            ("angry_polarity", self.angry_polarity),
        ];
        for (name, value) in bounded {
            if !(-1.0..=1.0).contains(&value) {
                return Err(ScoreError::InvalidConfig(format!(
                    "fusion.{} must lie in [-1, 1], got {}",
                    name, value
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.empty_confidence) {
            return Err(ScoreError::InvalidConfig(format!(
                "fusion.empty_confidence must lie in [0, 1], got {}",
                self.empty_confidence
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
