//! Animator configuration and the two shipped presets.

use flowcanvas_core::params::{param_f64, param_opt_f64, param_string, param_usize};
use flowcanvas_core::{AnimatorError, Palette};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Defaults shared by the presets.
pub const DEFAULT_PARTICLE_COUNT: usize = 150;
pub const DEFAULT_WAVE_COUNT: usize = 8;
pub const DEFAULT_WAVE_SAMPLES: usize = 50;
pub const DEFAULT_FLOW_STRENGTH: f64 = 0.2;
pub const DEFAULT_REPULSE_RADIUS: f64 = 150.0;
pub const DEFAULT_REPULSE_STRENGTH: f64 = 0.5;
pub const DEFAULT_DAMPING: f64 = 0.99;
pub const DEFAULT_CONNECTION_RADIUS: f64 = 100.0;
pub const DEFAULT_TIME_STEP: f64 = 0.005;
/// Per-tick spawn probability of the aura preset's pointer emitter.
pub const AURA_EMIT_PROBABILITY: f64 = 0.3;

/// State-retention policy for the wave curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaveMode {
    /// Sample positions are recomputed from scratch every frame.
    Recomputed,
    /// Sample points persist, get shoved by the pointer, and elastically
    /// return to their rest shape.
    Elastic,
}

impl WaveMode {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "recomputed" => Some(WaveMode::Recomputed),
            "elastic" => Some(WaveMode::Elastic),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            WaveMode::Recomputed => "recomputed",
            WaveMode::Elastic => "elastic",
        }
    }
}

/// Full parameter set of a [`FieldAnimator`](crate::FieldAnimator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatorConfig {
    /// Size of the steady particle pool, fixed for the animator's lifetime.
    pub particle_count: usize,
    pub palette: Palette,
    pub wave_count: usize,
    /// Samples per wave curve; at least 2.
    pub wave_samples: usize,
    pub wave_mode: WaveMode,
    /// Per-tick probability of spawning a particle at the pointer.
    /// `None` disables the emitter entirely.
    pub emit_probability: Option<f64>,
    pub flow_strength: f64,
    pub repulse_radius: f64,
    pub repulse_strength: f64,
    /// Multiplicative velocity decay per tick for the steady pool.
    pub damping: f64,
    /// Particles closer than this get a connection segment.
    pub connection_radius: f64,
    /// Time accumulator increment per frame. Frame-rate coupled by design:
    /// the animation speeds up and slows down with the achieved frame rate.
    pub time_step: f64,
}

impl AnimatorConfig {
    /// Full-viewport preset: a steady pool of 150 particles over recomputed
    /// travelling waves, blossom palette, no emitter.
    pub fn flowing() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            palette: Palette::blossom(),
            wave_count: DEFAULT_WAVE_COUNT,
            wave_samples: DEFAULT_WAVE_SAMPLES,
            wave_mode: WaveMode::Recomputed,
            emit_probability: None,
            flow_strength: DEFAULT_FLOW_STRENGTH,
            repulse_radius: DEFAULT_REPULSE_RADIUS,
            repulse_strength: DEFAULT_REPULSE_STRENGTH,
            damping: DEFAULT_DAMPING,
            connection_radius: DEFAULT_CONNECTION_RADIUS,
            time_step: DEFAULT_TIME_STEP,
        }
    }

    /// Bounded-container preset: no steady pool, elastic waves, particles
    /// emitted at the pointer, coral palette.
    pub fn aura() -> Self {
        Self {
            particle_count: 0,
            palette: Palette::coral(),
            wave_mode: WaveMode::Elastic,
            emit_probability: Some(AURA_EMIT_PROBABILITY),
            ..Self::flowing()
        }
    }

    /// Applies a loose JSON override object on top of this config.
    ///
    /// Missing or mistyped keys keep their current values; `palette` accepts
    /// a built-in palette name and is the only override that can fail.
    pub fn with_overrides(mut self, params: &Value) -> Result<Self, AnimatorError> {
        self.particle_count = param_usize(params, "particle_count", self.particle_count);
        self.wave_count = param_usize(params, "wave_count", self.wave_count);
        self.wave_samples = param_usize(params, "wave_samples", self.wave_samples).max(2);
        self.flow_strength = param_f64(params, "flow_strength", self.flow_strength);
        self.repulse_radius = param_f64(params, "repulse_radius", self.repulse_radius);
        self.repulse_strength = param_f64(params, "repulse_strength", self.repulse_strength);
        self.damping = param_f64(params, "damping", self.damping);
        self.connection_radius = param_f64(params, "connection_radius", self.connection_radius);
        self.time_step = param_f64(params, "time_step", self.time_step);
        self.emit_probability = param_opt_f64(params, "emit_probability", self.emit_probability)
            .map(|p| p.clamp(0.0, 1.0));

        let mode = param_string(params, "wave_mode", self.wave_mode.name());
        if let Some(mode) = WaveMode::from_name(&mode) {
            self.wave_mode = mode;
        }
        if let Some(name) = params.get("palette").and_then(Value::as_str) {
            self.palette = Palette::from_name(name)?;
        }
        Ok(self)
    }

    /// Serializes the config as the JSON object the animator reports.
    pub fn to_params(&self) -> Value {
        serde_json::json!({
            "particle_count": self.particle_count,
            "wave_count": self.wave_count,
            "wave_samples": self.wave_samples,
            "wave_mode": self.wave_mode.name(),
            "emit_probability": self.emit_probability,
            "flow_strength": self.flow_strength,
            "repulse_radius": self.repulse_radius,
            "repulse_strength": self.repulse_strength,
            "damping": self.damping,
            "connection_radius": self.connection_radius,
            "time_step": self.time_step,
        })
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::flowing()
    }
}
