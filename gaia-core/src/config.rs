//! Environment configuration loading from .env files
//!
//! Loads learning, threshold and network parameters from `.env` or
//! environment variables. Every accessor falls back to a documented default
//! when the variable is missing or unparsable.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

use crate::adaptive::{
    AdaptiveConfig, AdaptiveGate, LearningRule, DEFAULT_LEARNING_RATE, DEFAULT_THRESHOLD,
};
use crate::error::{GateError, GateResult};
use crate::memory::{MemoryGate, MemoryMode};
use crate::network::{GateNetwork, DEFAULT_CAPACITY, MAX_CAPACITY, NUM_INPUTS};

// Automatically load .env when config module is accessed
static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

/// Ensure environment is loaded
#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    ensure_loaded();
    env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Load adaptive learning rate from environment
/// Default: 0.1
pub fn learning_rate() -> f32 {
    parsed("GAIA_LEARNING_RATE").unwrap_or(DEFAULT_LEARNING_RATE)
}

/// Load adaptive decision threshold from environment
/// Default: 0.5
pub fn decision_threshold() -> f32 {
    parsed("GAIA_DECISION_THRESHOLD").unwrap_or(DEFAULT_THRESHOLD)
}

/// Load learning rule (`signed-error` | `directional`) from environment
/// Default: signed-error
pub fn learning_rule() -> LearningRule {
    parsed("GAIA_LEARNING_RULE").unwrap_or_default()
}

/// Load gate network node capacity from environment
/// Default: 10
pub fn network_capacity() -> usize {
    parsed("GAIA_NETWORK_CAPACITY").unwrap_or(DEFAULT_CAPACITY)
}

/// Load memory gate mode (`xor-with-memory` | `simple-lag`) from environment
/// Default: simple-lag
pub fn memory_mode() -> MemoryMode {
    parsed("GAIA_MEMORY_MODE").unwrap_or_default()
}

/// Cached values
pub static LEARNING_RATE: Lazy<f32> = Lazy::new(learning_rate);
pub static DECISION_THRESHOLD: Lazy<f32> = Lazy::new(decision_threshold);
pub static NETWORK_CAPACITY: Lazy<usize> = Lazy::new(network_capacity);
pub static LEARNING_RULE: Lazy<LearningRule> = Lazy::new(learning_rule);
pub static MEMORY_MODE: Lazy<MemoryMode> = Lazy::new(memory_mode);

/// Configuração agregada
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaiaConfig {
    pub adaptive: AdaptiveConfig,
    pub network_capacity: usize,
    pub memory_mode: MemoryMode,
}

impl Default for GaiaConfig {
    fn default() -> Self {
        Self {
            adaptive: AdaptiveConfig::default(),
            network_capacity: DEFAULT_CAPACITY,
            memory_mode: MemoryMode::default(),
        }
    }
}

impl GaiaConfig {
    /// Create config from environment variables (cached on first access)
    pub fn from_env() -> Self {
        Self {
            adaptive: AdaptiveConfig {
                threshold: *DECISION_THRESHOLD,
                learning_rate: *LEARNING_RATE,
                rule: *LEARNING_RULE,
            },
            network_capacity: *NETWORK_CAPACITY,
            memory_mode: *MEMORY_MODE,
        }
    }

    /// Valida limites
    pub fn validate(&self) -> GateResult<()> {
        if !self.adaptive.learning_rate.is_finite() || self.adaptive.learning_rate <= 0.0 {
            return Err(GateError::InvalidConfig(format!(
                "learning rate must be positive, got {}",
                self.adaptive.learning_rate
            )));
        }
        if !self.adaptive.threshold.is_finite() {
            return Err(GateError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                self.adaptive.threshold
            )));
        }
        if !(NUM_INPUTS..=MAX_CAPACITY).contains(&self.network_capacity) {
            return Err(GateError::InvalidConfig(format!(
                "network capacity must lie in [{NUM_INPUTS}, {MAX_CAPACITY}], got {}",
                self.network_capacity
            )));
        }
        Ok(())
    }

    /// Rede vazia com a capacidade configurada
    pub fn network(&self) -> GateNetwork {
        GateNetwork::with_capacity(self.network_capacity)
    }

    /// Gate adaptativo com pesos padrão
    pub fn adaptive_gate(&self) -> AdaptiveGate {
        AdaptiveGate::new(self.adaptive)
    }

    /// Gate de memória no modo configurado
    pub fn memory_gate(&self) -> MemoryGate {
        MemoryGate::new(self.memory_mode)
    }
}
