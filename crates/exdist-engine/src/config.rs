//! Transform configuration and validation.
//!
//! [`TransformConfig`] selects the propagation element and whether
//! Lipschitz pruning is enabled. [`validate()`](TransformConfig::validate)
//! checks structural invariants; the engine additionally checks the
//! element's dimensionality against the output grid on every run.

use crate::error::ConfigError;
use exdist_grid::StructuringElement;

/// Which cells a finalized cell propagates to.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Propagation {
    /// `±1` along each axis (2n neighbours). Default.
    #[default]
    L1Ball,
    /// Every cell within Chebyshev distance 1 (3^n - 1 neighbours).
    LInfBall,
    /// Explicit offsets. Must not contain the centre. Restricting the
    /// element can leave cells unreachable; those keep the sentinel.
    Custom(StructuringElement),
}

/// Configuration for an [`ExactDistance`](crate::ExactDistance) run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformConfig {
    /// Propagation element. Default: [`Propagation::L1Ball`].
    pub propagation: Propagation,
    /// Discard candidate sources that exceed the current minimum by more
    /// than the Lipschitz bound. Default: `true`. Disabling keeps every
    /// candidate forever; results are identical, only slower.
    pub pruning: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            propagation: Propagation::L1Ball,
            pruning: true,
        }
    }
}

impl TransformConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder {
            config: Self::default(),
        }
    }

    /// Check dimension-independent invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Propagation::Custom(element) = &self.propagation {
            if element.is_empty() {
                return Err(ConfigError::EmptyElement);
            }
            if element.contains_center() {
                return Err(ConfigError::CenterInElement);
            }
        }
        Ok(())
    }

    /// Resolve the propagation element for an `ndim`-dimensional grid.
    ///
    /// The returned element never contains the centre.
    pub fn propagation_element(&self, ndim: usize) -> Result<StructuringElement, ConfigError> {
        self.validate()?;
        match &self.propagation {
            Propagation::L1Ball => Ok(StructuringElement::l1_ball(ndim).remove_center()),
            Propagation::LInfBall => Ok(StructuringElement::linf_ball(ndim).remove_center()),
            Propagation::Custom(element) => {
                if element.ndim() != ndim {
                    return Err(ConfigError::ElementDimensionMismatch {
                        expected: ndim,
                        got: element.ndim(),
                    });
                }
                Ok(element.clone())
            }
        }
    }
}

/// Builder for [`TransformConfig`].
pub struct TransformConfigBuilder {
    config: TransformConfig,
}

impl TransformConfigBuilder {
    /// Set the propagation element (default: L1 ball).
    pub fn propagation(mut self, propagation: Propagation) -> Self {
        self.config.propagation = propagation;
        self
    }

    /// Enable or disable Lipschitz pruning (default: enabled).
    pub fn pruning(mut self, pruning: bool) -> Self {
        self.config.pruning = pruning;
        self
    }

    /// Build the configuration, validating it.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a custom element is empty or contains the centre.
    pub fn build(self) -> Result<TransformConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
