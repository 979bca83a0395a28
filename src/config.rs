//! Opt-in corrections to the default training rule.

use std::ops::RangeInclusive;

/// Switches that replace documented quirks of the training rule with
/// corrected behavior. Everything defaults to `false`, which keeps the
/// default rule unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Corrections {
    /// Hold the output of every non-terminal bias neuron at 1.0.
    ///
    /// Without this, bias outputs stay at 0.0 forever and their outgoing
    /// weights never influence anything.
    pub live_bias: bool,

    /// Don't compute gradients for the bias neurons of hidden layers.
    ///
    /// Forward propagation and weight updates already skip them.
    pub skip_bias_gradients: bool,

    /// Make `fit` run exactly `epochs` passes instead of `epochs + 1`.
    pub exact_epochs: bool,
}

impl Corrections {
    /// All corrections enabled.
    pub fn all() -> Self {
        Corrections {
            live_bias: true,
            skip_bias_gradients: true,
            exact_epochs: true,
        }
    }

    /// Pass numbers `fit` runs over the training set: `0..=epochs`, or
    /// `1..=epochs` when `exact_epochs` is set.
    pub(crate) fn passes(&self, epochs: usize) -> RangeInclusive<usize> {
        if self.exact_epochs {
            1..=epochs
        } else {
            0..=epochs
        }
    }

    /// Output value bias neurons should hold.
    pub(crate) fn bias_output(&self) -> f64 {
        if self.live_bias {
            1.0
        } else {
            0.0
        }
    }
}
