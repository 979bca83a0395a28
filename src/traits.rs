use std::fmt::Debug;

/// A real-valued activation function together with its derivative.
///
/// A network holds exactly one of these and every neuron in it shares the
/// same instance, so implementations must not carry per-neuron state.
///
/// Note that `df` is evaluated at a neuron's *output* during
/// backpropagation, not at its weighted input sum. The formulas for `Tanh`
/// and `Sigmoid` are the textbook derivatives; the network applies them to
/// the output value as-is.
pub trait ActivationFn: Debug {
    /// Apply the function.
    fn f(&self, x: f64) -> f64;

    /// Derivative of `f` at `x`.
    fn df(&self, x: f64) -> f64;
}
