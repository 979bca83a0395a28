use crate::ActivationFn;

/// Hyperbolic tangent. Outputs lie in `(-1, 1)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tanh;

impl ActivationFn for Tanh {
    fn f(&self, x: f64) -> f64 {
        x.tanh()
    }

    fn df(&self, x: f64) -> f64 {
        let y = x.tanh();
        1.0 - y * y
    }
}

/// The logistic function, a handy symmetric, s-shaped function.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sigmoid;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

impl ActivationFn for Sigmoid {
    fn f(&self, x: f64) -> f64 {
        sigmoid(x)
    }

    fn df(&self, x: f64) -> f64 {
        let y = sigmoid(x);
        y * (1.0 - y)
    }
}
