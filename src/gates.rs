//! Truth tables for two-input logic gates, as training data.

use std::fmt;

use ndarray::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Gate {
    Or,
    Xor,
    And,
}

impl Gate {
    pub const ALL: [Gate; 3] = [Gate::Or, Gate::Xor, Gate::And];

    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            Gate::Or => a || b,
            Gate::Xor => a != b,
            Gate::And => a && b,
        }
    }

    /// One row per input combination, in the order `01, 00, 10, 11`.
    pub fn inputs() -> Array2<f64> {
        array![[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]
    }

    /// Expected outputs matching [`inputs`](Self::inputs), one column.
    pub fn targets(self) -> Array2<f64> {
        let x = Self::inputs();
        Array2::from_shape_fn((x.nrows(), 1), |(i, _)| {
            if self.eval(x[[i, 0]] != 0.0, x[[i, 1]] != 0.0) {
                1.0
            } else {
                0.0
            }
        })
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gate::Or => "OR",
            Gate::Xor => "XOR",
            Gate::And => "AND",
        };
        f.write_str(name)
    }
}
