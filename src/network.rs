use std::rc::Rc;

use log::{debug, error, info, trace};
use ndarray::prelude::*;
use rand::Rng;

use crate::{ActivationFn, Corrections, Layer, NetworkError, Neuron, Result};

/// A fully-connected feed-forward network trained one example at a time.
///
/// Every layer carries one extra bias neuron at its last index. `shape` gives
/// the declared widths, input layer first, not counting the bias neurons.
#[derive(Debug)]
pub struct Network<F> {
    shape: Vec<usize>,
    layers: Vec<Layer<F>>,
    activation: Rc<F>,
    eta: f64,
    epochs: usize,
    corrections: Corrections,
}

impl<F: ActivationFn> Network<F> {
    /// Build a network with weights drawn from the thread-local RNG.
    pub fn new(shape: &[usize], activation: F, eta: f64) -> Result<Self> {
        Self::with_rng(shape, activation, eta, &mut rand::thread_rng())
    }

    /// Build a network, drawing every initial weight from `rng`.
    ///
    /// `shape` needs at least two entries (input and output) and every entry
    /// must be nonzero.
    pub fn with_rng<R>(shape: &[usize], activation: F, eta: f64, rng: &mut R) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        if shape.len() < 2 {
            return Err(NetworkError::InvalidShape(format!(
                "need at least an input and an output layer, got {} layer(s)",
                shape.len()
            )));
        }
        if let Some(i) = shape.iter().position(|&width| width == 0) {
            return Err(NetworkError::InvalidShape(format!("layer {i} has width 0")));
        }
        if !(eta.is_finite() && eta > 0.0) {
            return Err(NetworkError::InvalidLearningRate(eta));
        }

        let activation = Rc::new(activation);
        let last = shape.len() - 1;
        let layers = shape
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let outputs = if i == last { 0 } else { shape[i + 1] };
                let mut layer = Layer::with_capacity(width + 1);
                for index in 0..=width {
                    layer.push(Neuron::new(
                        outputs,
                        index,
                        Rc::clone(&activation),
                        eta,
                        rng,
                    ));
                }
                layer
            })
            .collect();

        debug!("built network with shape {shape:?}, eta={eta}, activation={activation:?}");

        Ok(Network {
            shape: shape.to_vec(),
            layers,
            activation,
            eta,
            epochs: 0,
            corrections: Corrections::default(),
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn layers(&self) -> &[Layer<F>] {
        &self.layers
    }

    pub fn activation(&self) -> &F {
        &self.activation
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn set_epochs(&mut self, epochs: usize) {
        self.epochs = epochs;
    }

    pub fn corrections(&self) -> Corrections {
        self.corrections
    }

    pub fn set_corrections(&mut self, corrections: Corrections) {
        self.corrections = corrections;
        let bias_output = corrections.bias_output();
        let last = self.layers.len() - 1;
        for layer in &mut self.layers[..last] {
            layer.bias_mut().set_output(bias_output);
        }
    }

    /// Propagate `input` through the network. Read the outcome with
    /// [`results`](Self::results).
    ///
    /// If `input` doesn't have exactly `shape[0]` elements, nothing is
    /// touched and `NetworkError::InputShape` is returned.
    pub fn forward(&mut self, input: ArrayView1<'_, f64>) -> Result<()> {
        let expected = self.shape[0];
        if input.len() != expected {
            error!(
                "input shape mismatch: expected {expected} values, got {}",
                input.len()
            );
            return Err(NetworkError::InputShape {
                expected,
                actual: input.len(),
            });
        }

        // The input layer's bias neuron is not an input.
        for (k, &x) in input.iter().enumerate() {
            self.layers[0].get_mut(k).set_output(x);
        }

        for i in 1..self.layers.len() {
            let (before, after) = self.layers.split_at_mut(i);
            let prev = &before[i - 1];
            let layer = &mut after[0];
            for j in 0..layer.len() - 1 {
                layer.get_mut(j).forward(prev);
            }
        }
        Ok(())
    }

    /// Compute gradients for the last forward pass against `target`, then
    /// update every weight.
    pub fn backprop(&mut self, target: ArrayView1<'_, f64>) -> Result<()> {
        let expected = self.shape[self.shape.len() - 1];
        if target.len() != expected {
            return Err(NetworkError::TargetShape {
                expected,
                actual: target.len(),
            });
        }

        let last = self.layers.len() - 1;
        let terminal = &mut self.layers[last];
        for (i, &y) in target.iter().enumerate() {
            terminal.get_mut(i).grad_output_layer(y);
        }

        // Hidden layers, back to front. Bias neurons get a gradient too
        // unless corrected; nothing downstream reads it.
        for i in (1..last).rev() {
            let (before, after) = self.layers.split_at_mut(i + 1);
            let layer = &mut before[i];
            let next = &after[0];
            let count = if self.corrections.skip_bias_gradients {
                layer.len() - 1
            } else {
                layer.len()
            };
            for j in 0..count {
                layer.get_mut(j).grad_hidden_layer(next);
            }
        }

        for i in (1..=last).rev() {
            let (before, after) = self.layers.split_at_mut(i);
            let prev = &mut before[i - 1];
            let layer = &after[0];
            for j in 0..layer.len() - 1 {
                layer.get(j).update_input_weights(prev);
            }
        }
        Ok(())
    }

    /// Train on the rows of `x` against the rows of `y`, one example at a
    /// time, in order.
    ///
    /// This makes `epochs + 1` passes over the data unless
    /// [`Corrections::exact_epochs`] is set.
    pub fn fit(&mut self, x: ArrayView2<'_, f64>, y: ArrayView2<'_, f64>) -> Result<()> {
        let n = x.nrows();
        if n != y.nrows() {
            return Err(NetworkError::DatasetLength {
                inputs: n,
                targets: y.nrows(),
            });
        }
        // Widths are checked before the first pass touches any weight.
        if x.ncols() != self.shape[0] {
            error!(
                "input shape mismatch: expected {} values, got {}",
                self.shape[0],
                x.ncols()
            );
            return Err(NetworkError::InputShape {
                expected: self.shape[0],
                actual: x.ncols(),
            });
        }
        let outputs = self.shape[self.shape.len() - 1];
        if y.ncols() != outputs {
            return Err(NetworkError::TargetShape {
                expected: outputs,
                actual: y.ncols(),
            });
        }

        let passes = self.corrections.passes(self.epochs);
        info!("training on {n} examples, passes {passes:?}");
        for pass in passes {
            for (xj, yj) in x.rows().into_iter().zip(y.rows()) {
                self.forward(xj)?;
                self.backprop(yj)?;
            }
            trace!("pass {pass} done");
        }
        info!("training finished");
        Ok(())
    }

    /// Run `input` forward and return the network's output.
    pub fn predict(&mut self, input: ArrayView1<'_, f64>) -> Result<Array1<f64>> {
        self.forward(input)?;
        Ok(self.results())
    }

    /// Outputs of the terminal layer's non-bias neurons, in order.
    pub fn results(&self) -> Array1<f64> {
        let terminal = &self.layers[self.layers.len() - 1];
        terminal
            .iter()
            .take(terminal.len() - 1)
            .map(|n| n.output())
            .collect()
    }
}
