use std::rc::Rc;

use ndarray::prelude::*;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::{ActivationFn, Layer};

/// A single unit of a [`Layer`].
///
/// Weights are stored on the *sending* side: `output_weights[k]` connects this
/// neuron to neuron `k` of the next layer. A neuron therefore reads its own
/// inputs out of the previous layer's weight vectors, using its `index` as the
/// column.
#[derive(Debug)]
pub struct Neuron<F> {
    output: f64,
    gradient: f64,
    output_weights: Array1<f64>,
    index: usize,
    eta: f64,
    activation: Rc<F>,
}

impl<F: ActivationFn> Neuron<F> {
    /// Create a neuron with `outputs` outgoing weights, each drawn uniformly
    /// from `[0, 1)`.
    pub(crate) fn new<R>(
        outputs: usize,
        index: usize,
        activation: Rc<F>,
        eta: f64,
        rng: &mut R,
    ) -> Self
    where
        R: Rng + ?Sized,
    {
        Neuron {
            output: 0.0,
            gradient: 0.0,
            output_weights: Array1::random_using(outputs, Uniform::new(0.0, 1.0), rng),
            index,
            eta,
            activation,
        }
    }

    pub fn output(&self) -> f64 {
        self.output
    }

    pub(crate) fn set_output(&mut self, output: f64) {
        self.output = output;
    }

    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    pub fn output_weights(&self) -> ArrayView1<'_, f64> {
        self.output_weights.view()
    }

    /// Position of this neuron within its layer.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Recompute `output` from the outputs of `prev` and the weights that
    /// connect them to this neuron. Every neuron of `prev` contributes,
    /// including its bias neuron.
    pub(crate) fn forward(&mut self, prev: &Layer<F>) {
        let sum: f64 = prev
            .iter()
            .map(|n| n.output * n.output_weights[self.index])
            .sum();
        self.output = self.activation.f(sum);
    }

    /// Gradient for a neuron of the terminal layer, given its training label.
    pub(crate) fn grad_output_layer(&mut self, target: f64) {
        let delta = target - self.output;
        self.gradient = delta * self.activation.df(self.output);
    }

    /// Gradient for a neuron of a hidden layer, given the already-computed
    /// gradients of `next`. The bias neuron of `next` is not summed over.
    pub(crate) fn grad_hidden_layer(&mut self, next: &Layer<F>) {
        let dow = self.sum_derivatives_of_weights(next);
        self.gradient = dow * self.activation.df(self.output);
    }

    fn sum_derivatives_of_weights(&self, next: &Layer<F>) -> f64 {
        (0..next.len() - 1)
            .map(|i| self.output_weights[i] * next.get(i).gradient)
            .sum()
    }

    /// Adjust the weights feeding into this neuron. Those live in the
    /// neurons of `prev`, so this mutates `prev` and leaves `self` alone.
    pub(crate) fn update_input_weights(&self, prev: &mut Layer<F>) {
        for n in prev.iter_mut() {
            n.output_weights[self.index] += self.eta * n.output * self.gradient;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::Tanh;

    fn layer_of(activation: &Rc<Tanh>, rows: Vec<(f64, Vec<f64>)>) -> Layer<Tanh> {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layer = Layer::with_capacity(rows.len());
        for (i, (output, weights)) in rows.into_iter().enumerate() {
            let mut n = Neuron::new(weights.len(), i, Rc::clone(activation), 0.5, &mut rng);
            n.output = output;
            n.output_weights = Array1::from(weights);
            layer.push(n);
        }
        layer
    }

    #[test]
    fn weights_are_uniform_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(17);
        let n = Neuron::new(1000, 3, Rc::new(Tanh), 0.1, &mut rng);
        assert_eq!(n.output_weights().len(), 1000);
        assert!(n.output_weights().iter().all(|&w| (0.0..1.0).contains(&w)));
        assert_eq!(n.output(), 0.0);
        assert_eq!(n.gradient(), 0.0);
        assert_eq!(n.index(), 3);
        assert_eq!(n.eta(), 0.1);

        let terminal = Neuron::new(0, 0, Rc::new(Tanh), 0.1, &mut rng);
        assert!(terminal.output_weights().is_empty());
    }

    #[test]
    fn forward_uses_own_column_of_previous_weights() {
        let tanh = Rc::new(Tanh);
        let prev = layer_of(
            &tanh,
            vec![(1.0, vec![0.1, 0.2]), (2.0, vec![0.3, 0.4]), (0.0, vec![0.9, 0.9])],
        );
        let mut rng = StdRng::seed_from_u64(1);
        let mut n = Neuron::new(0, 1, Rc::clone(&tanh), 0.5, &mut rng);
        n.forward(&prev);
        assert_eq!(n.output(), (1.0f64 * 0.2 + 2.0 * 0.4 + 0.0 * 0.9).tanh());
    }

    #[test]
    fn output_gradient() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut n = Neuron::new(0, 0, Rc::new(Tanh), 0.5, &mut rng);
        n.output = 0.25;
        n.grad_output_layer(1.0);
        let y = 0.25f64.tanh();
        assert_eq!(n.gradient(), 0.75 * (1.0 - y * y));
    }

    #[test]
    fn hidden_gradient_skips_next_bias() {
        let tanh = Rc::new(Tanh);
        let mut next = layer_of(&tanh, vec![(0.0, vec![]), (0.0, vec![]), (0.0, vec![])]);
        next.get_mut(0).gradient = 2.0;
        next.get_mut(1).gradient = -1.0;
        next.get_mut(2).gradient = 100.0;

        let mut rng = StdRng::seed_from_u64(3);
        let mut n = Neuron::new(2, 0, Rc::clone(&tanh), 0.5, &mut rng);
        n.output_weights = array![0.5, 0.25];
        n.output = 0.1;
        n.grad_hidden_layer(&next);
        let dow = 0.5 * 2.0 + 0.25 * -1.0;
        let y = 0.1f64.tanh();
        assert_eq!(n.gradient(), dow * (1.0 - y * y));
    }

    #[test]
    fn update_writes_previous_layer_weights() {
        let tanh = Rc::new(Tanh);
        let mut prev = layer_of(
            &tanh,
            vec![(1.0, vec![0.1, 0.2]), (0.5, vec![0.3, 0.4]), (0.0, vec![0.6, 0.7])],
        );
        let mut rng = StdRng::seed_from_u64(4);
        let mut n = Neuron::new(0, 1, Rc::clone(&tanh), 0.5, &mut rng);
        n.gradient = 0.2;
        n.update_input_weights(&mut prev);

        assert_eq!(prev.get(0).output_weights(), array![0.1, 0.2 + 0.5 * 1.0 * 0.2]);
        assert_eq!(prev.get(1).output_weights(), array![0.3, 0.4 + 0.5 * 0.5 * 0.2]);
        // zero output, zero change
        assert_eq!(prev.get(2).output_weights(), array![0.6, 0.7]);
    }
}
