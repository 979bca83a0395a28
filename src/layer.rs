use std::slice;

use crate::Neuron;

/// An ordered row of neurons. The last one is the layer's bias neuron.
///
/// Neurons are only ever appended while the network is being built, so the
/// indices handed out at construction stay valid for the life of the layer.
#[derive(Debug)]
pub struct Layer<F> {
    neurons: Vec<Neuron<F>>,
}

impl<F> Layer<F> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Layer {
            neurons: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, neuron: Neuron<F>) {
        self.neurons.push(neuron);
    }

    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &Neuron<F> {
        &self.neurons[index]
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> &mut Neuron<F> {
        &mut self.neurons[index]
    }

    /// Number of neurons, counting the bias neuron.
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Neuron<F>> {
        self.neurons.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> slice::IterMut<'_, Neuron<F>> {
        self.neurons.iter_mut()
    }

    /// The bias neuron, i.e. the last one.
    pub fn bias(&self) -> &Neuron<F> {
        &self.neurons[self.neurons.len() - 1]
    }

    pub(crate) fn bias_mut(&mut self) -> &mut Neuron<F> {
        let last = self.neurons.len() - 1;
        &mut self.neurons[last]
    }
}

impl<'a, F> IntoIterator for &'a Layer<F> {
    type Item = &'a Neuron<F>;
    type IntoIter = slice::Iter<'a, Neuron<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.neurons.iter()
    }
}
