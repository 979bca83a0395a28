mod traits;
pub use traits::ActivationFn;

mod activation;
pub use activation::{Sigmoid, Tanh};

mod config;
pub use config::Corrections;

mod error;
pub use error::{NetworkError, Result};

mod neuron;
pub use neuron::Neuron;

mod layer;
pub use layer::Layer;

mod network;
pub use network::Network;

pub mod gates;
pub mod loss;
