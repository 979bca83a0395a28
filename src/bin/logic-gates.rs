//! Train two small networks as logic gates and report how well they learned.

use anyhow::{Context, Result};
use clap::Parser;
use ndarray::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use backprop::gates::Gate;
use backprop::loss::rms_error;
use backprop::{ActivationFn, Corrections, Network, Sigmoid, Tanh};

#[derive(Parser)]
#[command(about = "Train feed-forward networks on OR, XOR and AND", long_about = None)]
struct Options {
    /// Seed for weight initialization; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Learning rate for both networks
    #[arg(long, default_value_t = 0.15)]
    eta: f64,

    /// Epochs for net 1, a [2, 4, 4, 1] tanh network
    #[arg(long, value_name = "N", default_value_t = 5000)]
    tanh_epochs: usize,

    /// Epochs for net 2, a [2, 10, 1] sigmoid network
    #[arg(long, value_name = "N", default_value_t = 10000)]
    sigmoid_epochs: usize,

    /// Gates to train, in order; repeat for more than one. Default is all three
    #[arg(long = "gate", value_enum)]
    gates: Vec<Gate>,

    /// Hold bias neuron outputs at 1.0
    #[arg(long)]
    live_bias: bool,

    /// Don't compute gradients for hidden bias neurons
    #[arg(long)]
    skip_bias_gradients: bool,

    /// Train for exactly the given number of epochs instead of one more
    #[arg(long)]
    exact_epochs: bool,
}

impl Options {
    fn corrections(&self) -> Corrections {
        Corrections {
            live_bias: self.live_bias,
            skip_bias_gradients: self.skip_bias_gradients,
            exact_epochs: self.exact_epochs,
        }
    }
}

fn build<F: ActivationFn>(
    options: &Options,
    rng: &mut StdRng,
    shape: &[usize],
    activation: F,
    epochs: usize,
) -> Result<Network<F>> {
    let mut net = Network::with_rng(shape, activation, options.eta, rng)
        .with_context(|| format!("error building network with shape {shape:?}"))?;
    net.set_epochs(epochs);
    net.set_corrections(options.corrections());
    Ok(net)
}

fn train<F: ActivationFn>(
    name: &str,
    net: &mut Network<F>,
    x: ArrayView2<'_, f64>,
    y: ArrayView2<'_, f64>,
) -> Result<()> {
    println!("Training {name}...");
    net.fit(x, y)
        .with_context(|| format!("error training {name}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut net1 = build(&options, &mut rng, &[2, 4, 4, 1], Tanh, options.tanh_epochs)?;
    let mut net2 = build(
        &options,
        &mut rng,
        &[2, 10, 1],
        Sigmoid,
        options.sigmoid_epochs,
    )?;

    let gates = if options.gates.is_empty() {
        Gate::ALL.to_vec()
    } else {
        options.gates.clone()
    };

    // Both networks keep their weights from one gate to the next.
    let x = Gate::inputs();
    for (i, gate) in gates.iter().enumerate() {
        if i > 0 {
            println!("-----------");
        }
        let y = gate.targets();
        train("Net 1", &mut net1, x.view(), y.view())?;
        train("Net 2", &mut net2, x.view(), y.view())?;

        println!("{gate} Gate Results:");
        let e1 = rms_error(&mut net1, x.view(), y.view()).context("error evaluating Net 1")?;
        let e2 = rms_error(&mut net2, x.view(), y.view()).context("error evaluating Net 2")?;
        println!("Net 1 RMS Error: {e1}");
        println!("Net 2 RMS Error: {e2}");
    }

    Ok(())
}
