//! Error metrics.

use ndarray::prelude::*;
use ndarray::Zip;

use crate::{ActivationFn, Network, NetworkError, Result};

/// Root-mean-square error of `network` over the rows of `x` and `y`.
///
/// Every row of `x` is run through [`Network::predict`], so this overwrites
/// the network's outputs but never its weights. The mean is taken over all
/// output units of all examples. An empty set has error 0.
pub fn rms_error<F: ActivationFn>(
    network: &mut Network<F>,
    x: ArrayView2<'_, f64>,
    y: ArrayView2<'_, f64>,
) -> Result<f64> {
    if x.nrows() != y.nrows() {
        return Err(NetworkError::DatasetLength {
            inputs: x.nrows(),
            targets: y.nrows(),
        });
    }

    let mut total = 0.0;
    let mut count = 0;
    for (xj, yj) in x.rows().into_iter().zip(y.rows()) {
        let yh = network.predict(xj)?;
        if yh.len() != yj.len() {
            return Err(NetworkError::TargetShape {
                expected: yh.len(),
                actual: yj.len(),
            });
        }
        Zip::from(&yj).and(&yh).for_each(|&y, &yh| {
            let delta = y - yh;
            total += delta * delta;
        });
        count += yj.len();
    }

    if count == 0 {
        Ok(0.0)
    } else {
        Ok((total / count as f64).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::Tanh;

    #[test]
    fn matches_hand_computation() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut net = Network::with_rng(&[2, 3, 1], Tanh, 0.15, &mut rng).unwrap();
        let x = array![[0.0, 1.0], [1.0, 1.0], [0.5, 0.25]];
        let y = array![[1.0], [0.0], [0.5]];

        let mut expected = 0.0;
        for (xj, yj) in x.rows().into_iter().zip(y.rows()) {
            let d = yj[0] - net.predict(xj).unwrap()[0];
            expected += d * d;
        }
        let expected = (expected / 3.0f64).sqrt();

        let actual = rms_error(&mut net, x.view(), y.view()).unwrap();
        assert!((actual - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_inputs_without_bias_give_zero_output() {
        // All-zero input and a dead bias mean every sum is 0, and tanh(0) = 0.
        let mut rng = StdRng::seed_from_u64(12);
        let mut net = Network::with_rng(&[2, 4, 4, 1], Tanh, 0.15, &mut rng).unwrap();
        let x = array![[0.0, 0.0]];
        assert_eq!(
            rms_error(&mut net, x.view(), array![[0.0]].view()).unwrap(),
            0.0
        );
        assert_eq!(
            rms_error(&mut net, x.view(), array![[0.5]].view()).unwrap(),
            0.5
        );
    }

    #[test]
    fn empty_set() {
        let mut net = Network::new(&[2, 1], Tanh, 0.15).unwrap();
        let x = Array2::<f64>::zeros((0, 2));
        let y = Array2::<f64>::zeros((0, 1));
        assert_eq!(rms_error(&mut net, x.view(), y.view()).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_rows() {
        let mut net = Network::new(&[2, 1], Tanh, 0.15).unwrap();
        let x = array![[0.0, 1.0]];
        let y = Array2::<f64>::zeros((0, 1));
        assert!(rms_error(&mut net, x.view(), y.view()).is_err());
    }
}
