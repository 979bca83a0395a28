/// Errors reported by network construction, propagation and training.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("invalid network shape: {0}")]
    InvalidShape(String),

    #[error("learning rate must be finite and positive, got {0}")]
    InvalidLearningRate(f64),

    #[error("input shape mismatch: expected {expected} values, got {actual}")]
    InputShape { expected: usize, actual: usize },

    #[error("target shape mismatch: expected {expected} values, got {actual}")]
    TargetShape { expected: usize, actual: usize },

    #[error("dataset has {inputs} input rows but {targets} target rows")]
    DatasetLength { inputs: usize, targets: usize },
}

pub type Result<T> = std::result::Result<T, NetworkError>;
