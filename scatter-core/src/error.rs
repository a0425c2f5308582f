use thiserror::Error;

/// Failures reported by region construction and scattering.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScatterError {
    /// The placement region has a non-positive span on at least one axis.
    #[error("placement region is empty: {width:.1} x {height:.1}")]
    EmptyRegion { width: f32, height: f32 },

    /// The attempt budget ran out before every marker was seated.
    #[error("seated {placed} of {requested} markers after {attempts} attempts")]
    AttemptsExhausted {
        requested: usize,
        placed: usize,
        attempts: u32,
    },
}
