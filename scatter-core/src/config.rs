/// Tuning for the rejection-sampling scatter.
#[derive(Clone, Copy, Debug)]
pub struct ScatterConfig {
    /// Minimum Euclidean distance between any two accepted markers.
    pub min_distance: f32,
    /// Total candidate draws allowed per scatter before giving up.
    pub max_attempts: u32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            min_distance: 100.0,
            max_attempts: 10_000,
        }
    }
}
