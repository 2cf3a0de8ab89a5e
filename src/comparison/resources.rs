use bevy::prelude::Resource;
use geostrophic::Comparison;

#[derive(Resource, Clone)]
pub struct ComparisonSettings {
    pub intervals: usize,
}

impl Default for ComparisonSettings {
    fn default() -> Self {
        let config = geostrophic::get_config();
        Self {
            intervals: config.domain.intervals,
        }
    }
}

/// Latest finite-difference vs analytic comparison, or why it could not be computed
#[derive(Resource, Default)]
pub struct CurrentComparison {
    pub comparison: Option<Comparison>,
    /// Interior error ratio between `intervals` and twice as many
    pub convergence: Option<f64>,
    pub failure: Option<String>,
}
