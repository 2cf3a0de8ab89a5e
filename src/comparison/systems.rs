use crate::comparison::events::*;
use crate::comparison::resources::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use geostrophic::{Comparison, convergence_ratio};

pub fn request_initial_comparison(mut recompute_events: MessageWriter<RecomputeComparisonEvent>) {
    recompute_events.write(RecomputeComparisonEvent);
}

pub fn handle_reload_config(
    mut reload_events: MessageReader<ReloadConfigEvent>,
    mut settings: ResMut<ComparisonSettings>,
    mut recompute_events: MessageWriter<RecomputeComparisonEvent>,
) {
    if reload_events.read().count() == 0 {
        return;
    }

    match geostrophic::reload_config() {
        Ok(config) => {
            settings.intervals = config.domain.intervals;
            recompute_events.write(RecomputeComparisonEvent);
        }
        Err(err) => warn!("Config reload failed, keeping current scenario: {}", err),
    }
}

pub fn recompute_comparison(
    mut recompute_events: MessageReader<RecomputeComparisonEvent>,
    settings: Res<ComparisonSettings>,
    mut current: ResMut<CurrentComparison>,
) {
    // Several requests in one frame collapse into a single computation
    if recompute_events.read().count() == 0 {
        return;
    }

    let mut config = geostrophic::get_config();
    config.domain.intervals = settings.intervals;

    match Comparison::for_scenario(&config) {
        Ok(comparison) => {
            log_comparison(&comparison);
            current.convergence = convergence_ratio(&config).ok().flatten();
            current.comparison = Some(comparison);
            current.failure = None;
        }
        Err(err) => {
            warn!("Geostrophic wind computation failed: {}", err);
            current.comparison = None;
            current.convergence = None;
            current.failure = Some(err.to_string());
        }
    }
}

fn log_comparison(comparison: &Comparison) {
    info!(
        "Geostrophic wind with {} intervals, max error {:.3e}",
        comparison.intervals,
        comparison.max_abs_error()
    );
    for p in &comparison.points {
        debug!(
            "y = {:>10.1} m  computed = {:>10.5}  analytic = {:>10.5}  error = {:.3e}",
            p.altitude, p.computed, p.analytic, p.abs_error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(intervals: usize) -> App {
        let mut app = App::new();
        app.add_message::<RecomputeComparisonEvent>()
            .add_message::<ReloadConfigEvent>()
            .insert_resource(ComparisonSettings { intervals })
            .init_resource::<CurrentComparison>()
            .add_systems(Update, (handle_reload_config, recompute_comparison).chain());
        app
    }

    #[test]
    fn test_nothing_is_computed_without_request() {
        let mut app = test_app(10);
        app.update();

        let current = app.world().resource::<CurrentComparison>();
        assert!(current.comparison.is_none());
        assert!(current.failure.is_none());
    }

    #[test]
    fn test_request_computes_comparison() {
        let mut app = test_app(12);
        app.world_mut().write_message(RecomputeComparisonEvent);
        app.update();

        let current = app.world().resource::<CurrentComparison>();
        let comparison = current.comparison.as_ref().unwrap();
        assert_eq!(comparison.intervals, 12);
        assert_eq!(comparison.points.len(), 13);
        assert!(current.convergence.is_some());
        assert!(current.failure.is_none());
    }

    #[test]
    fn test_zero_intervals_reports_failure() {
        let mut app = test_app(0);
        app.world_mut().write_message(RecomputeComparisonEvent);
        app.update();

        let current = app.world().resource::<CurrentComparison>();
        assert!(current.comparison.is_none());
        assert_eq!(
            current.failure.as_deref(),
            Some("division by zero: interval count is zero")
        );
    }
}
