use crate::comparison::events::*;
use crate::comparison::resources::*;
use crate::plot::{draw_scatter, error_plot, suptitle, wind_plot};
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

const MAX_INTERVALS: usize = 200;

pub fn render_comparison_ui(
    mut contexts: EguiContexts,
    mut settings: ResMut<ComparisonSettings>,
    current: Res<CurrentComparison>,
    mut recompute_events: MessageWriter<RecomputeComparisonEvent>,
    mut reload_events: MessageWriter<ReloadConfigEvent>,
    mut app_exit_events: MessageWriter<AppExit>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let shown_intervals = current
        .comparison
        .as_ref()
        .map_or(settings.intervals, |c| c.intervals);

    egui::TopBottomPanel::top("controls_panel").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.vertical_centered(|ui| {
            ui.heading(suptitle(shown_intervals));
        });
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Intervals");
            if ui
                .add(egui::Slider::new(&mut settings.intervals, 1..=MAX_INTERVALS))
                .changed()
            {
                recompute_events.write(RecomputeComparisonEvent);
            }

            ui.separator();

            if let Some(ratio) = current.convergence {
                ui.label(format!("Error ratio N → 2N: {:.2}", ratio));
                ui.separator();
            }

            if ui.button("Reload config").clicked() {
                reload_events.write(ReloadConfigEvent);
            }
            if ui.button("Quit").clicked() {
                app_exit_events.write(AppExit::Success);
            }
        });
        ui.add_space(6.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        if let Some(failure) = &current.failure {
            ui.colored_label(egui::Color32::LIGHT_RED, failure);
            return;
        }
        let Some(comparison) = &current.comparison else {
            ui.label("Computing...");
            return;
        };

        let winds = wind_plot(comparison);
        let errors = error_plot(comparison);
        ui.columns(2, |columns| {
            draw_scatter(&mut columns[0], &winds);
            draw_scatter(&mut columns[1], &errors);
        });
    });
}
