pub mod events;
pub mod resources;
pub mod systems;
pub mod ui;

use crate::comparison::events::*;
use crate::comparison::resources::*;
use crate::comparison::systems::*;
use crate::comparison::ui::render_comparison_ui;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct ComparisonPlugin;

impl Plugin for ComparisonPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RecomputeComparisonEvent>()
            .add_message::<ReloadConfigEvent>()
            .init_resource::<ComparisonSettings>()
            .init_resource::<CurrentComparison>()
            .add_systems(Startup, request_initial_comparison)
            .add_systems(Update, (handle_reload_config, recompute_comparison).chain())
            .add_systems(EguiPrimaryContextPass, render_comparison_ui);
    }
}
