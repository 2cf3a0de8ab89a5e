mod comparison;
mod core;
mod plot;

use crate::comparison::ComparisonPlugin;
use crate::core::camera::CameraPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub struct GeoWindPlugin;

impl Plugin for GeoWindPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins((CameraPlugin, ComparisonPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
