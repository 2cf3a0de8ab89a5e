mod systems;

use crate::core::camera::systems::*;
use bevy::prelude::*;

/// The camera egui draws the plots onto
#[derive(Component)]
pub struct MainCamera;

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}
