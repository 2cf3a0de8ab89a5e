use bevy::prelude::*;

#[derive(Message)]
pub struct RecomputeComparisonEvent;

#[derive(Message)]
pub struct ReloadConfigEvent;
