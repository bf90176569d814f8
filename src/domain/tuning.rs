/// Gameplay tuning for the arena world.
///
/// Keep this separate from runtime/server configuration (tick rates, buffer sizes, etc.).

#[derive(Debug, Clone, Copy)]
pub struct ArenaTuning {
    /// Playable width in pixels; spawns land in [0, width).
    pub width: f32,

    /// Playable height in pixels; spawns land in [0, height).
    pub height: f32,

    /// Rendered player square size in pixels, constant for every player.
    pub player_size: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            player_size: 20.0,
        }
    }
}
