use crate::use_cases::{GameEvent, WorldEvent};
use axum::extract::ws::Utf8Bytes;
use tokio::sync::{broadcast, mpsc, watch};

#[derive(Clone)]
pub struct AppState {
    // Inputs flowing from the network into the game loop.
    pub input_tx: mpsc::Sender<GameEvent>,
    // World events produced by the game loop (domain structs).
    pub world_tx: broadcast::Sender<WorldEvent>,
    // Serialized server messages, shared across all connections.
    pub world_bytes_tx: broadcast::Sender<Utf8Bytes>,
    // Latest serialized player mapping for lag recovery.
    pub players_latest_tx: watch::Sender<Utf8Bytes>,
}
