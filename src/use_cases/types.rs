// Use-case level inputs/outputs for the game loop.

use crate::domain::{Bullet, ConnId, Player};
use std::collections::HashMap;

/// Events flowing from connection tasks into the world task.
#[derive(Debug, Clone)]
pub enum GameEvent {
    Join { conn_id: ConnId },
    Leave { conn_id: ConnId },
    Move { conn_id: ConnId, x: f32, y: f32 },
    Shoot { conn_id: ConnId, bullet: Bullet },
}

/// World changes fanned out to every connected client.
#[derive(Debug, Clone)]
pub enum WorldEvent {
    /// Full player mapping; emitted after every join, leave, and move.
    PlayersChanged(HashMap<ConnId, Player>),
    /// A single freshly fired bullet, emitted on a shoot event.
    BulletFired(Bullet),
    /// The whole in-flight bullet set after a simulation tick.
    BulletsAdvanced(Vec<Bullet>),
}
