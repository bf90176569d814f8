// Wire protocol DTOs and conversions for the public WebSocket messages.

use crate::domain::{Bullet, Player};
use crate::use_cases::WorldEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Messages the server sends to connected clients over the WebSocket.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ServerMessage {
    // Assigned identity for the connection, sent once after the upgrade.
    Identity { id: String },
    // Full player mapping, sent after every join, leave, and move.
    UpdatePlayers(HashMap<String, PlayerDto>),
    // A single freshly fired bullet.
    BulletCreated(BulletDto),
    // The whole in-flight bullet set, sent on every simulation tick.
    BulletsTick(Vec<BulletDto>),
}

/// Messages the client sends to the server over the WebSocket.
///
/// Missing or non-numeric fields fail deserialization and the message is
/// dropped by the connection loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    Move(MovePayload),
    Shoot(BulletDto),
}

/// Absolute position reported by a `move` message.
#[derive(Debug, Clone, Deserialize)]
pub struct MovePayload {
    pub x: f32,
    pub y: f32,
}

/// Bullet state on the wire, both for inbound `shoot` payloads and outbound
/// broadcasts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletDto {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

impl From<BulletDto> for Bullet {
    fn from(dto: BulletDto) -> Self {
        Self {
            x: dto.x,
            y: dto.y,
            dx: dto.dx,
            dy: dto.dy,
        }
    }
}

impl From<&Bullet> for BulletDto {
    fn from(bullet: &Bullet) -> Self {
        Self {
            x: bullet.x,
            y: bullet.y,
            dx: bullet.dx,
            dy: bullet.dy,
        }
    }
}

/// Player state on the wire, keyed by the connection id string.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            x: player.x,
            y: player.y,
            size: player.size,
        }
    }
}

impl From<WorldEvent> for ServerMessage {
    fn from(event: WorldEvent) -> Self {
        match event {
            WorldEvent::PlayersChanged(players) => ServerMessage::UpdatePlayers(
                players
                    .iter()
                    .map(|(id, player)| (id.to_string(), PlayerDto::from(player)))
                    .collect(),
            ),
            WorldEvent::BulletFired(bullet) => ServerMessage::BulletCreated(BulletDto::from(&bullet)),
            WorldEvent::BulletsAdvanced(bullets) => {
                ServerMessage::BulletsTick(bullets.iter().map(BulletDto::from).collect())
            }
        }
    }
}
