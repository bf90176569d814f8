use super::types::{GameEvent, WorldEvent};
use crate::domain::tuning::ArenaTuning;
use crate::domain::{World, WorldError};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{error, info};

/// The single task that owns the world.
///
/// Connection tasks only ever talk to it through `input_rx`; every state
/// change leaves through `world_tx`. Mutations therefore never overlap, and
/// per-connection event order is whatever order the channel delivers.
///
/// Client events are applied as they arrive and each one triggers its own
/// broadcast; the fixed-rate interval advances bullets on its own clock.
/// The loop exits when every input sender is gone, or on a broken transport
/// invariant (see below).
pub async fn world_task(
    mut input_rx: mpsc::Receiver<GameEvent>,
    world_tx: broadcast::Sender<WorldEvent>,
    tick_interval: Duration,
) {
    let mut world = World::new(ArenaTuning::default());
    let mut interval = tokio::time::interval(tick_interval);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                world.advance_bullets();
                // Sent every tick, empty or not; broadcast::send never blocks
                // on client I/O.
                let _ = world_tx.send(WorldEvent::BulletsAdvanced(world.snapshot_bullets()));
            }

            event = input_rx.recv() => {
                let Some(event) = event else {
                    // All connection handles dropped; nothing can ever reach
                    // the world again.
                    info!("input channel closed; world loop exiting");
                    break;
                };

                match event {
                    GameEvent::Join { conn_id } => {
                        match world.add_player(conn_id) {
                            Ok(player) => {
                                info!(conn_id, x = player.x, y = player.y, "player joined");
                            }
                            Err(WorldError::DuplicateId(id)) => {
                                // Connection ids are unique for the process
                                // lifetime; a duplicate means the id generator
                                // is broken and player ownership can no longer
                                // be trusted.
                                error!(conn_id = id, "duplicate connection id; world loop exiting");
                                break;
                            }
                        }
                        let _ = world_tx.send(WorldEvent::PlayersChanged(world.snapshot_players()));
                    }
                    GameEvent::Leave { conn_id } => {
                        world.remove_player(conn_id);
                        info!(conn_id, "player left");
                        let _ = world_tx.send(WorldEvent::PlayersChanged(world.snapshot_players()));
                    }
                    GameEvent::Move { conn_id, x, y } => {
                        // A move that races its own disconnect is dropped
                        // without a broadcast.
                        if world.update_player_position(conn_id, x, y) {
                            let _ = world_tx
                                .send(WorldEvent::PlayersChanged(world.snapshot_players()));
                        }
                    }
                    GameEvent::Shoot { conn_id: _, bullet } => {
                        world.add_bullet(bullet);
                        let _ = world_tx.send(WorldEvent::BulletFired(bullet));
                    }
                }
            }
        }
    }
}
