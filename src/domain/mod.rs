// Domain layer: the authoritative world state and its rules.

pub mod tuning;
pub mod world;

pub use world::{Bullet, ConnId, Player, World, WorldError};
