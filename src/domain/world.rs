use crate::domain::tuning::ArenaTuning;
use rand::Rng;
use std::collections::HashMap;

/// Identifier the transport layer assigns to a connection for its lifetime.
pub type ConnId = u64;

/// A connected player's state as the server knows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Rendered size in pixels, constant once spawned.
    pub size: f32,
}

/// A bullet in flight. Velocity is in pixels per tick, exactly as supplied by
/// the firing client; no owner reference is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
}

/// Errors surfaced by world mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum WorldError {
    /// The transport layer handed out the same connection id twice.
    DuplicateId(ConnId),
}

/// Authoritative world state: one player per live connection plus the ordered
/// set of in-flight bullets.
///
/// A single task owns the instance and applies every mutation, so none of the
/// methods need interior locking.
#[derive(Debug)]
pub struct World {
    tuning: ArenaTuning,
    players: HashMap<ConnId, Player>,
    bullets: Vec<Bullet>,
}

impl World {
    pub fn new(tuning: ArenaTuning) -> Self {
        Self {
            tuning,
            players: HashMap::new(),
            bullets: Vec::new(),
        }
    }

    /// Spawns a player at a random position inside the arena and registers it
    /// under the connection id.
    pub fn add_player(&mut self, id: ConnId) -> Result<Player, WorldError> {
        if self.players.contains_key(&id) {
            return Err(WorldError::DuplicateId(id));
        }

        let mut rng = rand::thread_rng();
        let player = Player {
            x: rng.gen_range(0.0..self.tuning.width),
            y: rng.gen_range(0.0..self.tuning.height),
            size: self.tuning.player_size,
        };
        self.players.insert(id, player.clone());
        Ok(player)
    }

    /// Removes the player for this connection. No-op if it was never added or
    /// already removed.
    pub fn remove_player(&mut self, id: ConnId) {
        self.players.remove(&id);
    }

    /// Moves a player to exactly (x, y). Positions are client-authoritative,
    /// so no clamping or plausibility checks happen here.
    ///
    /// Returns whether a live entry was updated. A missing entry is a late
    /// event from an already-disconnected client and must stay silent.
    pub fn update_player_position(&mut self, id: ConnId, x: f32, y: f32) -> bool {
        match self.players.get_mut(&id) {
            Some(player) => {
                player.x = x;
                player.y = y;
                true
            }
            None => false,
        }
    }

    /// Appends a bullet to the in-flight set.
    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    /// Advances every bullet by its velocity, then drops the ones that left
    /// the arena on either axis.
    pub fn advance_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.x += bullet.dx;
            bullet.y += bullet.dy;
        }

        // Rebuild instead of deleting by index so a single pass removes every
        // out-of-bounds bullet.
        let (width, height) = (self.tuning.width, self.tuning.height);
        self.bullets
            .retain(|b| b.x >= 0.0 && b.x <= width && b.y >= 0.0 && b.y <= height);
    }

    /// Read-only copy of the player mapping for broadcast.
    pub fn snapshot_players(&self) -> HashMap<ConnId, Player> {
        self.players.clone()
    }

    /// Read-only copy of the in-flight bullets for broadcast.
    pub fn snapshot_bullets(&self) -> Vec<Bullet> {
        self.bullets.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(ArenaTuning::default())
    }

    #[test]
    fn spawns_land_in_bounds_with_fixed_size() {
        let mut world = world();
        for id in 0..100 {
            let player = world.add_player(id).expect("fresh id");
            assert!((0.0..800.0).contains(&player.x));
            assert!((0.0..600.0).contains(&player.y));
            assert_eq!(player.size, 20.0);
        }
    }

    #[test]
    fn duplicate_connection_id_is_rejected() {
        let mut world = world();
        world.add_player(7).expect("fresh id");
        assert_eq!(world.add_player(7), Err(WorldError::DuplicateId(7)));
        assert_eq!(world.snapshot_players().len(), 1);
    }

    #[test]
    fn player_set_tracks_connects_and_disconnects() {
        let mut world = world();
        for id in [1, 2, 3] {
            world.add_player(id).expect("fresh id");
        }
        world.remove_player(2);

        let players = world.snapshot_players();
        let mut ids: Vec<ConnId> = players.keys().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn removing_unknown_player_is_a_noop() {
        let mut world = world();
        world.add_player(1).expect("fresh id");
        world.remove_player(99);
        assert_eq!(world.snapshot_players().len(), 1);
    }

    #[test]
    fn move_sets_the_exact_position_without_clamping() {
        let mut world = world();
        world.add_player(1).expect("fresh id");

        assert!(world.update_player_position(1, 100.0, 200.0));
        let players = world.snapshot_players();
        assert_eq!(players[&1].x, 100.0);
        assert_eq!(players[&1].y, 200.0);

        // Out-of-bounds positions are stored verbatim.
        assert!(world.update_player_position(1, -50.0, 9999.0));
        let players = world.snapshot_players();
        assert_eq!(players[&1].x, -50.0);
        assert_eq!(players[&1].y, 9999.0);
        assert_eq!(players[&1].size, 20.0);
    }

    #[test]
    fn move_on_unknown_id_is_silent_and_mutates_nothing() {
        let mut world = world();
        world.add_player(1).expect("fresh id");
        let before = world.snapshot_players();

        assert!(!world.update_player_position(42, 10.0, 10.0));
        assert_eq!(world.snapshot_players(), before);
    }

    #[test]
    fn bullets_advance_by_their_velocity_each_tick() {
        let mut world = world();
        world.add_bullet(Bullet {
            x: 10.0,
            y: 10.0,
            dx: 5.0,
            dy: 0.0,
        });

        for _ in 0..3 {
            world.advance_bullets();
        }

        let bullets = world.snapshot_bullets();
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].x, 25.0);
        assert_eq!(bullets[0].y, 10.0);
    }

    #[test]
    fn bullet_is_dropped_on_the_tick_it_leaves_the_arena() {
        let mut world = world();
        world.add_bullet(Bullet {
            x: 10.0,
            y: 10.0,
            dx: 5.0,
            dy: 0.0,
        });

        // 158 ticks put the bullet at x = 800, still inside the inclusive
        // bound.
        for _ in 0..158 {
            world.advance_bullets();
        }
        let bullets = world.snapshot_bullets();
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].x, 800.0);

        // The 159th tick moves it to 805 and removes it.
        world.advance_bullets();
        assert!(world.snapshot_bullets().is_empty());
    }

    #[test]
    fn bullet_exits_on_the_y_axis_too() {
        let mut world = world();
        world.add_bullet(Bullet {
            x: 5.0,
            y: 5.0,
            dx: 0.0,
            dy: -10.0,
        });

        world.advance_bullets();
        assert!(world.snapshot_bullets().is_empty());
    }

    #[test]
    fn bullets_from_multiple_shooters_are_all_retained_in_order() {
        let mut world = world();
        let first = Bullet {
            x: 100.0,
            y: 100.0,
            dx: 1.0,
            dy: 0.0,
        };
        let second = Bullet {
            x: 200.0,
            y: 200.0,
            dx: 0.0,
            dy: 1.0,
        };
        world.add_bullet(first);
        world.add_bullet(second);

        assert_eq!(world.snapshot_bullets(), vec![first, second]);
    }

    #[test]
    fn advancing_an_empty_bullet_set_is_fine() {
        let mut world = world();
        world.advance_bullets();
        assert!(world.snapshot_bullets().is_empty());
    }
}
