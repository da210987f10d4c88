/// The master simulation state.
///
/// One `World` owns every entity collection plus all scalar progression
/// state.  It is constructed at run start, passed explicitly to each
/// subsystem, reset by building a fresh value on restart, and dropped at
/// run end — no ambient globals.

use crate::entities::{
    Archetype, Bomb, Bullet, Enemy, Explosion, GameStatus, InputCommand, Item, LaserHazard,
    Tank, HEIGHT, WIDTH,
};

/// Ticks between enemy waves at level 1; shrinks with level.
pub const BASE_SPAWN_RATE: i32 = 40;

/// Duration of the rapid-fire and damage-boost power-ups, in ticks.
pub const POWER_UP_TICKS: i32 = 600;

/// Hp ceiling for the player (healing never exceeds it).
pub const MAX_HP: i32 = 12;

#[derive(Clone, Debug)]
pub struct World {
    pub player: Tank,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub explosions: Vec<Explosion>,
    pub items: Vec<Item>,
    pub bombs: Vec<Bomb>,
    pub laser: LaserHazard,

    pub score: u32,
    pub level: i32,
    pub tick_count: u64,
    pub status: GameStatus,

    /// Ticks of rapid fire remaining (halves the shot cooldown).
    pub rapid_fire_timer: i32,
    /// Ticks of +1 bullet damage remaining.
    pub damage_boost_timer: i32,
    /// Ticks until the next shot is accepted.
    pub shoot_cooldown: i32,
}

impl World {
    pub fn new(archetype: Archetype) -> Self {
        World {
            player: Tank::new(WIDTH / 2, HEIGHT - 4, archetype),
            bullets: Vec::new(),
            enemies: Vec::new(),
            explosions: Vec::new(),
            items: Vec::new(),
            bombs: Vec::new(),
            laser: LaserHazard::default(),
            score: 0,
            level: 1,
            tick_count: 0,
            status: GameStatus::Playing,
            rapid_fire_timer: 0,
            damage_boost_timer: 0,
            shoot_cooldown: 0,
        }
    }

    pub fn running(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Apply one input command.  Movement is scaled by the archetype speed
    /// and clamped; `Fire` is rate-limited by the shoot cooldown; `Quit`
    /// ends the run.
    pub fn apply(&mut self, cmd: InputCommand) {
        match cmd {
            InputCommand::MoveLeft => self.player.x -= self.player.speed,
            InputCommand::MoveRight => self.player.x += self.player.speed,
            InputCommand::MoveUp => self.player.y -= self.player.speed,
            InputCommand::MoveDown => self.player.y += self.player.speed,
            InputCommand::Fire => self.fire(),
            InputCommand::Quit => self.status = GameStatus::GameOver,
        }
        clamp_player(&mut self.player.x, &mut self.player.y);
    }

    /// Emit one bullet per shot slot, offset symmetrically around the
    /// muzzle: a single shot fires straight, two shots at ±1, three or
    /// more spread evenly.
    fn fire(&mut self) {
        if self.shoot_cooldown > 0 {
            return;
        }
        let p = &self.player;
        let glyph = p.archetype.bullet_glyph();
        for s in 0..p.shot_count {
            let ox = match p.shot_count {
                1 => 0,
                2 => {
                    if s == 0 {
                        -1
                    } else {
                        1
                    }
                }
                n => s - (n - 1) / 2,
            };
            self.bullets.push(Bullet {
                x: p.x + ox,
                y: p.y - 4,
                dy: -1,
                damage: p.shot_damage,
                glyph,
            });
        }
        let mut rate = self.player.fire_rate;
        if self.rapid_fire_timer > 0 {
            rate = (self.player.fire_rate / 2).max(1);
        }
        self.shoot_cooldown = rate;
    }

    /// Read-only view handed to the renderer after each tick.  Borrows the
    /// world, so the shell cannot mutate simulation state through it.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            bullets: &self.bullets,
            enemies: &self.enemies,
            explosions: &self.explosions,
            items: &self.items,
            bombs: &self.bombs,
            laser: self.laser,
            score: self.score,
            level: self.level,
            tick_count: self.tick_count,
            status: self.status,
            rapid_fire_timer: self.rapid_fire_timer,
            damage_boost_timer: self.damage_boost_timer,
        }
    }
}

/// Everything the renderer and HUD need, with no live handle to the world.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub player: &'a Tank,
    pub bullets: &'a [Bullet],
    pub enemies: &'a [Enemy],
    pub explosions: &'a [Explosion],
    pub items: &'a [Item],
    pub bombs: &'a [Bomb],
    pub laser: LaserHazard,
    pub score: u32,
    pub level: i32,
    pub tick_count: u64,
    pub status: GameStatus,
    pub rapid_fire_timer: i32,
    pub damage_boost_timer: i32,
}

/// Keep the player inside the playable region: x ∈ [2, WIDTH-3],
/// y ∈ [2, HEIGHT-4] (the tank sprite needs headroom above the bottom
/// border).
pub fn clamp_player(x: &mut i32, y: &mut i32) {
    *x = (*x).clamp(2, WIDTH - 3);
    *y = (*y).clamp(2, HEIGHT - 4);
}
