/// The tick orchestrator and progression controller.
///
/// One call to [`tick`] advances the simulation by a single frame:
/// projectile and enemy movement, wave spawning, collision resolution,
/// timer/lifetime decay, then the level-up check.  All randomness comes
/// through the injected `rng`, so a seeded generator reproduces a run's
/// decisions exactly (useful in tests).
///
/// Input is not part of the tick: the shell drains its buffered commands
/// through [`World::apply`] first, then calls `tick`, then renders from
/// [`World::snapshot`].

use rand::Rng;

use crate::behavior::update_enemies;
use crate::collision;
use crate::entities::{Archetype, GameStatus, HEIGHT};
use crate::spawner::{spawn_boss, spawn_interval, spawn_wave};
use crate::world::{World, MAX_HP};

/// Build a fresh world for the chosen archetype with the opening wave
/// already on the field.
pub fn init_world(archetype: Archetype, rng: &mut impl Rng) -> World {
    let mut world = World::new(archetype);
    spawn_wave(&mut world, rng);
    world
}

/// Advance the simulation by one frame.
pub fn tick(world: &mut World, rng: &mut impl Rng) {
    if world.status != GameStatus::Playing {
        return;
    }
    world.tick_count += 1;

    // Power-up and shot timers count down first, so an effect granted later
    // this tick keeps its full duration.
    if world.rapid_fire_timer > 0 {
        world.rapid_fire_timer -= 1;
    }
    if world.damage_boost_timer > 0 {
        world.damage_boost_timer -= 1;
    }
    if world.shoot_cooldown > 0 {
        world.shoot_cooldown -= 1;
    }

    // ── 1. Movement & behavior ───────────────────────────────────────────────
    for b in &mut world.bullets {
        b.y += b.dy;
    }
    world.bullets.retain(|b| b.y >= 1 && b.y < HEIGHT - 1);

    for bm in &mut world.bombs {
        bm.y += bm.dy;
    }
    world.bombs.retain(|b| b.y < HEIGHT - 1);

    update_enemies(
        &mut world.enemies,
        &world.player,
        &mut world.laser,
        &mut world.bombs,
        world.tick_count,
        world.level,
        rng,
    );

    // ── 2. Wave spawn gate ───────────────────────────────────────────────────
    if world.tick_count % spawn_interval(world.level) == 0 {
        spawn_wave(world, rng);
    }

    // ── 3. Collision & damage ────────────────────────────────────────────────
    collision::resolve(world, rng);
    if world.status == GameStatus::GameOver {
        return;
    }

    // ── 4. Lifetime decay ────────────────────────────────────────────────────
    decay_lifetimes(world);

    if world.player.hp <= 0 {
        world.status = GameStatus::GameOver;
        return;
    }

    // ── 5. Progression ───────────────────────────────────────────────────────
    check_level_up(world, rng);
}

fn decay_lifetimes(world: &mut World) {
    for ex in &mut world.explosions {
        ex.life -= 1;
    }
    world.explosions.retain(|ex| ex.life > 0);

    for item in &mut world.items {
        item.life -= 1;
    }
    world.items.retain(|item| item.life > 0);

    if world.laser.active {
        world.laser.life -= 1;
        if world.laser.life <= 0 {
            world.laser.active = false;
        }
    }
}

/// Score thresholds sit at `level * 200`.  Crossing one raises the level,
/// heals one hp, dumps two catch-up waves, and — every third level —
/// brings in a boss.
fn check_level_up(world: &mut World, rng: &mut impl Rng) {
    if world.score < (world.level as u32) * 200 {
        return;
    }
    world.level += 1;
    world.player.hp = (world.player.hp + 1).min(MAX_HP);
    spawn_wave(world, rng);
    spawn_wave(world, rng);
    if world.level % 3 == 0 {
        spawn_boss(world);
    }
}
