/// Collision and damage resolution.
///
/// Runs exactly once per tick, after movement and spawning, in a fixed
/// order so coinciding hazards resolve consistently:
///
///   1. bullets × enemies      (damage, kills, scoring, item drops)
///   2. bombs × player         (shield or loss)
///   3. items × player         (pickup effects)
///   4. laser × player         (shield or loss)
///   5. enemies × player       (melee; first unshielded hit ends the run)
///   6. enemy off-bottom purge (silent)
///
/// Removal is mark-and-compact throughout: indices are collected while
/// iterating, then applied in one pass (descending where index-based), so
/// duplicate or stale marks never corrupt the survivors.

use rand::Rng;

use crate::entities::{EnemyType, Explosion, GameStatus, ItemKind, EXPLOSION_TICKS, HEIGHT};
use crate::spawner::maybe_drop_item;
use crate::world::{World, MAX_HP, POWER_UP_TICKS};

pub fn resolve(world: &mut World, rng: &mut impl Rng) {
    bullets_vs_enemies(world, rng);
    bombs_vs_player(world);
    if world.status == GameStatus::GameOver {
        return;
    }
    items_vs_player(world);
    laser_vs_player(world);
    if world.status == GameStatus::GameOver {
        return;
    }
    enemies_vs_player(world);
    if world.status == GameStatus::GameOver {
        return;
    }
    purge_bottom_enemies(world);
}

/// A bullet hits an enemy when both axes are within 1 cell.  Every
/// simultaneous pair resolves in the same tick; a bullet is consumed by
/// its first hit, and a killed enemy absorbs no further bullets.
fn bullets_vs_enemies(world: &mut World, rng: &mut impl Rng) {
    let boost = if world.damage_boost_timer > 0 { 1 } else { 0 };
    let mut used_bullets: Vec<usize> = Vec::new();
    let mut dead_enemies: Vec<usize> = Vec::new();

    for (bi, bullet) in world.bullets.iter().enumerate() {
        for (ei, enemy) in world.enemies.iter_mut().enumerate() {
            if dead_enemies.contains(&ei) {
                continue;
            }
            if (bullet.x - enemy.x).abs() <= 1 && (bullet.y - enemy.y).abs() <= 1 {
                used_bullets.push(bi);
                enemy.hp -= bullet.damage + boost;
                world.explosions.push(Explosion {
                    x: bullet.x,
                    y: bullet.y,
                    life: EXPLOSION_TICKS / 2,
                });
                if enemy.hp <= 0 {
                    dead_enemies.push(ei);
                    world.score += 10;
                    world.explosions.push(Explosion {
                        x: enemy.x,
                        y: enemy.y,
                        life: EXPLOSION_TICKS,
                    });
                    maybe_drop_item(&mut world.items, enemy.x, enemy.y, rng);
                }
                break; // bullet consumed
            }
        }
    }

    // Descending-index removal keeps the remaining marks valid.
    used_bullets.sort_unstable_by(|a, b| b.cmp(a));
    used_bullets.dedup();
    for bi in used_bullets {
        world.bullets.remove(bi);
    }
    dead_enemies.sort_unstable_by(|a, b| b.cmp(a));
    dead_enemies.dedup();
    for ei in dead_enemies {
        world.enemies.remove(ei);
    }
}

/// A bomb in the player's column within one row is an impact: a shield
/// absorbs it, otherwise the run ends.  Bombs reaching the bottom rows
/// detonate harmlessly.
fn bombs_vs_player(world: &mut World) {
    let px = world.player.x;
    let py = world.player.y;
    let mut bi = world.bombs.len();
    while bi > 0 {
        bi -= 1;
        let bomb = &world.bombs[bi];
        if bomb.x == px && (bomb.y - py).abs() <= 1 {
            world.explosions.push(Explosion { x: px, y: py, life: EXPLOSION_TICKS });
            world.bombs.remove(bi);
            if world.player.shield_count > 0 {
                world.player.shield_count -= 1;
            } else {
                world.status = GameStatus::GameOver;
                return;
            }
            continue;
        }
        if bomb.y >= HEIGHT - 3 {
            world.explosions.push(Explosion { x: bomb.x, y: bomb.y, life: 2 });
            world.bombs.remove(bi);
        }
    }
}

fn items_vs_player(world: &mut World) {
    let px = world.player.x;
    let py = world.player.y;
    let mut ii = world.items.len();
    while ii > 0 {
        ii -= 1;
        let item = &world.items[ii];
        if (item.x - px).abs() <= 1 && (item.y - py).abs() <= 1 {
            match item.kind {
                ItemKind::Health => world.player.hp = (world.player.hp + 1).min(MAX_HP),
                ItemKind::Shield => world.player.shield_count += 1,
                ItemKind::Rapid => world.rapid_fire_timer = POWER_UP_TICKS,
                ItemKind::Damage => world.damage_boost_timer = POWER_UP_TICKS,
            }
            world.items.remove(ii);
        }
    }
}

fn laser_vs_player(world: &mut World) {
    if !world.laser.active || world.laser.life <= 0 {
        return;
    }
    if world.player.y != world.laser.y {
        return;
    }
    if world.player.shield_count > 0 {
        world.player.shield_count -= 1;
        world.explosions.push(Explosion {
            x: world.player.x,
            y: world.player.y,
            life: EXPLOSION_TICKS / 2,
        });
    } else {
        world.explosions.push(Explosion {
            x: world.player.x,
            y: world.player.y,
            life: EXPLOSION_TICKS,
        });
        world.status = GameStatus::GameOver;
    }
}

/// Melee contact.  The proximity window widens for STRONG (3) and BOSS
/// (4).  A shield converts the hit into a kill worth 5 points and the
/// sweep continues; the first unshielded hit in collection order ends
/// the run and short-circuits everything after it.
fn enemies_vs_player(world: &mut World) {
    let mut ei = 0;
    while ei < world.enemies.len() {
        let e = &world.enemies[ei];
        let thresh = match e.kind {
            EnemyType::Strong => 3,
            EnemyType::Boss => 4,
            _ => 2,
        };
        if (e.x - world.player.x).abs() <= thresh && (e.y - world.player.y).abs() <= thresh {
            let (ex, ey) = (e.x, e.y);
            if world.player.shield_count > 0 {
                world.player.shield_count -= 1;
                world.explosions.push(Explosion { x: ex, y: ey, life: EXPLOSION_TICKS });
                world.explosions.push(Explosion {
                    x: world.player.x,
                    y: world.player.y,
                    life: EXPLOSION_TICKS / 2,
                });
                world.enemies.remove(ei);
                world.score += 5;
                continue;
            }
            world.explosions.push(Explosion { x: ex, y: ey, life: EXPLOSION_TICKS });
            world.explosions.push(Explosion {
                x: world.player.x,
                y: world.player.y,
                life: EXPLOSION_TICKS,
            });
            world.status = GameStatus::GameOver;
            return;
        }
        ei += 1;
    }
}

/// Enemies that slip past the bottom fled the field: removed with no
/// score and no explosion.
fn purge_bottom_enemies(world: &mut World) {
    world.enemies.retain(|e| e.y < HEIGHT - 3);
}
