use tank_shooter::collision::resolve;
use tank_shooter::entities::*;
use tank_shooter::world::World;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_world() -> World {
    World::new(Archetype::Standard) // player at (50, 26)
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn bullet(x: i32, y: i32) -> Bullet {
    Bullet { x, y, dy: -1, damage: 1, glyph: '|' }
}

// ── Bullets × enemies ─────────────────────────────────────────────────────────

#[test]
fn bullet_kill_removes_scores_and_explodes() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(10, 5, EnemyType::Normal, 1));
    w.bullets.push(bullet(10, 5));
    resolve(&mut w, &mut seeded_rng());

    assert!(w.enemies.is_empty());
    assert!(w.bullets.is_empty());
    assert_eq!(w.score, 10);
    // Half-duration impact flash plus full-duration death explosion.
    let mut lives: Vec<i32> = w.explosions.iter().map(|e| e.life).collect();
    lives.sort_unstable();
    assert_eq!(lives, vec![EXPLOSION_TICKS / 2, EXPLOSION_TICKS]);
    assert!(w.items.len() <= 1); // drop roll evaluated exactly once
}

#[test]
fn bullet_hit_within_one_cell_window() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(10, 5, EnemyType::Normal, 1));
    w.bullets.push(bullet(11, 6)); // |Δx|=1, |Δy|=1
    resolve(&mut w, &mut seeded_rng());
    assert!(w.enemies.is_empty());
}

#[test]
fn bullet_misses_outside_window() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(10, 5, EnemyType::Normal, 1));
    w.bullets.push(bullet(12, 5)); // |Δx|=2
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.enemies.len(), 1);
    assert_eq!(w.bullets.len(), 1);
}

#[test]
fn strong_enemy_survives_single_hit() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(10, 5, EnemyType::Strong, 1));
    w.bullets.push(bullet(10, 5));
    resolve(&mut w, &mut seeded_rng());

    assert_eq!(w.enemies.len(), 1);
    assert_eq!(w.enemies[0].hp, 2);
    assert!(w.bullets.is_empty());
    assert_eq!(w.score, 0);
    assert_eq!(w.explosions.len(), 1);
    assert_eq!(w.explosions[0].life, EXPLOSION_TICKS / 2);
}

#[test]
fn damage_boost_adds_one() {
    let mut w = make_world();
    w.damage_boost_timer = 100;
    w.enemies.push(Enemy::new(10, 5, EnemyType::Strong, 1));
    w.bullets.push(bullet(10, 5));
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.enemies[0].hp, 1); // 3 - (1 + 1)
}

#[test]
fn bullet_consumed_by_first_hit_only() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(10, 5, EnemyType::Normal, 1));
    w.enemies.push(Enemy::new(11, 5, EnemyType::Normal, 1));
    w.bullets.push(bullet(10, 5)); // overlaps both windows
    resolve(&mut w, &mut seeded_rng());

    // Exactly one enemy absorbed the bullet.
    assert_eq!(w.enemies.len(), 1);
    assert_eq!(w.enemies[0].hp, 1);
    assert_eq!(w.score, 10);
}

#[test]
fn simultaneous_pairs_all_resolve() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(10, 5, EnemyType::Normal, 1));
    w.enemies.push(Enemy::new(30, 8, EnemyType::Normal, 1));
    w.bullets.push(bullet(10, 5));
    w.bullets.push(bullet(30, 8));
    resolve(&mut w, &mut seeded_rng());

    assert!(w.enemies.is_empty());
    assert!(w.bullets.is_empty());
    assert_eq!(w.score, 20);
}

// ── Bombs × player ────────────────────────────────────────────────────────────

#[test]
fn shield_absorbs_bomb_impact() {
    let mut w = make_world();
    w.player.shield_count = 1;
    w.bombs.push(Bomb { x: w.player.x, y: w.player.y - 1, dy: 1 });
    resolve(&mut w, &mut seeded_rng());

    assert!(w.bombs.is_empty());
    assert_eq!(w.player.shield_count, 0);
    assert_eq!(w.status, GameStatus::Playing);
    assert_eq!(w.player.hp, 5); // never damages hp
}

#[test]
fn unshielded_bomb_ends_the_run() {
    let mut w = make_world();
    w.bombs.push(Bomb { x: w.player.x, y: w.player.y, dy: 1 });
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.status, GameStatus::GameOver);
}

#[test]
fn bomb_needs_exact_column() {
    let mut w = make_world();
    w.bombs.push(Bomb { x: w.player.x + 1, y: w.player.y, dy: 1 });
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.bombs.len(), 1);
    assert_eq!(w.status, GameStatus::Playing);
}

#[test]
fn bomb_detonates_harmlessly_at_bottom() {
    let mut w = make_world();
    w.bombs.push(Bomb { x: 10, y: HEIGHT - 3, dy: 1 });
    resolve(&mut w, &mut seeded_rng());
    assert!(w.bombs.is_empty());
    assert_eq!(w.explosions.len(), 1);
    assert_eq!(w.explosions[0].life, 2);
    assert_eq!(w.status, GameStatus::Playing);
}

// ── Items × player ────────────────────────────────────────────────────────────

#[test]
fn health_pickup_heals_one_capped() {
    let mut w = make_world();
    w.items.push(Item::new(w.player.x, w.player.y, ItemKind::Health));
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.player.hp, 6);
    assert!(w.items.is_empty());

    w.player.hp = 12;
    w.items.push(Item::new(w.player.x, w.player.y, ItemKind::Health));
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.player.hp, 12);
}

#[test]
fn shield_rapid_and_damage_pickups() {
    let mut w = make_world();
    w.items.push(Item::new(w.player.x - 1, w.player.y, ItemKind::Shield));
    w.items.push(Item::new(w.player.x + 1, w.player.y, ItemKind::Rapid));
    w.items.push(Item::new(w.player.x, w.player.y - 1, ItemKind::Damage));
    resolve(&mut w, &mut seeded_rng());

    assert_eq!(w.player.shield_count, 1);
    assert_eq!(w.rapid_fire_timer, 600);
    assert_eq!(w.damage_boost_timer, 600);
    assert!(w.items.is_empty());
}

#[test]
fn distant_item_stays_put() {
    let mut w = make_world();
    w.items.push(Item::new(5, 5, ItemKind::Health));
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.items.len(), 1);
    assert_eq!(w.player.hp, 5);
}

// ── Laser × player ────────────────────────────────────────────────────────────

#[test]
fn laser_on_player_row_unshielded_is_loss() {
    let mut w = make_world();
    w.laser = LaserHazard { y: w.player.y, life: 5, active: true };
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.status, GameStatus::GameOver);
}

#[test]
fn laser_shielded_consumes_one_shield() {
    let mut w = make_world();
    w.player.shield_count = 2;
    w.laser = LaserHazard { y: w.player.y, life: 5, active: true };
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.player.shield_count, 1);
    assert_eq!(w.status, GameStatus::Playing);
    assert_eq!(w.explosions.len(), 1);
    assert_eq!(w.explosions[0].life, EXPLOSION_TICKS / 2);
}

#[test]
fn laser_off_row_is_harmless() {
    let mut w = make_world();
    w.laser = LaserHazard { y: w.player.y - 3, life: 5, active: true };
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.status, GameStatus::Playing);
}

// ── Enemies × player (melee) ──────────────────────────────────────────────────

#[test]
fn overlapping_enemy_unshielded_ends_run_with_two_explosions() {
    let mut w = make_world(); // player at (50, 26)
    w.enemies.push(Enemy::new(50, 26, EnemyType::Normal, 1));
    resolve(&mut w, &mut seeded_rng());

    assert_eq!(w.status, GameStatus::GameOver);
    assert_eq!(w.explosions.len(), 2);
    assert_eq!(w.enemies.len(), 1); // short-circuit: no removal on loss
}

#[test]
fn shielded_melee_kills_enemy_for_five_points() {
    let mut w = make_world();
    w.player.shield_count = 1;
    w.enemies.push(Enemy::new(50, 26, EnemyType::Normal, 1));
    resolve(&mut w, &mut seeded_rng());

    assert_eq!(w.status, GameStatus::Playing);
    assert_eq!(w.player.shield_count, 0);
    assert!(w.enemies.is_empty());
    assert_eq!(w.score, 5);
    assert_eq!(w.explosions.len(), 2);
}

#[test]
fn melee_threshold_depends_on_type() {
    // Distance 3 on x: outside a NORMAL's window, inside a STRONG's.
    let mut w = make_world();
    w.enemies.push(Enemy::new(w.player.x + 3, w.player.y, EnemyType::Normal, 1));
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.status, GameStatus::Playing);

    let mut w = make_world();
    w.enemies.push(Enemy::new(w.player.x + 3, w.player.y, EnemyType::Strong, 1));
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.status, GameStatus::GameOver);
}

#[test]
fn boss_melee_window_is_four() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(w.player.x + 4, w.player.y, EnemyType::Boss, 1));
    resolve(&mut w, &mut seeded_rng());
    assert_eq!(w.status, GameStatus::GameOver);
}

#[test]
fn first_contact_in_collection_order_wins() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(50, 26, EnemyType::Normal, 1));
    w.enemies.push(Enemy::new(49, 26, EnemyType::Normal, 1));
    resolve(&mut w, &mut seeded_rng());

    // Only the first contact is attributed: two explosions, not four.
    assert_eq!(w.status, GameStatus::GameOver);
    assert_eq!(w.explosions.len(), 2);
    assert_eq!(w.enemies.len(), 2);
}

// ── Off-bottom purge ──────────────────────────────────────────────────────────

#[test]
fn bottom_enemies_vanish_silently() {
    let mut w = make_world();
    w.enemies.push(Enemy::new(5, HEIGHT - 3, EnemyType::Normal, 1));
    resolve(&mut w, &mut seeded_rng());

    assert!(w.enemies.is_empty());
    assert_eq!(w.score, 0);
    assert!(w.explosions.is_empty());
    assert_eq!(w.status, GameStatus::Playing);
}
