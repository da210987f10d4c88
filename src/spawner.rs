/// Level-scaled enemy generation and the item-drop policy.

use rand::Rng;

use crate::entities::{Enemy, EnemyType, Item, ItemKind, WIDTH};
use crate::world::{World, BASE_SPAWN_RATE};

/// Ticks between wave spawns at the given level, floored at 8.
pub fn spawn_interval(level: i32) -> u64 {
    (BASE_SPAWN_RATE - level * 3).max(8) as u64
}

/// Spawn one wave: `1 + uniform(0, min(4, level+1))` enemies at random
/// columns near the top, typed from a fixed weighted table.  The boss is
/// never drawn here — it only enters via [`spawn_boss`].
pub fn spawn_wave(world: &mut World, rng: &mut impl Rng) {
    let count = 1 + rng.gen_range(0..(world.level + 1).min(4));
    for _ in 0..count {
        let kind = roll_enemy_type(rng);
        let x = rng.gen_range(2..=WIDTH - 7);
        let y = rng.gen_range(2..=3);
        let dir = if rng.gen_bool(0.5) { 1 } else { -1 };
        world.enemies.push(Enemy::new(x, y, kind, dir));
    }
}

/// NORMAL 40% / FAST 20% / STRONG 15% / BOUNCER 13% / ZIGZAG 8% / CHASER 4%.
fn roll_enemy_type(rng: &mut impl Rng) -> EnemyType {
    match rng.gen_range(0..100) {
        0..=39 => EnemyType::Normal,
        40..=59 => EnemyType::Fast,
        60..=74 => EnemyType::Strong,
        75..=87 => EnemyType::Bouncer,
        88..=95 => EnemyType::Zigzag,
        _ => EnemyType::Chaser,
    }
}

/// Place one boss at top-centre with level-scaled hp.  Its `max_hp` is
/// fixed here; the strong-phase threshold keys off this value for the
/// rest of the run.
pub fn spawn_boss(world: &mut World) {
    let hp = 20 + world.level * 5;
    let mut boss = Enemy::new(WIDTH / 2, 2, EnemyType::Boss, 1);
    boss.hp = hp;
    boss.max_hp = hp;
    world.enemies.push(boss);
}

/// Independent 12% drop roll on enemy death.
/// Kinds: HEALTH 40% / RAPID 25% / DAMAGE 20% / SHIELD 15%.
pub fn maybe_drop_item(items: &mut Vec<Item>, x: i32, y: i32, rng: &mut impl Rng) {
    if rng.gen_range(0..100) >= 12 {
        return;
    }
    let kind = match rng.gen_range(0..100) {
        0..=39 => ItemKind::Health,
        40..=64 => ItemKind::Rapid,
        65..=84 => ItemKind::Damage,
        _ => ItemKind::Shield,
    };
    items.push(Item::new(x, y, kind));
}
