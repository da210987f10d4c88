/// Per-enemy-type movement policy and the boss skill state machine.
///
/// Movement is cadence-gated: an enemy only steps on ticks where
/// `tick % period == 0`, with the period derived from the current level.
/// The boss skill machine is the exception — it runs every tick,
/// independent of the movement cadence.

use rand::Rng;

use crate::entities::{Bomb, Enemy, EnemyType, LaserHazard, Tank, WIDTH};

/// Base movement period for this level.  Shrinks as the level climbs,
/// floored at 2 so enemies never move every tick.
pub fn global_delay(level: i32) -> u64 {
    (10 - level / 2).max(2) as u64
}

/// Movement period for one enemy type.  FAST halves the global delay;
/// the boss has a fixed, slower cadence.
pub fn move_period(kind: EnemyType, level: i32) -> u64 {
    match kind {
        EnemyType::Fast => (global_delay(level) / 2).max(1),
        EnemyType::Boss => 4,
        _ => global_delay(level),
    }
}

/// Advance every enemy one movement step where its cadence allows, and run
/// the boss skill machine.  Boss skills may activate the laser hazard or
/// push new bombs.
pub fn update_enemies(
    enemies: &mut [Enemy],
    player: &Tank,
    laser: &mut LaserHazard,
    bombs: &mut Vec<Bomb>,
    tick: u64,
    level: i32,
    rng: &mut impl Rng,
) {
    for e in enemies.iter_mut() {
        // Skills are gated by their own cooldown, not the movement cadence.
        if e.kind == EnemyType::Boss {
            boss_skills(e, laser, bombs, rng);
        }

        if tick % move_period(e.kind, level) != 0 {
            continue;
        }

        match e.kind {
            EnemyType::Normal | EnemyType::Fast | EnemyType::Strong => e.y += 1,
            EnemyType::Bouncer => {
                e.y += 1;
                e.x += e.dir;
                if e.x <= 2 || e.x >= WIDTH - 3 {
                    e.dir = -e.dir;
                }
            }
            EnemyType::Zigzag => {
                e.y += 1;
                e.x += e.dir;
                // Forced flip on a 12-tick clock, plus the margin flip,
                // gives the erratic weave.
                if tick % 12 == 0 {
                    e.dir = -e.dir;
                }
                if e.x <= 2 || e.x >= WIDTH - 3 {
                    e.dir = -e.dir;
                }
            }
            EnemyType::Chaser => {
                let dx = player.x - e.x;
                let dy = player.y - e.y;
                if dx.abs() <= 20 && dy.abs() <= 10 {
                    e.x += dx.signum();
                    e.y += dy.signum();
                } else {
                    e.y += 1;
                }
            }
            EnemyType::Boss => {
                // Horizontal patrol only; the boss never descends.
                e.x += e.dir;
                if e.x <= 3 || e.x >= WIDTH - 4 {
                    e.dir = -e.dir;
                }
            }
        }
    }
}

/// Boss skill state machine: a cooldown counts down every tick; at zero
/// the boss acts instantaneously (laser or bomb rain) and the cooldown
/// resets.  The strong phase — hp at or below half the boss's spawn hp —
/// intensifies both skills and shortens the cooldown.
fn boss_skills(
    boss: &mut Enemy,
    laser: &mut LaserHazard,
    bombs: &mut Vec<Bomb>,
    rng: &mut impl Rng,
) {
    if boss.skill_cooldown > 0 {
        boss.skill_cooldown -= 1;
        return;
    }

    let strong_phase = boss.hp <= boss.max_hp / 2;
    if rng.gen_range(0..100) < 45 {
        // Laser sweep one row below the boss.  A new sweep preempts any
        // still-active one.
        laser.active = true;
        laser.y = boss.y + 2;
        laser.life = if strong_phase { 10 } else { 6 };
    } else {
        let count = if strong_phase { 8 } else { 5 };
        for _ in 0..count {
            let bx = (boss.x - 2 + rng.gen_range(0..7)).clamp(2, WIDTH - 3);
            bombs.push(Bomb { x: bx, y: boss.y + 2, dy: 1 });
        }
    }
    boss.skill_cooldown = if strong_phase { 30 } else { 50 };
}
