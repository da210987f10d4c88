/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and the read-only snapshot
/// emitted by the core after a tick.  No game logic is performed; this
/// module only translates the snapshot into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{Archetype, Bullet, Enemy, EnemyType, GameStatus, Tank, HEIGHT, WIDTH};
use crate::world::Snapshot;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkGrey;
const C_TANK: Color = Color::Green;
const C_BULLET: Color = Color::Yellow;
const C_BOSS: Color = Color::Magenta;
const C_BOMB: Color = Color::Red;
const C_ITEM: Color = Color::Yellow;
const C_LASER: Color = Color::Magenta;
const C_EXPLOSION_A: Color = Color::DarkYellow;
const C_EXPLOSION_B: Color = Color::Red;
const C_HUD: Color = Color::White;
const C_HINT: Color = Color::DarkGrey;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Print one glyph if it falls inside the playable region; cells on or
/// past the border are silently clipped.
fn put<W: Write>(out: &mut W, x: i32, y: i32, color: Color, glyph: char) -> std::io::Result<()> {
    if x >= 1 && x < WIDTH - 1 && y >= 1 && y < HEIGHT - 1 {
        out.queue(cursor::MoveTo(x as u16, y as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame from the snapshot.
pub fn render<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;

    // Items, bombs and the laser go down first so explosions and the tank
    // overdraw them on overlap.
    for item in snap.items {
        put(out, item.x, item.y, C_ITEM, item.kind.glyph())?;
    }
    for bomb in snap.bombs {
        put(out, bomb.x, bomb.y, C_BOMB, 'o')?;
    }
    if snap.laser.active && snap.laser.life > 0 {
        for x in 1..WIDTH - 1 {
            put(out, x, snap.laser.y, C_LASER, '─')?;
        }
    }

    for enemy in snap.enemies {
        draw_enemy(out, enemy, snap.tick_count)?;
    }
    for bullet in snap.bullets {
        draw_bullet(out, bullet)?;
    }
    for ex in snap.explosions {
        let color = if ex.life % 2 == 0 { C_EXPLOSION_A } else { C_EXPLOSION_B };
        for (dx, dy) in explosion_parts(ex.life) {
            put(out, ex.x + dx, ex.y + dy, color, '*')?;
        }
    }

    draw_tank(out, snap.player)?;
    draw_hud(out, snap)?;

    if snap.status == GameStatus::GameOver {
        draw_game_over(out, snap)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HEIGHT as u16 + 1))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(WIDTH as usize - 2))))?;
    out.queue(cursor::MoveTo(0, HEIGHT as u16 - 1))?;
    out.queue(Print(format!("└{}┘", "─".repeat(WIDTH as usize - 2))))?;

    for row in 1..HEIGHT - 1 {
        out.queue(cursor::MoveTo(0, row as u16))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(WIDTH as u16 - 1, row as u16))?;
        out.queue(Print("│"))?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Sprite cell offsets for each archetype, relative to the tank anchor.
fn tank_shape(archetype: Archetype) -> &'static [(i32, i32, char)] {
    match archetype {
        Archetype::Standard => &[
            (0, 0, '*'),
            (-1, -1, '*'),
            (1, -1, '*'),
            (-2, -2, '*'),
            (0, -2, '*'),
            (2, -2, '*'),
            (0, -3, '*'),
        ],
        Archetype::Heavy => &[
            (0, 0, '#'),
            (-1, 0, '#'),
            (1, 0, '#'),
            (-2, -1, '#'),
            (-1, -1, '#'),
            (0, -1, '#'),
            (1, -1, '#'),
            (2, -1, '#'),
        ],
        Archetype::Light => &[(0, 0, '+'), (0, -1, '+'), (-1, 0, '+'), (1, 0, '+'), (0, 1, '+')],
        Archetype::Sniper => &[(0, -2, '^'), (0, -1, '^'), (0, 0, 'v'), (-1, 0, '|'), (1, 0, '|')],
        Archetype::RapidFire => &[(-1, 0, '='), (0, 0, '='), (1, 0, '='), (0, -1, '='), (0, -2, '=')],
        Archetype::Plasma => &[(0, 0, 'O'), (-1, -1, 'o'), (1, -1, 'o'), (-1, 1, 'o'), (1, 1, 'o')],
    }
}

fn draw_tank<W: Write>(out: &mut W, tank: &Tank) -> std::io::Result<()> {
    for &(dx, dy, glyph) in tank_shape(tank.archetype) {
        put(out, tank.x + dx, tank.y + dy, C_TANK, glyph)?;
    }
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy, tick: u64) -> std::io::Result<()> {
    let blink = (tick / 5) % 2 == 0;
    match enemy.kind {
        EnemyType::Normal => {
            for dy in 0..2 {
                for dx in 0..2 {
                    put(out, enemy.x + dx, enemy.y + dy, Color::Red, '#')?;
                }
            }
        }
        EnemyType::Fast => {
            let s = if blink { "/^\\" } else { "\\_/" };
            for (i, ch) in s.chars().enumerate() {
                put(out, enemy.x - 1 + i as i32, enemy.y, Color::Magenta, ch)?;
            }
        }
        EnemyType::Strong => {
            for row in 0..2 {
                for (i, ch) in "+-+".chars().enumerate() {
                    put(out, enemy.x - 1 + i as i32, enemy.y - 1 + row, Color::Blue, ch)?;
                }
            }
        }
        EnemyType::Bouncer => {
            put(out, enemy.x, enemy.y, Color::Yellow, '&')?;
            put(out, enemy.x - 1, enemy.y, Color::Yellow, '=')?;
            put(out, enemy.x + 1, enemy.y, Color::Yellow, '=')?;
            put(out, enemy.x, enemy.y + 1, Color::Yellow, '=')?;
        }
        EnemyType::Zigzag => {
            put(out, enemy.x, enemy.y, Color::Cyan, 'Z')?;
            put(out, enemy.x + 1, enemy.y + 1, Color::Cyan, 'Z')?;
            put(out, enemy.x - 1, enemy.y + 1, Color::Cyan, 'Z')?;
        }
        EnemyType::Chaser => {
            put(out, enemy.x, enemy.y, Color::Magenta, 'C')?;
        }
        EnemyType::Boss => {
            for row in 0..2 {
                for (i, ch) in "+---+".chars().enumerate() {
                    put(out, enemy.x - 2 + i as i32, enemy.y + row, C_BOSS, ch)?;
                }
            }
        }
    }
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, bullet: &Bullet) -> std::io::Result<()> {
    put(out, bullet.x, bullet.y, C_BULLET, bullet.glyph)
}

/// Explosion animation phases, keyed to remaining life: a core flash, a
/// plus-shaped burst, then diagonal sparks.
fn explosion_parts(life: i32) -> &'static [(i32, i32)] {
    match life % 3 {
        0 => &[(0, 0)],
        1 => &[(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)],
        _ => &[(-1, -1), (1, -1), (-1, 1), (1, 1)],
    }
}

// ── HUD (row below the playfield) ─────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> std::io::Result<()> {
    let mut counts = [0usize; 7];
    for e in snap.enemies {
        let slot = match e.kind {
            EnemyType::Normal => 0,
            EnemyType::Fast => 1,
            EnemyType::Strong => 2,
            EnemyType::Bouncer => 3,
            EnemyType::Zigzag => 4,
            EnemyType::Chaser => 5,
            EnemyType::Boss => 6,
        };
        counts[slot] += 1;
    }

    let mut power_ups = String::new();
    if snap.rapid_fire_timer > 0 {
        power_ups.push_str(&format!("RapidFire({}s) ", snap.rapid_fire_timer / 25));
    }
    if snap.damage_boost_timer > 0 {
        power_ups.push_str(&format!("Damage++({}s) ", snap.damage_boost_timer / 25));
    }
    if snap.player.shield_count > 0 {
        power_ups.push_str(&format!("Shield:{} ", snap.player.shield_count));
    }
    if power_ups.is_empty() {
        power_ups.push_str("No PowerUps");
    }

    out.queue(cursor::MoveTo(1, HEIGHT as u16))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!(
        "Tank: {} | Score: {} | HP: {} | {} | Level: {} | Enemies: {} (N:{} F:{} S:{} B:{} Z:{} C:{} Boss:{})",
        snap.player.archetype.name(),
        snap.score,
        snap.player.hp,
        power_ups.trim_end(),
        snap.level,
        snap.enemies.len(),
        counts[0], counts[1], counts[2], counts[3], counts[4], counts[5], counts[6],
    )))?;

    out.queue(cursor::MoveTo(1, HEIGHT as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("W/A/S/D or arrows : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot<'_>) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}   Level: {}", snap.score, snap.level);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];

    let cx = (WIDTH / 2) as u16;
    let start_row = (HEIGHT / 2) as u16 - lines.len() as u16 / 2;

    for (i, (msg, color)) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
