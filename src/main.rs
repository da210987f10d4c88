use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::thread_rng;

use tank_shooter::compute::{init_world, tick};
use tank_shooter::display;
use tank_shooter::entities::{Archetype, GameStatus, InputCommand};
use tank_shooter::world::World;

const FRAME: Duration = Duration::from_millis(40); // 25 FPS

// ── Key → command mapping ─────────────────────────────────────────────────────

fn command_for(code: KeyCode) -> Option<InputCommand> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputCommand::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputCommand::MoveUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputCommand::MoveDown),
        KeyCode::Char(' ') => Some(InputCommand::Fire),
        _ => None,
    }
}

// ── Menus ─────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(Archetype),
    Quit,
}

fn centered<W: Write>(out: &mut W, row: u16, color: Color, text: &str) -> std::io::Result<()> {
    let (width, _) = terminal::size()?;
    let col = (width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn show_title<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    loop {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        let (_, height) = terminal::size()?;
        let cy = height / 2;

        centered(out, cy.saturating_sub(6), Color::Cyan, "=====================================")?;
        centered(out, cy.saturating_sub(5), Color::Cyan, "           TANK  SHOOTER             ")?;
        centered(out, cy.saturating_sub(4), Color::Cyan, "=====================================")?;
        centered(out, cy.saturating_sub(2), Color::White, "[1] Start Game")?;
        centered(out, cy.saturating_sub(1), Color::White, "[2] Instructions")?;
        centered(out, cy, Color::White, "[3] Tank & Enemy Info")?;
        centered(out, cy + 1, Color::White, "[4] Quit")?;
        out.queue(style::ResetColor)?;
        out.flush()?;

        loop {
            if let Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) = rx.recv() {
                match code {
                    KeyCode::Char('1') => return choose_tank(out, rx),
                    KeyCode::Char('2') => {
                        show_instructions(out, rx)?;
                        break;
                    }
                    KeyCode::Char('3') => {
                        show_info(out, rx)?;
                        break;
                    }
                    KeyCode::Char('4') | KeyCode::Char('q') | KeyCode::Esc => {
                        return Ok(MenuResult::Quit);
                    }
                    _ => {}
                }
            }
        }
    }
}

fn choose_tank<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let (_, height) = terminal::size()?;
    let cy = height / 2;

    centered(out, cy.saturating_sub(6), Color::Yellow, "===== CHOOSE YOUR TANK =====")?;

    let options: &[(&str, &str)] = &[
        ("1. Standard ", "HP:5  Speed:1  FireRate:6  (Balanced)"),
        ("2. Heavy    ", "HP:8  Speed:1  FireRate:8  (Armored)"),
        ("3. Light    ", "HP:3  Speed:2  FireRate:4  (Agile)"),
        ("4. Sniper   ", "HP:4  Speed:1  FireRate:9  (High damage)"),
        ("5. RapidFire", "HP:4  Speed:1  FireRate:2  (Very fast shooting)"),
        ("6. Plasma   ", "HP:6  Speed:1  FireRate:5  (Energy shots)"),
    ];
    for (i, (label, desc)) in options.iter().enumerate() {
        centered(
            out,
            cy.saturating_sub(4) + i as u16,
            Color::White,
            &format!("{} - {}", label, desc),
        )?;
    }
    centered(out, cy + 4, Color::DarkGrey, "Choose 1..6  (Q to go back)")?;
    out.queue(style::ResetColor)?;
    out.flush()?;

    loop {
        if let Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) = rx.recv() {
            let archetype = match code {
                KeyCode::Char('1') => Archetype::Standard,
                KeyCode::Char('2') => Archetype::Heavy,
                KeyCode::Char('3') => Archetype::Light,
                KeyCode::Char('4') => Archetype::Sniper,
                KeyCode::Char('5') => Archetype::RapidFire,
                KeyCode::Char('6') => Archetype::Plasma,
                KeyCode::Char('q') | KeyCode::Esc => return Ok(MenuResult::Quit),
                _ => continue,
            };
            return Ok(MenuResult::Start(archetype));
        }
    }
}

fn show_instructions<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let lines = [
        "Instructions:",
        "",
        "- Move with W/A/S/D or the arrow keys.",
        "- Shoot with Space.",
        "- Destroy enemies before they reach you.",
        "- Enemies sometimes drop power-ups: + Health, S Shield, R RapidFire, D DamageBoost.",
        "- Every third level a boss appears, armed with a laser sweep and bomb rain.",
        "",
        "Press any key to return.",
    ];
    for (i, line) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(2, 2 + i as u16))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(*line))?;
    }
    out.queue(style::ResetColor)?;
    out.flush()?;
    wait_any_key(rx);
    Ok(())
}

fn show_info<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let lines = [
        "TANK TYPES:",
        "  Standard  - '*' shape, balanced stats.",
        "  Heavy     - '#' tank, strong armor.",
        "  Light     - '+' agile but fragile.",
        "  Sniper    - '^' narrow gun, high damage.",
        "  RapidFire - '=' barrel, fires very fast.",
        "  Plasma    - 'O' style, energy bullets.",
        "",
        "ENEMY TYPES:",
        "  # Normal    - Basic slow-moving target.",
        "  /^\\ Fast    - Moves quickly, low HP.",
        "  +-+ Strong  - Tough armor, slower.",
        "  & Bouncer   - Moves side-to-side as it descends.",
        "  Z Zigzag    - Erratic movement pattern.",
        "  C Chaser    - Tracks and hunts the player.",
        "  BOSS        - Large tank with Laser and Bomb Rain skills.",
        "",
        "Press any key to return.",
    ];
    for (i, line) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(2, 1 + i as u16))?;
        out.queue(style::SetForegroundColor(Color::White))?;
        out.queue(Print(*line))?;
    }
    out.queue(style::ResetColor)?;
    out.flush()?;
    wait_any_key(rx);
    Ok(())
}

fn wait_any_key(rx: &mpsc::Receiver<Event>) {
    loop {
        if let Ok(Event::Key(KeyEvent { kind: KeyEventKind::Press, .. })) = rx.recv() {
            return;
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Each frame drains every buffered key event non-blockingly and applies
/// the mapped commands in arrival order, then advances the simulation one
/// tick and renders the resulting snapshot.  The frame-pacing sleep at the
/// bottom is the only suspension point.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut World,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<bool> {
    let mut rng = thread_rng();

    loop {
        let frame_start = Instant::now();

        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            if kind == KeyEventKind::Release {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    world.apply(InputCommand::Quit);
                    return Ok(true);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true);
                }
                KeyCode::Char('r') | KeyCode::Char('R')
                    if world.status == GameStatus::GameOver =>
                {
                    return Ok(false);
                }
                _ => {
                    if world.running() {
                        if let Some(cmd) = command_for(code) {
                            world.apply(cmd);
                        }
                    }
                }
            }
        }

        if world.running() {
            tick(world, &mut rng);
        }

        display::render(out, &world.snapshot())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    loop {
        match show_title(out, rx)? {
            MenuResult::Quit => break,
            MenuResult::Start(archetype) => {
                let mut rng = thread_rng();
                let mut world = init_world(archetype, &mut rng);
                let quit = game_loop(out, &mut world, rx)?;
                if quit {
                    break;
                }
                // Otherwise loop back to the menu for a fresh run
            }
        }
    }
    Ok(())
}
