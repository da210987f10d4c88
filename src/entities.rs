/// All game entity types — pure data, no logic.

// ── Playfield geometry ────────────────────────────────────────────────────────

/// Playfield width in columns (border at 0 and WIDTH-1).
pub const WIDTH: i32 = 100;
/// Playfield height in rows (border at 0 and HEIGHT-1).
pub const HEIGHT: i32 = 30;

/// Lifetime of a full-size explosion, in ticks.  Impact flashes use half.
pub const EXPLOSION_TICKS: i32 = 6;

// ── Enemies ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyType {
    Normal,
    Fast,
    Strong,
    Bouncer,
    Zigzag,
    Chaser,
    Boss,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    /// Horizontal direction, always +1 or -1.
    pub dir: i32,
    pub kind: EnemyType,
    /// Ticks until the boss may use a skill again.  Unused for other types.
    pub skill_cooldown: i32,
    /// Hp this enemy spawned with.  The boss phase threshold is half of
    /// this value for the whole run, even after later level-ups.
    pub max_hp: i32,
}

impl Enemy {
    pub fn starting_hp(kind: EnemyType) -> i32 {
        match kind {
            EnemyType::Normal | EnemyType::Fast => 1,
            EnemyType::Strong => 3,
            EnemyType::Bouncer | EnemyType::Zigzag | EnemyType::Chaser => 2,
            EnemyType::Boss => 20,
        }
    }

    pub fn new(x: i32, y: i32, kind: EnemyType, dir: i32) -> Self {
        let hp = Self::starting_hp(kind);
        Enemy { x, y, hp, dir, kind, skill_cooldown: 0, max_hp: hp }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Tank archetype, chosen once at run start from the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Archetype {
    Standard,
    Heavy,
    Light,
    Sniper,
    RapidFire,
    Plasma,
}

impl Archetype {
    pub fn name(self) -> &'static str {
        match self {
            Archetype::Standard => "Standard",
            Archetype::Heavy => "Heavy",
            Archetype::Light => "Light",
            Archetype::Sniper => "Sniper",
            Archetype::RapidFire => "RapidFire",
            Archetype::Plasma => "Plasma",
        }
    }

    /// (hp, speed, fire_rate, shot_damage, shot_count)
    pub fn stats(self) -> (i32, i32, i32, i32, i32) {
        match self {
            Archetype::Standard => (5, 1, 6, 1, 1),
            Archetype::Heavy => (8, 1, 8, 1, 1),
            Archetype::Light => (3, 2, 4, 1, 1),
            Archetype::Sniper => (4, 1, 9, 2, 1),
            Archetype::RapidFire => (4, 1, 2, 1, 1),
            Archetype::Plasma => (6, 1, 5, 1, 1),
        }
    }

    /// Glyph used for this archetype's bullets.
    pub fn bullet_glyph(self) -> char {
        match self {
            Archetype::Standard => '|',
            Archetype::Heavy => '#',
            Archetype::Light => ':',
            Archetype::Sniper => '-',
            Archetype::RapidFire => '!',
            Archetype::Plasma => '*',
        }
    }
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub x: i32,
    pub y: i32,
    pub hp: i32,
    pub archetype: Archetype,
    pub speed: i32,
    /// Ticks between accepted shots.
    pub fire_rate: i32,
    pub shot_damage: i32,
    /// Bullets emitted per accepted shot, spread around x.
    pub shot_count: i32,
    pub shield_count: i32,
}

impl Tank {
    pub fn new(x: i32, y: i32, archetype: Archetype) -> Self {
        let (hp, speed, fire_rate, shot_damage, shot_count) = archetype.stats();
        Tank {
            x,
            y,
            hp,
            archetype,
            speed,
            fire_rate,
            shot_damage,
            shot_count,
            shield_count: 0,
        }
    }
}

// ── Projectiles & effects ─────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    /// Vertical velocity per tick; player bullets use -1 (upward).
    pub dy: i32,
    pub damage: i32,
    pub glyph: char,
}

#[derive(Clone, Debug)]
pub struct Explosion {
    pub x: i32,
    pub y: i32,
    /// Remaining ticks to display.
    pub life: i32,
}

/// A boss bomb falling toward the player.
#[derive(Clone, Debug)]
pub struct Bomb {
    pub x: i32,
    pub y: i32,
    pub dy: i32,
}

/// The boss laser sweep.  At most one exists; inactive between uses.
#[derive(Clone, Copy, Debug, Default)]
pub struct LaserHazard {
    pub y: i32,
    pub life: i32,
    pub active: bool,
}

// ── Items ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Health,
    Shield,
    Rapid,
    Damage,
}

impl ItemKind {
    pub fn glyph(self) -> char {
        match self {
            ItemKind::Health => '+',
            ItemKind::Shield => 'S',
            ItemKind::Rapid => 'R',
            ItemKind::Damage => 'D',
        }
    }
}

#[derive(Clone, Debug)]
pub struct Item {
    pub x: i32,
    pub y: i32,
    pub kind: ItemKind,
    /// Ticks before the item disappears unpicked.
    pub life: i32,
}

impl Item {
    pub fn new(x: i32, y: i32, kind: ItemKind) -> Self {
        Item { x, y, kind, life: 400 }
    }
}

// ── Run status & input ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Discrete per-tick intents fed in by the shell.  Each is idempotent and
/// clamps the player back into bounds after application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCommand {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    Quit,
}
