// Turn limits
pub const TURN_LIMIT: u32 = 20;

// Hero attribute ranges (inclusive)
pub const HERO_HEALTH_RANGE: (u32, u32) = (70, 100);
pub const HERO_STRENGTH_RANGE: (u32, u32) = (70, 80);
pub const HERO_DEFENCE_RANGE: (u32, u32) = (45, 55);
pub const HERO_SPEED_RANGE: (u32, u32) = (40, 50);
pub const HERO_LUCK_RANGE: (u32, u32) = (10, 30);

// Villain attribute ranges (inclusive)
pub const VILLAIN_HEALTH_RANGE: (u32, u32) = (60, 90);
pub const VILLAIN_STRENGTH_RANGE: (u32, u32) = (60, 90);
pub const VILLAIN_DEFENCE_RANGE: (u32, u32) = (40, 60);
pub const VILLAIN_SPEED_RANGE: (u32, u32) = (40, 60);
pub const VILLAIN_LUCK_RANGE: (u32, u32) = (25, 40);

// Strike rolls: a roll in [0, STRIKE_ROLL_SIZE) is a percentage of strength
pub const STRIKE_ROLL_SIZE: u32 = 100;
pub const STRIKE_PERCENT_DIVISOR: u32 = 100;
// Critical strike scales by roll% and luck%
pub const CRITICAL_STRIKE_DIVISOR: u32 = 10_000;

// Resilience adds half of base defence
pub const RESILIENCE_DEFENCE_DIVISOR: u32 = 2;

// Worst-case damage per turn
pub const MAX_HERO_DAMAGE_PER_TURN: u32 = 120;
pub const MAX_VILLAIN_DAMAGE_PER_TURN: u32 = 45;

// Save file
pub const SAVE_VERSION_MAGIC: u64 = 0x4455_454C_5354_0001; // "DUELST" v1
