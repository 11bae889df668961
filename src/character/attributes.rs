use crate::core::constants::*;
use crate::core::randomness::RandomnessSource;
use serde::{Deserialize, Serialize};

pub const NUM_ATTRIBUTES: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Health,
    Strength,
    Defence,
    Speed,
    Luck,
}

impl AttributeType {
    /// All attributes, in the order they are sampled at creation.
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Health,
            AttributeType::Strength,
            AttributeType::Defence,
            AttributeType::Speed,
            AttributeType::Luck,
        ]
    }

    pub fn abbrev(&self) -> &str {
        match self {
            AttributeType::Health => "HP",
            AttributeType::Strength => "STR",
            AttributeType::Defence => "DEF",
            AttributeType::Speed => "SPD",
            AttributeType::Luck => "LCK",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Health => 0,
            AttributeType::Strength => 1,
            AttributeType::Defence => 2,
            AttributeType::Speed => 3,
            AttributeType::Luck => 4,
        }
    }
}

/// Closed integer range `[low, high]` an attribute is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRange {
    pub low: u32,
    pub high: u32,
}

impl AttributeRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    const fn from_bounds(bounds: (u32, u32)) -> Self {
        Self::new(bounds.0, bounds.1)
    }

    /// Number of values in the range.
    pub fn width(&self) -> u32 {
        self.high - self.low + 1
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Uniform sample: one draw of `rng.next(width)` offset by the lower bound.
    pub fn sample(&self, rng: &mut impl RandomnessSource) -> u32 {
        self.low + rng.next(self.width())
    }
}

/// Sampling ranges for one archetype, indexed by [`AttributeType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchetypeRanges {
    ranges: [AttributeRange; NUM_ATTRIBUTES],
}

impl ArchetypeRanges {
    pub const HERO: ArchetypeRanges = ArchetypeRanges {
        ranges: [
            AttributeRange::from_bounds(HERO_HEALTH_RANGE),
            AttributeRange::from_bounds(HERO_STRENGTH_RANGE),
            AttributeRange::from_bounds(HERO_DEFENCE_RANGE),
            AttributeRange::from_bounds(HERO_SPEED_RANGE),
            AttributeRange::from_bounds(HERO_LUCK_RANGE),
        ],
    };

    pub const VILLAIN: ArchetypeRanges = ArchetypeRanges {
        ranges: [
            AttributeRange::from_bounds(VILLAIN_HEALTH_RANGE),
            AttributeRange::from_bounds(VILLAIN_STRENGTH_RANGE),
            AttributeRange::from_bounds(VILLAIN_DEFENCE_RANGE),
            AttributeRange::from_bounds(VILLAIN_SPEED_RANGE),
            AttributeRange::from_bounds(VILLAIN_LUCK_RANGE),
        ],
    };

    pub fn get(&self, attr: AttributeType) -> AttributeRange {
        self.ranges[attr.index()]
    }
}
