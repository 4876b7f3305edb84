//! Primary stat pools.

/// The six primary stats every actor carries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum StatKind {
    Hp,
    Mp,
    Str,
    Int,
    Dex,
    Luck,
}

impl StatKind {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Resource pools are spent and refilled; the others only change through
    /// training and equipment.
    pub const fn is_resource(self) -> bool {
        matches!(self, Self::Hp | Self::Mp)
    }
}

/// `current / max / base_max` triple.
///
/// `base_max` is the trained value, `max` adds temporary bonuses on top, and
/// `current` always stays within `[0, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatPool {
    current: f32,
    max: f32,
    base_max: f32,
}

impl StatPool {
    /// A full pool with no bonus.
    pub fn new(base_max: f32) -> Self {
        let base_max = base_max.max(0.0);
        Self {
            current: base_max,
            max: base_max,
            base_max,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn base_max(&self) -> f32 {
        self.base_max
    }

    /// Bonus currently applied on top of the base maximum.
    pub fn bonus(&self) -> f32 {
        self.max - self.base_max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    /// Returns `true` if the stored value changed.
    pub fn set_current(&mut self, value: f32) -> bool {
        let clamped = value.clamp(0.0, self.max);
        let changed = clamped != self.current;
        self.current = clamped;
        changed
    }

    /// Adds `delta` (negative to spend) and returns the amount actually applied.
    pub fn adjust(&mut self, delta: f32) -> f32 {
        let before = self.current;
        self.set_current(before + delta);
        self.current - before
    }

    /// Sets the trained maximum, keeping the current bonus.
    pub fn set_base_max(&mut self, value: f32) -> bool {
        let value = value.max(0.0);
        if value == self.base_max {
            return false;
        }
        let bonus = self.bonus();
        self.base_max = value;
        self.max = (value + bonus).max(0.0);
        self.current = self.current.min(self.max);
        true
    }

    /// Replaces the temporary bonus.
    pub fn set_bonus(&mut self, bonus: f32) -> bool {
        let max = (self.base_max + bonus).max(0.0);
        if max == self.max {
            return false;
        }
        self.max = max;
        self.current = self.current.min(self.max);
        true
    }
}

/// Base values for the six pools, as written in design data.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub hp: f32,
    pub mp: f32,
    pub str: f32,
    pub int: f32,
    pub dex: f32,
    pub luck: f32,
}

impl StatBlock {
    pub fn get(&self, kind: StatKind) -> f32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Mp => self.mp,
            StatKind::Str => self.str,
            StatKind::Int => self.int,
            StatKind::Dex => self.dex,
            StatKind::Luck => self.luck,
        }
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self {
            hp: 10.0,
            mp: 10.0,
            str: 10.0,
            int: 10.0,
            dex: 10.0,
            luck: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_is_clamped_to_max() {
        let mut pool = StatPool::new(50.0);
        assert_eq!(pool.adjust(-70.0), -50.0);
        assert!(pool.is_depleted());
        assert_eq!(pool.adjust(80.0), 50.0);
        assert_eq!(pool.current(), 50.0);
    }

    #[test]
    fn base_max_change_keeps_bonus_and_clamps_current() {
        let mut pool = StatPool::new(40.0);
        pool.set_bonus(10.0);
        assert_eq!(pool.max(), 50.0);

        assert!(pool.set_base_max(20.0));
        assert_eq!(pool.max(), 30.0);
        assert_eq!(pool.current(), 30.0);
        assert!(!pool.set_base_max(20.0));
    }

    #[test]
    fn kind_names_are_uppercase() {
        assert_eq!(StatKind::Luck.to_string(), "LUCK");
        assert_eq!("DEX".parse::<StatKind>(), Ok(StatKind::Dex));
    }
}
