//! Derived stats computed from the primary pools.
//!
//! These are never stored on their own: [`ActorStats`](super::ActorStats)
//! recomputes them whenever a primary's base maximum changes.

/// Combat figures derived from STR, INT, DEX and LUCK.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub attack_min: f32,
    pub attack_max: f32,
    pub magic_attack: f32,
    pub defense: f32,
    /// Percentage pulling damage rolls toward `attack_max`.
    pub balance: f32,
    /// Critical hit chance, percent.
    pub critical: f32,
}

impl DerivedStats {
    pub const BALANCE_CAP: f32 = 80.0;
    pub const CRITICAL_CAP: f32 = 30.0;

    /// Formulas:
    /// - attack_min = STR / 3
    /// - attack_max = STR / 2.5
    /// - magic_attack = INT / 5
    /// - defense = STR / 10
    /// - balance = 10 + DEX / 4, capped at 80
    /// - critical = LUCK / 5, capped at 30
    pub fn compute(str: f32, int: f32, dex: f32, luck: f32) -> Self {
        Self {
            attack_min: str / 3.0,
            attack_max: str / 2.5,
            magic_attack: int / 5.0,
            defense: str / 10.0,
            balance: (10.0 + dex / 4.0).min(Self::BALANCE_CAP),
            critical: (luck / 5.0).min(Self::CRITICAL_CAP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_factors() {
        let derived = DerivedStats::compute(30.0, 50.0, 40.0, 25.0);
        assert_eq!(derived.attack_min, 10.0);
        assert_eq!(derived.attack_max, 12.0);
        assert_eq!(derived.magic_attack, 10.0);
        assert_eq!(derived.defense, 3.0);
        assert_eq!(derived.balance, 20.0);
        assert_eq!(derived.critical, 5.0);
    }

    #[test]
    fn caps_apply() {
        let derived = DerivedStats::compute(0.0, 0.0, 1000.0, 1000.0);
        assert_eq!(derived.balance, DerivedStats::BALANCE_CAP);
        assert_eq!(derived.critical, DerivedStats::CRITICAL_CAP);
    }
}
