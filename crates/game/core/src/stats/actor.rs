//! Actor stat aggregate with change tracking.

use bitflags::bitflags;
use strum::{EnumCount, IntoEnumIterator};

use super::derived::DerivedStats;
use super::pool::{StatBlock, StatKind, StatPool};

bitflags! {
    /// Which parts of an [`ActorStats`] changed since the last drain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatChanges: u8 {
        const HP      = 1 << 0;
        const MP      = 1 << 1;
        const STR     = 1 << 2;
        const INT     = 1 << 3;
        const DEX     = 1 << 4;
        const LUCK    = 1 << 5;
        const DERIVED = 1 << 6;
    }
}

impl StatChanges {
    pub const fn of(kind: StatKind) -> Self {
        match kind {
            StatKind::Hp => Self::HP,
            StatKind::Mp => Self::MP,
            StatKind::Str => Self::STR,
            StatKind::Int => Self::INT,
            StatKind::Dex => Self::DEX,
            StatKind::Luck => Self::LUCK,
        }
    }
}

/// All primary pools of one actor plus the derived stats computed from them.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorStats {
    pools: [StatPool; StatKind::COUNT],
    derived: DerivedStats,
    changes: StatChanges,
}

impl ActorStats {
    /// Full pools at the given base values.
    pub fn new(base: &StatBlock) -> Self {
        let mut pools = [StatPool::default(); StatKind::COUNT];
        for kind in StatKind::iter() {
            pools[kind.index()] = StatPool::new(base.get(kind));
        }
        let mut stats = Self {
            pools,
            derived: DerivedStats::default(),
            changes: StatChanges::empty(),
        };
        stats.derived = stats.compute_derived();
        stats
    }

    pub fn pool(&self, kind: StatKind) -> &StatPool {
        &self.pools[kind.index()]
    }

    pub fn current(&self, kind: StatKind) -> f32 {
        self.pool(kind).current()
    }

    pub fn max(&self, kind: StatKind) -> f32 {
        self.pool(kind).max()
    }

    pub fn derived(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn is_alive(&self) -> bool {
        !self.pool(StatKind::Hp).is_depleted()
    }

    pub fn set_current(&mut self, kind: StatKind, value: f32) {
        if self.pools[kind.index()].set_current(value) {
            self.changes |= StatChanges::of(kind);
        }
    }

    /// Adds `delta` to the current value and returns the amount applied.
    pub fn adjust(&mut self, kind: StatKind, delta: f32) -> f32 {
        let applied = self.pools[kind.index()].adjust(delta);
        if applied != 0.0 {
            self.changes |= StatChanges::of(kind);
        }
        applied
    }

    /// Changes a trained maximum and recomputes the derived stats.
    pub fn set_base_max(&mut self, kind: StatKind, value: f32) {
        if self.pools[kind.index()].set_base_max(value) {
            self.changes |= StatChanges::of(kind);
            self.refresh_derived();
        }
    }

    pub fn set_bonus(&mut self, kind: StatKind, bonus: f32) {
        if self.pools[kind.index()].set_bonus(bonus) {
            self.changes |= StatChanges::of(kind);
        }
    }

    /// Changes accumulated since the previous call.
    pub fn take_changes(&mut self) -> StatChanges {
        std::mem::take(&mut self.changes)
    }

    pub fn pending_changes(&self) -> StatChanges {
        self.changes
    }

    fn refresh_derived(&mut self) {
        let derived = self.compute_derived();
        if derived != self.derived {
            self.derived = derived;
            self.changes |= StatChanges::DERIVED;
        }
    }

    fn compute_derived(&self) -> DerivedStats {
        DerivedStats::compute(
            self.pool(StatKind::Str).base_max(),
            self.pool(StatKind::Int).base_max(),
            self.pool(StatKind::Dex).base_max(),
            self.pool(StatKind::Luck).base_max(),
        )
    }
}

impl Default for ActorStats {
    fn default() -> Self {
        Self::new(&StatBlock::default())
    }
}
