use strum::EnumCount;

/// Skill progression tier, from Novice up through the numbered ranks.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Rank {
    Novice,
    F,
    E,
    D,
    C,
    B,
    A,
    #[strum(serialize = "9")]
    R9,
    #[strum(serialize = "8")]
    R8,
    #[strum(serialize = "7")]
    R7,
    #[strum(serialize = "6")]
    R6,
    #[strum(serialize = "5")]
    R5,
    #[strum(serialize = "4")]
    R4,
    #[strum(serialize = "3")]
    R3,
    #[strum(serialize = "2")]
    R2,
    #[strum(serialize = "1")]
    R1,
}

impl Rank {
    pub const MAX: Self = Self::R1;

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub const fn count() -> usize {
        Self::COUNT
    }
}
