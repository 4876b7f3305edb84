//! Actor stat system.
//!
//! ```text
//! [ Primary pools: HP, MP, STR, INT, DEX, LUCK ]
//!      ↓  (recomputed whenever a base maximum changes)
//! [ Derived stats: attack, magic attack, defense, balance, critical ]
//! ```
//!
//! Every pool is a `current / max / base_max` triple. Changes are accumulated
//! in [`StatChanges`] until an observer drains them with
//! [`ActorStats::take_changes`].

pub mod actor;
pub mod derived;
pub mod pool;

pub use actor::{ActorStats, StatChanges};
pub use derived::DerivedStats;
pub use pool::{StatBlock, StatKind, StatPool};
