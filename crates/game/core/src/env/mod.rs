//! Collaborator contracts consumed by the core.
//!
//! The core never talks to an engine directly. Item data, navigation,
//! visual signals, skill result consumers and randomness are all reached
//! through the traits here, so the same controllers run under a real
//! frame loop, a headless session, or a test harness.
mod items;
mod navigation;
mod results;
mod rng;
mod visuals;

pub use items::{ItemCatalog, ItemCategory, ItemDefinition, ItemOracle};
pub use navigation::{NavigationBackend, PathStatus};
pub use results::{HarvestTarget, NullResults, OutcomeLog, ResultHandler, SkillOutcome};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use visuals::{NullVisuals, VisualRecorder, VisualSignal, VisualSink};
