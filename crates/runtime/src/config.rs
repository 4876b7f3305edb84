//! Session configuration read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Frame loop and session setup knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Frames per second of the fixed-step loop.
    pub tick_rate_hz: u32,
    /// Seeds skill rolls and mob wandering.
    pub seed: u64,
    /// Directory holding `config.toml`, `items.ron`, `bags.ron`, `skills.ron`
    /// and `maps/`.
    pub content_dir: PathBuf,
    /// Map file stem under `maps/`.
    pub map: String,
    /// Frames the scripted demo runs for.
    pub demo_ticks: u32,
    /// Capacity of each event bus topic.
    pub event_buffer_size: usize,
    /// Walking speed in tiles per second.
    pub walk_speed: f32,
}

impl RuntimeConfig {
    pub const DEFAULT_TICK_RATE_HZ: u32 = 20;
    pub const DEFAULT_SEED: u64 = 0x5eed;
    pub const DEFAULT_CONTENT_DIR: &'static str = "crates/game/content/data";
    pub const DEFAULT_MAP: &'static str = "meadow";
    pub const DEFAULT_DEMO_TICKS: u32 = 600;

    /// Defaults overridden by `TICK_RATE_HZ`, `GAME_SEED`, `CONTENT_DIR`,
    /// `MAP`, `DEMO_TICKS`, `EVENT_BUFFER` and `WALK_SPEED`. Unparsable
    /// values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rate) = read_env::<u32>("TICK_RATE_HZ") {
            config.tick_rate_hz = rate.max(1);
        }
        if let Some(seed) = read_env::<u64>("GAME_SEED") {
            config.seed = seed;
        }
        if let Some(dir) = read_env::<PathBuf>("CONTENT_DIR") {
            config.content_dir = dir;
        }
        if let Some(map) = read_env::<String>("MAP") {
            config.map = map;
        }
        if let Some(ticks) = read_env::<u32>("DEMO_TICKS") {
            config.demo_ticks = ticks;
        }
        if let Some(capacity) = read_env::<usize>("EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(speed) = read_env::<f32>("WALK_SPEED")
            && speed > 0.0
        {
            config.walk_speed = speed;
        }

        config
    }

    /// Wall-clock length of one frame.
    pub fn frame(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz.max(1)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_rate_hz: Self::DEFAULT_TICK_RATE_HZ,
            seed: Self::DEFAULT_SEED,
            content_dir: PathBuf::from(Self::DEFAULT_CONTENT_DIR),
            map: Self::DEFAULT_MAP.to_owned(),
            demo_ticks: Self::DEFAULT_DEMO_TICKS,
            event_buffer_size: 100,
            walk_speed: 4.0,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_length_follows_tick_rate() {
        let config = RuntimeConfig {
            tick_rate_hz: 50,
            ..RuntimeConfig::default()
        };
        assert_eq!(config.frame(), Duration::from_millis(20));
    }

    #[test]
    fn zero_rate_does_not_divide_by_zero() {
        let config = RuntimeConfig {
            tick_rate_hz: 0,
            ..RuntimeConfig::default()
        };
        assert_eq!(config.frame(), Duration::from_secs(1));
    }
}
