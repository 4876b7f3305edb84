//! Headless client binary.
//!
//! Composition root: reads the environment, loads a [`runtime::Session`]
//! from the content directory and plays a scripted gathering run on a
//! fixed-rate frame loop, logging events as they happen. The final bag is
//! printed to stdout.
//!
//! ```bash
//! RUST_LOG=debug GAME_SEED=7 cargo run -p mabworld-client
//! ```

mod demo;
mod report;

use anyhow::Result;
use runtime::{RuntimeConfig, Session};
use tokio::time::MissedTickBehavior;

use crate::demo::Demo;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = RuntimeConfig::from_env();
    tracing::info!(
        content = %config.content_dir.display(),
        map = %config.map,
        tick_rate = config.tick_rate_hz,
        seed = config.seed,
        "starting"
    );

    let mut session = Session::load(&config)?;
    let mut demo = Demo::new(&session);

    let frame = config.frame();
    let mut interval = tokio::time::interval(frame);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    for _ in 0..config.demo_ticks {
        interval.tick().await;
        demo.step(&mut session, frame);
        if demo.is_finished(&session) {
            break;
        }
    }

    tracing::info!(frames = session.frame(), "demo finished");
    println!("{}", report::bag(&session));
    println!("{}", report::skills(&session));
    Ok(())
}
