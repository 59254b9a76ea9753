//! Minimal CLI entry point: minimize the Ackley benchmark and print the
//! run report.
//!
//! Usage: `swarm_descent_run [seed]`
//!
//! With a seed the run is fully reproducible; without one the swarm draws
//! from entropy. Set `RUST_LOG=swarm_descent_core=debug` for per-run
//! telemetry.

use rand::rngs::StdRng;
use rand::SeedableRng;

use swarm_descent::report;
use swarm_descent::{ackley, ParticleSwarm, SwarmConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rng = match std::env::args().nth(1) {
        Some(seed) => StdRng::seed_from_u64(seed.parse()?),
        None => StdRng::from_entropy(),
    };

    let mut optimizer = ParticleSwarm::new(SwarmConfig::default(), rng)?;
    let outcome = optimizer.run(&ackley);

    print!("{}", report::render_text(&outcome));
    Ok(())
}
