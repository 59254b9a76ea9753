//! Minimize Ackley Example
//!
//! Demonstrates configuring and running the optimizer on the Ackley
//! benchmark with a fixed seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use swarm_descent::prelude::*;

fn main() -> Result<()> {
    println!("SwarmDescent Ackley Example");
    println!("===========================");

    // A roomier budget than the default, same swarm otherwise
    let config = SwarmConfig {
        max_iterations: 200,
        ..SwarmConfig::default()
    };

    println!("Configuration:");
    println!("  Particles: {}", config.num_particles);
    println!(
        "  Search space: [{}, {}] per axis",
        config.lower_bound, config.upper_bound
    );
    println!("  Velocity cap: {}", config.max_velocity);
    println!("  Iteration budget: {}", config.max_iterations);

    let mut optimizer = ParticleSwarm::new(config, StdRng::seed_from_u64(42))?;
    let outcome = optimizer.run(&ackley);

    println!();
    print!("{}", report::render_text(&outcome));
    Ok(())
}
