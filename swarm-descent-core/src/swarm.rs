//! The swarm data model: the particle population plus the best solution
//! any particle has visited.
//!
//! `Swarm` and `Particle` are plain data; all mutation after initialization
//! is orchestrated by the optimizer loop, which reads and writes their
//! fields directly.

use rand::Rng;

use crate::config::SwarmConfig;
use crate::objective::CostFunction;
use crate::particle::Particle;

/// The full particle population and the global best found so far
#[derive(Debug, Clone)]
pub struct Swarm {
    /// Particles, fixed in number for the whole run
    pub particles: Vec<Particle>,
    /// Best position any particle has visited
    pub best_position: [f64; 2],
    /// Fitness at `best_position`; never increases over a run
    pub best_fitness: f64,
}

impl Swarm {
    /// Build a randomized swarm over the configured search space.
    ///
    /// Positions are uniform over `[lower_bound, upper_bound)` per axis and
    /// initial velocities are uniform over `[0, max_velocity)`; the update
    /// rule later clamps velocities symmetrically.
    pub fn initialize<F, R>(config: &SwarmConfig, cost_function: &F, rng: &mut R) -> Self
    where
        F: CostFunction,
        R: Rng,
    {
        let mut particles = Vec::with_capacity(config.num_particles);
        let mut best_position = [0.0; 2];
        let mut best_fitness = f64::INFINITY;

        for _ in 0..config.num_particles {
            let x = rng.gen_range(config.lower_bound..config.upper_bound);
            let y = rng.gen_range(config.lower_bound..config.upper_bound);
            let fitness = cost_function.evaluate(x, y);
            let velocity = [
                rng.gen::<f64>() * config.max_velocity,
                rng.gen::<f64>() * config.max_velocity,
            ];

            if fitness < best_fitness {
                best_position = [x, y];
                best_fitness = fitness;
            }
            particles.push(Particle::new([x, y], velocity, fitness));
        }

        Self {
            particles,
            best_position,
            best_fitness,
        }
    }
}
