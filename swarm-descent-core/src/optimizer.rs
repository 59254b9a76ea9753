//! The bounded particle swarm update loop.
//!
//! [`ParticleSwarm`] owns a validated [`SwarmConfig`] and the random source.
//! [`ParticleSwarm::run`] drives a whole optimization; [`ParticleSwarm::step`]
//! advances an externally held [`Swarm`] by one full pass, so callers can
//! iterate manually and inspect the population between passes.

use rand::Rng;

use crate::config::SwarmConfig;
use crate::objective::CostFunction;
use crate::swarm::Swarm;
use crate::{Result, DIMENSIONS};

#[cfg(feature = "telemetry")]
use tracing::{debug, trace};

/// Outcome of one optimization run
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimizationOutcome {
    /// Best position found by any particle
    pub best_position: [f64; 2],
    /// Fitness at `best_position`
    pub best_fitness: f64,
    /// Update iterations executed before termination
    pub iterations: usize,
    /// Whether the convergence criteria was met before the budget ran out
    pub converged: bool,
}

/// The PSO driver: configuration plus the injected random source
pub struct ParticleSwarm<R> {
    config: SwarmConfig,
    rng: R,
}

impl<R: Rng> ParticleSwarm<R> {
    /// Validate `config` and build a driver around `rng`.
    pub fn new(config: SwarmConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The configuration this driver runs with.
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Run the full optimization loop against `cost_function`.
    ///
    /// Initializes a fresh swarm, draws one inertia weight for the whole
    /// run, and iterates until the global best fitness comes within
    /// `convergence_threshold` of `target_fitness` or the iteration budget
    /// is exhausted. A converged run reports the 0-based index of its final
    /// pass; an exhausted run reports `max_iterations`.
    pub fn run<F: CostFunction>(&mut self, cost_function: &F) -> OptimizationOutcome {
        let mut swarm = Swarm::initialize(&self.config, cost_function, &mut self.rng);

        // One inertia weight per run, not per iteration.
        let (w_lo, w_hi) = self.config.inertia_range;
        let inertia_weight = self.rng.gen_range(w_lo..w_hi);

        #[cfg(feature = "telemetry")]
        debug!(
            particles = self.config.num_particles,
            inertia_weight,
            initial_best = swarm.best_fitness,
            "starting optimization run"
        );

        let mut iteration = 0;
        while iteration < self.config.max_iterations {
            self.step(&mut swarm, inertia_weight, cost_function);

            #[cfg(feature = "telemetry")]
            trace!(iteration, best_fitness = swarm.best_fitness, "pass complete");

            if (swarm.best_fitness - self.config.target_fitness).abs()
                < self.config.convergence_threshold
            {
                #[cfg(feature = "telemetry")]
                debug!(
                    iteration,
                    best_fitness = swarm.best_fitness,
                    "convergence criteria met"
                );
                return OptimizationOutcome {
                    best_position: swarm.best_position,
                    best_fitness: swarm.best_fitness,
                    iterations: iteration,
                    converged: true,
                };
            }
            iteration += 1;
        }

        OptimizationOutcome {
            best_position: swarm.best_position,
            best_fitness: swarm.best_fitness,
            iterations: iteration,
            converged: false,
        }
    }

    /// Advance `swarm` by one full pass over the population.
    ///
    /// Per particle: velocity update with fresh `r1`/`r2` per dimension and
    /// a hard clamp (no rescaling), position integration, fitness refresh,
    /// personal- and global-best updates, then boundary handling. A
    /// coordinate that leaves the search space is redrawn uniformly inside
    /// it rather than clamped to the edge, refreshing fitness per redraw.
    pub fn step<F: CostFunction>(
        &mut self,
        swarm: &mut Swarm,
        inertia_weight: f64,
        cost_function: &F,
    ) {
        let SwarmConfig {
            lower_bound,
            upper_bound,
            max_velocity,
            cognitive,
            social,
            ..
        } = self.config;

        for idx in 0..swarm.particles.len() {
            let global_best = swarm.best_position;
            let particle = &mut swarm.particles[idx];

            for dim in 0..DIMENSIONS {
                let r1: f64 = self.rng.gen_range(0.0..1.0);
                let r2: f64 = self.rng.gen_range(0.0..1.0);
                let pull_personal =
                    cognitive * r1 * (particle.best_position[dim] - particle.position[dim]);
                let pull_social = social * r2 * (global_best[dim] - particle.position[dim]);
                let candidate = inertia_weight * particle.velocity[dim] + pull_personal + pull_social;
                particle.velocity[dim] = candidate.clamp(-max_velocity, max_velocity);
            }

            particle.position[0] += particle.velocity[0];
            particle.position[1] += particle.velocity[1];
            particle.fitness = cost_function.evaluate(particle.position[0], particle.position[1]);

            // The stored personal best is re-evaluated, not read from a cache.
            let personal_best_fitness =
                cost_function.evaluate(particle.best_position[0], particle.best_position[1]);
            let improved = particle.fitness < personal_best_fitness;
            if improved {
                particle.best_position = particle.position;
            }
            let fitness = particle.fitness;
            let position = particle.position;

            // A particle only contends for the global best when it improved
            // its personal best this pass.
            if improved && fitness < swarm.best_fitness {
                swarm.best_position = position;
                swarm.best_fitness = fitness;
            }

            let particle = &mut swarm.particles[idx];
            for dim in 0..DIMENSIONS {
                if particle.position[dim] < lower_bound || particle.position[dim] > upper_bound {
                    particle.position[dim] = self.rng.gen_range(lower_bound..upper_bound);
                    particle.fitness =
                        cost_function.evaluate(particle.position[0], particle.position[1]);
                }
            }
        }
    }
}

/// One-shot entry point over a thread-local random source.
///
/// Seeded, replayable runs go through [`ParticleSwarm::new`] with an
/// explicit generator instead.
pub fn optimize<F: CostFunction>(
    cost_function: &F,
    config: SwarmConfig,
) -> Result<OptimizationOutcome> {
    let mut driver = ParticleSwarm::new(config, rand::thread_rng())?;
    Ok(driver.run(cost_function))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{ackley, sphere};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn driver(seed: u64, config: SwarmConfig) -> ParticleSwarm<StdRng> {
        ParticleSwarm::new(config, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn positions_stay_inside_bounds_after_every_pass() {
        let config = SwarmConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut swarm = Swarm::initialize(&config, &ackley, &mut rng);
        let mut pso = driver(12, config.clone());

        for _ in 0..50 {
            pso.step(&mut swarm, 0.7, &ackley);
            for particle in &swarm.particles {
                for dim in 0..2 {
                    assert!(particle.position[dim] >= config.lower_bound);
                    assert!(particle.position[dim] <= config.upper_bound);
                }
            }
        }
    }

    #[test]
    fn velocities_stay_inside_the_symmetric_clamp() {
        let config = SwarmConfig::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut swarm = Swarm::initialize(&config, &ackley, &mut rng);
        let mut pso = driver(22, config.clone());

        for _ in 0..50 {
            pso.step(&mut swarm, 0.9, &ackley);
            for particle in &swarm.particles {
                for dim in 0..2 {
                    assert!(particle.velocity[dim] >= -config.max_velocity);
                    assert!(particle.velocity[dim] <= config.max_velocity);
                }
            }
        }
    }

    #[test]
    fn global_best_fitness_never_regresses() {
        let config = SwarmConfig::default();
        let mut rng = StdRng::seed_from_u64(31);
        let mut swarm = Swarm::initialize(&config, &ackley, &mut rng);
        let mut pso = driver(32, config);

        let mut previous = swarm.best_fitness;
        for _ in 0..100 {
            pso.step(&mut swarm, 0.6, &ackley);
            assert!(swarm.best_fitness <= previous);
            previous = swarm.best_fitness;
        }
    }

    #[test]
    fn fitness_cache_matches_current_position_after_a_pass() {
        let config = SwarmConfig::default();
        let mut rng = StdRng::seed_from_u64(41);
        let mut swarm = Swarm::initialize(&config, &ackley, &mut rng);
        let mut pso = driver(42, config);

        pso.step(&mut swarm, 0.7, &ackley);
        for particle in &swarm.particles {
            assert_eq!(
                particle.fitness,
                ackley(particle.position[0], particle.position[1])
            );
        }
    }

    #[test]
    fn zero_iteration_budget_returns_the_initial_best() {
        let config = SwarmConfig {
            max_iterations: 0,
            ..SwarmConfig::default()
        };

        // Replay the driver's initialization draws to recover the swarm the
        // run started from.
        let outcome = driver(55, config.clone()).run(&sphere);
        let mut rng = StdRng::seed_from_u64(55);
        let swarm = Swarm::initialize(&config, &sphere, &mut rng);

        assert_eq!(outcome.iterations, 0);
        assert!(!outcome.converged);
        assert_eq!(outcome.best_position, swarm.best_position);
        assert_eq!(outcome.best_fitness, swarm.best_fitness);
    }

    #[test]
    fn equal_seeds_reproduce_the_exact_outcome() {
        let config = SwarmConfig::default();
        let first = driver(77, config.clone()).run(&ackley);
        let second = driver(77, config).run(&ackley);
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_seeds_explore_differently() {
        let config = SwarmConfig {
            max_iterations: 5,
            ..SwarmConfig::default()
        };
        let first = driver(1, config.clone()).run(&ackley);
        let second = driver(2, config).run(&ackley);
        assert_ne!(first.best_position, second.best_position);
    }

    #[test]
    fn invalid_configuration_is_rejected_at_construction() {
        let config = SwarmConfig {
            num_particles: 0,
            ..SwarmConfig::default()
        };
        assert!(ParticleSwarm::new(config, StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn sphere_runs_converge_within_a_generous_budget() {
        let config = SwarmConfig {
            max_iterations: 500,
            ..SwarmConfig::default()
        };

        // Convergence is stochastic per seed, so scan a few seeds.
        let outcome = (90..95)
            .map(|seed| driver(seed, config.clone()).run(&sphere))
            .find(|outcome| outcome.converged)
            .expect("no run out of five converged on the sphere bowl");
        assert!(outcome.best_fitness < 1e-3);
    }

    #[test]
    fn one_shot_entry_point_runs_to_completion() {
        let config = SwarmConfig {
            max_iterations: 5,
            ..SwarmConfig::default()
        };
        let outcome = optimize(&sphere, config).unwrap();
        assert!(outcome.iterations <= 5);
    }

    #[test]
    fn iteration_count_never_exceeds_the_budget() {
        for seed in 0..5 {
            let config = SwarmConfig {
                max_iterations: 25,
                ..SwarmConfig::default()
            };
            let outcome = driver(seed, config).run(&ackley);
            assert!(outcome.iterations <= 25);
            if !outcome.converged {
                assert_eq!(outcome.iterations, 25);
            }
        }
    }
}
