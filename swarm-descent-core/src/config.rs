//! Run configuration for the particle swarm optimizer.
//!
//! Every tunable of the update loop is an explicit field here; the optimizer
//! itself holds no process-wide state. The defaults reproduce the classic
//! small-swarm setup for 2-D benchmark surfaces.

use crate::{Error, Result};

/// Particle Swarm Optimization (PSO) configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SwarmConfig {
    /// Number of particles in the swarm
    pub num_particles: usize,
    /// Lower edge of the search space, applied to both axes
    pub lower_bound: f64,
    /// Upper edge of the search space, applied to both axes
    pub upper_bound: f64,
    /// Velocity cap per axis; updates are hard-clamped to `[-max_velocity, max_velocity]`
    pub max_velocity: f64,
    /// Cognitive coefficient (attraction to a particle's personal best)
    pub cognitive: f64,
    /// Social coefficient (attraction to the global best)
    pub social: f64,
    /// Half-open range the per-run inertia weight is drawn from
    pub inertia_range: (f64, f64),
    /// Known optimum value the swarm drives toward
    pub target_fitness: f64,
    /// Convergence threshold for early stopping
    pub convergence_threshold: f64,
    /// Maximum number of update iterations
    pub max_iterations: usize,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            num_particles: 20,
            lower_bound: -5.0,
            upper_bound: 5.0,
            max_velocity: 0.1,
            cognitive: 2.0,
            social: 2.0,
            inertia_range: (0.5, 1.0),
            target_fitness: 0.0,
            convergence_threshold: 1e-3,
            max_iterations: 100,
        }
    }
}

impl SwarmConfig {
    /// Reject configurations the update loop has no defined behavior for.
    ///
    /// `max_iterations == 0` is accepted: a zero-budget run performs no
    /// update pass and reports the initialization-time best.
    pub fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(Error::EmptySwarm);
        }
        if !(self.upper_bound > self.lower_bound)
            || !self.lower_bound.is_finite()
            || !self.upper_bound.is_finite()
        {
            return Err(Error::InvalidBounds {
                lo: self.lower_bound,
                hi: self.upper_bound,
            });
        }
        if !(self.max_velocity > 0.0) || !self.max_velocity.is_finite() {
            return Err(Error::InvalidVelocityLimit(self.max_velocity));
        }
        let (w_lo, w_hi) = self.inertia_range;
        if !(w_hi > w_lo) || !w_lo.is_finite() || !w_hi.is_finite() {
            return Err(Error::InvalidInertiaRange { lo: w_lo, hi: w_hi });
        }
        if !(self.convergence_threshold > 0.0) {
            return Err(Error::InvalidConvergenceThreshold(
                self.convergence_threshold,
            ));
        }
        Ok(())
    }
}
