//! # SwarmDescent
//!
//! **Particle swarm optimization over bounded 2-D cost surfaces — stochastic,
//! reproducible, embeddable behind any CLI or library surface.**
//!
//! SwarmDescent minimizes a scalar objective `f(x, y)` with a fixed-size
//! particle swarm: each particle carries a position, a velocity, and its own
//! best-seen position; every pass pulls particles toward their personal best
//! and the swarm-wide best, redrawing any coordinate that escapes the search
//! space. The loop stops when the global best fitness comes within a
//! configured threshold of the known optimum, or when the iteration budget
//! runs out.
//!
//! ## Quick Start
//!
//! ```rust
//! use swarm_descent::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! fn main() -> swarm_descent::Result<()> {
//!     let config = SwarmConfig::default();
//!     let mut optimizer = ParticleSwarm::new(config, StdRng::seed_from_u64(7))?;
//!
//!     let outcome = optimizer.run(&ackley);
//!     assert!(outcome.iterations <= optimizer.config().max_iterations);
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - [`swarm_descent_core`]: data model, update loop, benchmark objectives
//! - [`report`]: plain-text and JSON rendering of run outcomes

#![forbid(unsafe_code)]

// Re-export the algorithm crate
pub use swarm_descent_core as core;

// Re-export commonly used items at the top level
pub use swarm_descent_core::{
    config::SwarmConfig,
    objective::{ackley, sphere, CostFunction},
    optimizer::{optimize, OptimizationOutcome, ParticleSwarm},
    particle::Particle,
    swarm::Swarm,
    Error, Result, DIMENSIONS,
};

pub mod report;

/// Prelude module for convenient imports
///
/// ```rust,ignore
/// use swarm_descent::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::report;
}
