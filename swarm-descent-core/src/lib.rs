//! # SwarmDescent Core
//!
//! Core particle swarm optimization primitives for SwarmDescent.
//!
//! This crate provides:
//! - The swarm data model ([`particle::Particle`], [`swarm::Swarm`])
//! - The bounded optimization loop ([`optimizer::ParticleSwarm`])
//! - Benchmark objectives ([`objective::ackley`], [`objective::sphere`])
//! - Run configuration ([`config::SwarmConfig`])
//!
//! The optimizer is generic over [`rand::Rng`], so a seeded generator
//! replays a run draw-for-draw.
//!
//! ## Feature Flags
//!
//! - `telemetry`: Enable tracing-based telemetry

pub mod config;
pub mod objective;
pub mod optimizer;
pub mod particle;
pub mod swarm;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SwarmConfig;
    pub use crate::objective::*;
    pub use crate::optimizer::*;
    pub use crate::particle::Particle;
    pub use crate::swarm::Swarm;
    pub use crate::{Error, Result, DIMENSIONS};
}

/// Arity of the search space. Positions and velocities are ordered pairs.
pub const DIMENSIONS: usize = 2;

/// Result type for SwarmDescent operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for SwarmDescent core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The swarm cannot be empty
    #[error("swarm population must be at least 1")]
    EmptySwarm,
    /// Search bounds must be finite with the lower edge below the upper edge
    #[error("invalid search bounds [{lo}, {hi}]")]
    InvalidBounds { lo: f64, hi: f64 },
    /// The velocity cap must be a positive finite value
    #[error("maximum velocity must be positive, got {0}")]
    InvalidVelocityLimit(f64),
    /// The inertia weight is sampled from a half-open range, which must be non-empty
    #[error("inertia weight range [{lo}, {hi}) is empty or reversed")]
    InvalidInertiaRange { lo: f64, hi: f64 },
    /// Convergence is judged against a strictly positive threshold
    #[error("convergence threshold must be positive, got {0}")]
    InvalidConvergenceThreshold(f64),
}
