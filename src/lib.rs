//! Ant colony optimization for the maximum clique problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// error types
pub mod error;

/// graph with pheromone levels on its edges
pub mod graph;

/// read DIMACS edge lists
pub mod dimacs;

/// weighted random choice
pub mod selector;

/// probabilistic clique construction (one ant)
pub mod clique;

/// evaporation and elitist reinforcement
pub mod pheromone;

/// statistics of each generation
pub mod stats;

/// colony: generations, parameters and results
pub mod colony;

/// helper and utility methods for executables
pub mod util;
