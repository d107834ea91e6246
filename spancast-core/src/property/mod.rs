//! Property-based tests for the four algorithms.
//!
//! Sequential Kruskal is the trusted oracle; every property compares the
//! other algorithms against it across randomly generated connected graphs
//! and a spread of cohort shapes (single peer, powers of two, odd sizes,
//! more peers than vertices).

mod equivalence;
mod strategies;
mod structural;
mod tests;
mod types;
