// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Coordinates the other layers; no ML math, no printing.
//
//   config.rs         — AppConfig, AccuracyPolicy, JSON loading
//   context.rs        — memoized dataset → training data → model
//   model_provider.rs — the train-or-load decision
//   session.rs        — slider state and command dispatch

pub mod config;

pub mod context;

/// Train-or-load decision with memoization
pub mod model_provider;

/// Interactive prediction session
pub mod session;
