// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing what the
// system works with:
//
//   observation.rs — one weather reading + burned area, the
//                    derived risk label and the loaded table
//   inputs.rs      — the three bounded user inputs (sliders)
//   traits.rs      — the seams other layers implement
//                    (observation source, risk classifier)
//   error.rs       — the error taxonomy shared by all layers
//
// Rules for this layer:
//   - NO linfa / ndarray types here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits

/// Observations, risk labels and the observation table
pub mod observation;

/// Bounded slider inputs for a single prediction
pub mod inputs;

/// Core abstractions (traits) that other layers implement
pub mod traits;

/// Error types shared across the crate
pub mod error;
