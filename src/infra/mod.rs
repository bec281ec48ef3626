// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Persistence that does not belong to any business layer:
//
//   artifact.rs — writes the trained forest to a fixed path
//                 with bincode and reads it back

/// Persisted classifier artifact (bincode)
pub mod artifact;
