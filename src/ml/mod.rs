// ============================================================
// Layer 5 — ML / Model Layer (linfa)
// ============================================================
// All linfa code lives here. Other layers see the classifier
// through the RiskClassifier trait and the TrainingData arrays.
//
//   forest.rs  — bagged linfa-trees DecisionTrees with vote
//                probabilities and feature importances
//
//   trainer.rs — split, fit, predict, score; plus scoring an
//                already trained model on the held-out rows

/// Random forest ensemble over linfa-trees
pub mod forest;

/// Train/evaluate cycle and accuracy scoring
pub mod trainer;
