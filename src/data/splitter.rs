// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles samples with a seeded RNG and splits them into:
//   - Training set: used to fit the forest
//   - Test set:     used to score accuracy on unseen rows
//
// The test set takes ceil(n * test_fraction) samples and the
// training set takes the rest. With the same seed and the same
// input the split is identical on every run, so a persisted
// model can be scored against exactly the rows it was held out
// from.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Number of test samples for `total` rows.
pub fn test_count(total: usize, test_fraction: f64) -> usize {
    let count = ((total as f64) * test_fraction).ceil() as usize;
    count.min(total)
}

/// Seeded shuffle of `samples`, split into (train, test).
///
/// # Example
/// ```ignore
/// let (train, test) = split_train_test(all_samples, 0.2, 42);
/// // test has ceil(20%) of samples, train has the rest
/// ```
pub fn split_train_test<T>(mut samples: Vec<T>, test_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    let total    = samples.len();
    let n_test   = test_count(total, test_fraction);

    // split_off(n) leaves [0..n) in place and returns [n..)
    let train = samples.split_off(n_test);
    let test  = samples;

    tracing::debug!(
        "Dataset split: {} training, {} test (seed {})",
        train.len(),
        test.len(),
        seed,
    );

    (train, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = split_train_test(items, 0.2, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_test_share_rounds_up() {
        // 517 * 0.2 = 103.4 → 104 test rows
        let items: Vec<usize> = (0..517).collect();
        let (train, test)     = split_train_test(items, 0.2, 42);
        assert_eq!(test.len(),  104);
        assert_eq!(train.len(), 413);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, test)     = split_train_test(items, 0.3, 1);
        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_test((0..40).collect::<Vec<usize>>(), 0.2, 42);
        let b = split_train_test((0..40).collect::<Vec<usize>>(), 0.2, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, test)     = split_train_test(items, 0.2, 42);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }
}
