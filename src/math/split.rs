//! Random train/test partitioning of row indices.
//!
//! The test side gets `ceil(test_size · n)` rows and the train side the rest.
//! Both sides must be non-empty, otherwise there is nothing to fit or score.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::SplitConfig;
use crate::error::AppError;

/// Disjoint row-index sets covering `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// `(train, test)` row counts for `n` rows.
pub fn split_sizes(n: usize, config: &SplitConfig) -> Result<(usize, usize), AppError> {
    config.validate()?;
    let n_test = (config.test_size * n as f64).ceil() as usize;
    let n_train = n.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(AppError::shape(format!(
            "test size {} on {n} rows leaves an empty train or test set",
            config.test_size
        )));
    }
    Ok((n_train, n_test))
}

/// Shuffle `0..n` and cut it into train and test indices.
pub fn train_test_split<R: Rng + ?Sized>(
    n: usize,
    config: &SplitConfig,
    rng: &mut R,
) -> Result<Split, AppError> {
    let (n_train, _) = split_sizes(n, config)?;

    let mut idx: Vec<usize> = (0..n).collect();
    idx.shuffle(rng);
    let test = idx.split_off(n_train);

    Ok(Split { train: idx, test })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sizes_round_test_side_up() {
        let cfg = SplitConfig { test_size: 0.4 };
        assert_eq!(split_sizes(308, &cfg).unwrap(), (184, 124));

        let cfg = SplitConfig { test_size: 0.3 };
        assert_eq!(split_sizes(20, &cfg).unwrap(), (14, 6));
    }

    #[test]
    fn split_is_a_partition() {
        let mut rng = StdRng::seed_from_u64(7);
        let split = train_test_split(50, &SplitConfig { test_size: 0.4 }, &mut rng).unwrap();

        assert_eq!(split.train.len(), 30);
        assert_eq!(split.test.len(), 20);

        let mut all: Vec<usize> = split.train.iter().chain(&split.test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_split() {
        let cfg = SplitConfig { test_size: 0.25 };
        let a = train_test_split(40, &cfg, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = train_test_split(40, &cfg, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_dataset_is_rejected() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = train_test_split(1, &SplitConfig { test_size: 0.4 }, &mut rng).unwrap_err();
        assert!(matches!(err, AppError::ShapeMismatch(_)));
    }
}
