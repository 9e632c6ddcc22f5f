//! Single-shot fits: one split, one feature map, one score.
//!
//! Used for the plain linear fit and the fixed-degree polynomial fit of the
//! report. Each call draws its own split from the supplied RNG.

use rand::Rng;

use crate::domain::{Dataset, FeatureMap, Scores, SplitConfig};
use crate::error::AppError;
use crate::fit::fitter::{SplitData, fit_and_score};
use crate::math::{PolynomialFeatures, train_test_split};
use crate::models::LinearModel;

#[derive(Debug, Clone)]
pub struct SingleFit {
    pub feature_map: FeatureMap,
    pub n_train: usize,
    pub n_test: usize,
    /// Design-matrix width (raw or expanded).
    pub n_columns: usize,
    pub model: LinearModel,
    /// One name per model coefficient.
    pub column_names: Vec<String>,
    pub scores: Scores,
    /// Held-out targets, in split order.
    pub observed: Vec<f64>,
    /// Predictions for `observed`, same order.
    pub predicted: Vec<f64>,
}

/// Split `dataset` once and fit/score the given feature map on it.
pub fn fit_single<R: Rng + ?Sized>(
    dataset: &Dataset,
    feature_map: FeatureMap,
    split: &SplitConfig,
    rng: &mut R,
) -> Result<SingleFit, AppError> {
    let split = train_test_split(dataset.n_rows(), split, rng)?;
    let (x_train, y_train) = dataset.select_rows(&split.train);
    let (x_test, y_test) = dataset.select_rows(&split.test);
    let data = SplitData {
        x_train,
        y_train,
        x_test,
        y_test,
    };

    let outcome = fit_and_score(&data, feature_map)?;
    tracing::info!(
        model = %feature_map.display_name(),
        columns = outcome.n_columns,
        r2 = outcome.scores.r2,
        mse = outcome.scores.mse,
        "single fit scored"
    );

    let column_names = match feature_map {
        FeatureMap::Raw => dataset.feature_names().to_vec(),
        FeatureMap::Polynomial(degree) => {
            PolynomialFeatures::new(dataset.n_features(), degree).feature_names(dataset.feature_names())
        }
    };

    Ok(SingleFit {
        feature_map,
        n_train: split.train.len(),
        n_test: split.test.len(),
        n_columns: outcome.n_columns,
        model: outcome.model,
        column_names,
        scores: outcome.scores,
        observed: data.y_test.iter().copied().collect(),
        predicted: outcome.predicted.iter().copied().collect(),
    })
}
