//! Low-level fit-and-score routine shared by single fits and the sweep.
//!
//! Given an already split dataset:
//! - build the design matrices for train and test with the same feature map
//! - fit OLS on the training design
//! - predict the test design and score against the held-out target

use nalgebra::{DMatrix, DVector};

use crate::domain::{FeatureMap, Scores};
use crate::error::AppError;
use crate::math::{PolynomialFeatures, score};
use crate::models::LinearModel;

/// Train/test matrices produced by a split.
#[derive(Debug, Clone)]
pub struct SplitData {
    pub x_train: DMatrix<f64>,
    pub y_train: DVector<f64>,
    pub x_test: DMatrix<f64>,
    pub y_test: DVector<f64>,
}

/// A fitted model together with its held-out scores.
#[derive(Debug, Clone)]
pub struct FitOutcome {
    pub model: LinearModel,
    pub scores: Scores,
    /// Width of the design matrix the model was fit on.
    pub n_columns: usize,
    pub predicted: DVector<f64>,
}

/// Apply a feature map to a raw feature matrix.
pub fn design_matrix(x: &DMatrix<f64>, map: FeatureMap) -> Result<DMatrix<f64>, AppError> {
    match map {
        FeatureMap::Raw => Ok(x.clone()),
        FeatureMap::Polynomial(degree) => PolynomialFeatures::new(x.ncols(), degree).transform(x),
    }
}

/// Fit on the training side of `data` and score on the test side.
pub fn fit_and_score(data: &SplitData, map: FeatureMap) -> Result<FitOutcome, AppError> {
    match map {
        FeatureMap::Raw => fit_designs(
            &design_matrix(&data.x_train, map)?,
            &data.y_train,
            &design_matrix(&data.x_test, map)?,
            &data.y_test,
        ),
        FeatureMap::Polynomial(degree) => {
            let poly = PolynomialFeatures::new(data.x_train.ncols(), degree);
            fit_polynomial(data, &poly)
        }
    }
}

/// Same as [`fit_and_score`] with a prebuilt expansion (the sweep reuses one per degree).
pub fn fit_polynomial(data: &SplitData, poly: &PolynomialFeatures) -> Result<FitOutcome, AppError> {
    let train = poly.transform(&data.x_train)?;
    let test = poly.transform(&data.x_test)?;
    fit_designs(&train, &data.y_train, &test, &data.y_test)
}

fn fit_designs(
    train: &DMatrix<f64>,
    y_train: &DVector<f64>,
    test: &DMatrix<f64>,
    y_test: &DVector<f64>,
) -> Result<FitOutcome, AppError> {
    let model = LinearModel::fit(train, y_train)?;
    let predicted = model.predict(test)?;
    let scores = score(y_test.as_slice(), predicted.as_slice())?;

    Ok(FitOutcome {
        model,
        scores,
        n_columns: train.ncols(),
        predicted,
    })
}
