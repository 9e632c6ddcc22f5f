//! Polynomial feature expansion.
//!
//! For `k` input features and total degree `d`, the expanded matrix contains
//! every monomial `x_{j1} · x_{j2} · … · x_{jt}` with `t ≤ d` and
//! `j1 ≤ j2 ≤ … ≤ jt` (combinations with repetition), bias first:
//!
//! ```text
//! 1, x0, x1, …, x0^2, x0 x1, …, x1^2, …
//! ```
//!
//! The column count is `C(k + d, d)`, which grows quickly (5005 columns at
//! degree 9 over six features), so all widths are computed, never assumed.

use nalgebra::DMatrix;

use crate::error::AppError;

/// Number of monomials of total degree `<= degree` over `n_features` inputs.
pub fn output_width(n_features: usize, degree: usize) -> usize {
    binomial(n_features + degree, degree)
}

/// `n choose k` with exact integer steps.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc = 1usize;
    for i in 0..k {
        // acc * (n - i) is always divisible by (i + 1) at this point.
        acc = acc * (n - i) / (i + 1);
    }
    acc
}

/// Deterministic polynomial expansion for a fixed input width and degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolynomialFeatures {
    n_features: usize,
    degree: usize,
    /// One entry per output column: the (non-decreasing) input indices multiplied together.
    terms: Vec<Vec<usize>>,
}

impl PolynomialFeatures {
    pub fn new(n_features: usize, degree: usize) -> Self {
        let mut terms = Vec::with_capacity(output_width(n_features, degree));
        let mut current = Vec::with_capacity(degree);
        for total in 0..=degree {
            push_combinations(n_features, 0, total, &mut current, &mut terms);
        }
        Self {
            n_features,
            degree,
            terms,
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn n_input_features(&self) -> usize {
        self.n_features
    }

    pub fn n_output_features(&self) -> usize {
        self.terms.len()
    }

    /// Expand every row of `x`.
    pub fn transform(&self, x: &DMatrix<f64>) -> Result<DMatrix<f64>, AppError> {
        if x.ncols() != self.n_features {
            return Err(AppError::shape(format!(
                "polynomial expansion built for {} features, got {} columns",
                self.n_features,
                x.ncols()
            )));
        }

        Ok(DMatrix::from_fn(x.nrows(), self.terms.len(), |i, c| {
            self.terms[c].iter().fold(1.0, |acc, &j| acc * x[(i, j)])
        }))
    }

    /// Names of the output columns, e.g. `1`, `a`, `a^2`, `a b`.
    pub fn feature_names(&self, input_names: &[String]) -> Vec<String> {
        self.terms
            .iter()
            .map(|term| {
                if term.is_empty() {
                    return "1".to_string();
                }
                let mut parts: Vec<String> = Vec::new();
                let mut idx = 0;
                while idx < term.len() {
                    let j = term[idx];
                    let mut power = 1;
                    while idx + power < term.len() && term[idx + power] == j {
                        power += 1;
                    }
                    let name = input_names.get(j).cloned().unwrap_or_else(|| format!("x{j}"));
                    if power == 1 {
                        parts.push(name);
                    } else {
                        parts.push(format!("{name}^{power}"));
                    }
                    idx += power;
                }
                parts.join(" ")
            })
            .collect()
    }
}

fn push_combinations(
    n_features: usize,
    start: usize,
    remaining: usize,
    current: &mut Vec<usize>,
    out: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        out.push(current.clone());
        return;
    }
    for j in start..n_features {
        current.push(j);
        push_combinations(n_features, j, remaining - 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn degree_zero_is_a_column_of_ones() {
        let x = DMatrix::from_fn(5, 6, |i, j| (i + j) as f64 * 0.3 - 1.0);
        let poly = PolynomialFeatures::new(6, 0);
        let out = poly.transform(&x).unwrap();

        assert_eq!(out.ncols(), 1);
        assert_eq!(out.nrows(), 5);
        assert!(out.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn degree_two_column_order() {
        let x = DMatrix::from_row_slice(1, 2, &[2.0, 3.0]);
        let poly = PolynomialFeatures::new(2, 2);
        let out = poly.transform(&x).unwrap();

        // 1, a, b, a^2, a b, b^2
        assert_eq!(out.row(0).iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
    }

    #[test]
    fn feature_names_group_powers() {
        let poly = PolynomialFeatures::new(2, 3);
        let names = poly.feature_names(&["a".to_string(), "b".to_string()]);
        assert_eq!(
            names,
            vec!["1", "a", "b", "a^2", "a b", "b^2", "a^3", "a^2 b", "a b^2", "b^3"]
        );
    }

    #[test]
    fn width_of_the_full_sweep() {
        assert_eq!(output_width(6, 0), 1);
        assert_eq!(output_width(6, 1), 7);
        assert_eq!(output_width(6, 3), 84);
        assert_eq!(output_width(6, 9), 5005);
    }

    #[test]
    fn transform_rejects_wrong_width() {
        let x = DMatrix::<f64>::zeros(2, 5);
        let err = PolynomialFeatures::new(6, 2).transform(&x).unwrap_err();
        assert!(matches!(err, AppError::ShapeMismatch(_)));
    }

    proptest! {
        #[test]
        fn expansion_width_is_binomial(k in 1usize..6, d in 0usize..6, n in 1usize..5) {
            let x = DMatrix::from_fn(n, k, |i, j| 0.5 + (i * k + j) as f64 * 0.1);
            let out = PolynomialFeatures::new(k, d).transform(&x).unwrap();
            prop_assert_eq!(out.ncols(), binomial(k + d, d));
            prop_assert_eq!(out.nrows(), n);
        }
    }
}
