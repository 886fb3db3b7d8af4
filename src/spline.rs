//! Interpolating B-splines.
//!
//! The spline of degree `k` passes through every sample. Knots follow the
//! "not-a-knot" rule: `k+1` repeated end knots and interior knots located
//! on the sample abscissae (odd `k`) or between them (even `k`).
//! Coefficients solve the collocation system, basis functions are evaluated
//! with the Cox-de Boor recursion.
use nalgebra::{DMatrix, DVector};

use crate::error::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    degree: usize,
    knots: Vec<f64>,
    coefficients: Vec<f64>,
}

impl Spline {
    /// Fits a spline of given degree through `samples`: (abscissa, value)
    /// pairs, abscissae strictly increasing.
    /// ```
    /// use gnss_db::prelude::Spline;
    /// let samples = (0..10)
    ///     .map(|i| {
    ///         let x = i as f64;
    ///         (x, x * x)
    ///     })
    ///     .collect::<Vec<_>>();
    ///
    /// let spline = Spline::interpolate(&samples, 3)
    ///     .unwrap();
    ///
    /// assert!((spline.evaluate(2.5) - 6.25).abs() < 1.0E-9);
    /// ```
    pub fn interpolate(samples: &[(f64, f64)], degree: usize) -> Result<Self, DomainError> {
        let n = samples.len();
        if n < degree + 1 {
            return Err(DomainError::NotEnoughSamples {
                degree,
                required: degree + 1,
                found: n,
            });
        }

        let x = samples.iter().map(|(x, _)| *x).collect::<Vec<_>>();
        let knots = Self::not_a_knot(&x, degree);

        let mut spline = Self {
            degree,
            knots,
            coefficients: Vec::new(),
        };

        let mut collocation = DMatrix::<f64>::zeros(n, n);
        for (i, x_i) in x.iter().enumerate() {
            let span = spline.span(*x_i);
            for (r, value) in spline.basis(span, *x_i).into_iter().enumerate() {
                collocation[(i, span - degree + r)] = value;
            }
        }

        let values = DVector::from_iterator(n, samples.iter().map(|(_, y)| *y));

        let coefficients = collocation
            .lu()
            .solve(&values)
            .ok_or(DomainError::SingularSystem)?;

        spline.coefficients = coefficients.iter().copied().collect();
        Ok(spline)
    }
    pub fn degree(&self) -> usize {
        self.degree
    }
    /// Evaluates the spline at `x`. Abscissae outside
    /// the fitted interval extend the first or last polynomial piece.
    pub fn evaluate(&self, x: f64) -> f64 {
        let span = self.span(x);
        self.basis(span, x)
            .into_iter()
            .enumerate()
            .map(|(r, value)| self.coefficients[span - self.degree + r] * value)
            .sum()
    }
    fn not_a_knot(x: &[f64], k: usize) -> Vec<f64> {
        let n = x.len();
        let mut knots = Vec::with_capacity(n + k + 1);
        knots.extend(std::iter::repeat(x[0]).take(k + 1));
        if k % 2 == 1 {
            let m = (k + 1) / 2;
            knots.extend_from_slice(&x[m..n - m]);
        } else {
            let m = k / 2;
            knots.extend((m..n - m - 1).map(|j| (x[j] + x[j + 1]) / 2.0));
        }
        knots.extend(std::iter::repeat(x[n - 1]).take(k + 1));
        knots
    }
    /// Returns the knot span index, within [k, n-1]
    fn span(&self, x: f64) -> usize {
        let k = self.degree;
        let last = self.knots.len() - k - 2;
        let index = self.knots.partition_point(|knot| *knot <= x);
        index.saturating_sub(1).clamp(k, last)
    }
    /// Non vanishing basis functions N(span-k..=span) at `x`
    fn basis(&self, span: usize, x: f64) -> Vec<f64> {
        let k = self.degree;
        let mut values = vec![0.0; k + 1];
        let mut left = vec![0.0; k + 1];
        let mut right = vec![0.0; k + 1];
        values[0] = 1.0;
        for j in 1..=k {
            left[j] = x - self.knots[span + 1 - j];
            right[j] = self.knots[span + j] - x;
            let mut saved = 0.0;
            for r in 0..j {
                let temp = values[r] / (right[r + 1] + left[j - r]);
                values[r] = saved + right[r + 1] * temp;
                saved = left[j - r] * temp;
            }
            values[j] = saved;
        }
        values
    }
}
