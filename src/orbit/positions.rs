use hifitime::{Duration, Epoch, TimeSeries};

use gnss::prelude::SV;

use crate::{error::DomainError, orbit::OrbitTable, spline::Spline};

/// Degree of the interpolating spline
pub const SPLINE_DEGREE: usize = 5;

/// Default resampling period
pub const DEFAULT_STEP_SECONDS: f64 = 30.0;

/// [OrbitPositions] is the chronological ECEF trajectory (km)
/// of a single satellite, either native or resampled.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPositions {
    sv: SV,
    epochs: Vec<Epoch>,
    x_km: Vec<f64>,
    y_km: Vec<f64>,
    z_km: Vec<f64>,
}

impl OrbitPositions {
    /// Extracts the native positions of `sv`
    pub fn from_table(table: &OrbitTable, sv: SV) -> Result<Self, DomainError> {
        let mut positions = Self {
            sv,
            epochs: Vec::new(),
            x_km: Vec::new(),
            y_km: Vec::new(),
            z_km: Vec::new(),
        };
        // table is indexed by epoch: positions are sorted and distinct
        for (epoch, (x, y, z)) in table.positions(sv) {
            positions.epochs.push(epoch);
            positions.x_km.push(x);
            positions.y_km.push(y);
            positions.z_km.push(z);
        }
        if positions.epochs.is_empty() {
            return Err(DomainError::NoSuchSatellite(sv));
        }
        Ok(positions)
    }
    pub fn sv(&self) -> SV {
        self.sv
    }
    pub fn len(&self) -> usize {
        self.epochs.len()
    }
    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }
    /// Sampling epochs, in chronological order
    pub fn epochs(&self) -> &[Epoch] {
        &self.epochs
    }
    pub fn x_km(&self) -> &[f64] {
        &self.x_km
    }
    pub fn y_km(&self) -> &[f64] {
        &self.y_km
    }
    pub fn z_km(&self) -> &[f64] {
        &self.z_km
    }
    /// Time indexed positions
    pub fn iter(&self) -> impl Iterator<Item = (Epoch, (f64, f64, f64))> + '_ {
        self.epochs
            .iter()
            .enumerate()
            .map(|(i, t)| (*t, (self.x_km[i], self.y_km[i], self.z_km[i])))
    }
    /// Resamples these positions with given step, 30s by default.
    /// See [Self::resample].
    pub fn position(&self, step: Option<Duration>) -> Result<Self, DomainError> {
        self.resample(step.unwrap_or(Duration::from_seconds(DEFAULT_STEP_SECONDS)))
    }
    /// Resamples these positions on a uniform grid of given step, spanning
    /// exactly one day from the first native epoch (end excluded).
    /// Each axis is interpolated by a degree 5 spline, and extrapolated past the
    /// last native sample. Grid points matching a native epoch keep their native value.
    pub fn resample(&self, step: Duration) -> Result<Self, DomainError> {
        if step <= Duration::ZERO {
            return Err(DomainError::InvalidStep);
        }
        if self.len() < SPLINE_DEGREE + 1 {
            return Err(DomainError::NotEnoughSamples {
                degree: SPLINE_DEGREE,
                required: SPLINE_DEGREE + 1,
                found: self.len(),
            });
        }

        let t0 = self.epochs[0];
        let abscissa = |t: Epoch| (t - t0).to_seconds();

        let spline = |values: &[f64]| {
            let samples = self
                .epochs
                .iter()
                .zip(values.iter())
                .map(|(t, value)| (abscissa(*t), *value))
                .collect::<Vec<_>>();
            Spline::interpolate(&samples, SPLINE_DEGREE)
        };

        let (x_spline, y_spline, z_spline) =
            (spline(&self.x_km)?, spline(&self.y_km)?, spline(&self.z_km)?);

        let mut resampled = Self {
            sv: self.sv,
            epochs: Vec::new(),
            x_km: Vec::new(),
            y_km: Vec::new(),
            z_km: Vec::new(),
        };

        for t in TimeSeries::exclusive(t0, t0 + Duration::from_days(1.0), step) {
            let (x, y, z) = match self.epochs.binary_search(&t) {
                Ok(i) => (self.x_km[i], self.y_km[i], self.z_km[i]),
                Err(_) => {
                    let dt = abscissa(t);
                    (
                        x_spline.evaluate(dt),
                        y_spline.evaluate(dt),
                        z_spline.evaluate(dt),
                    )
                },
            };
            resampled.epochs.push(t);
            resampled.x_km.push(x);
            resampled.y_km.push(y);
            resampled.z_km.push(z);
        }

        Ok(resampled)
    }
}
