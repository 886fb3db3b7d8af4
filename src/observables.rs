//! Per satellite observable series
use gnss::prelude::SV;
use hifitime::Epoch;

use crate::observation::ObservationFrame;

/// [Observables] exposes the columns of an [ObservationFrame] as
/// chronological series, all aligned with [Observables::time].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Observables {
    /// Every satellite of the source frame, whatever the selection
    pub prns: Vec<SV>,
    pub time: Vec<Epoch>,
    pub l1: Vec<f64>,
    pub l2: Vec<f64>,
    pub c1: Vec<f64>,
    pub p2: Vec<f64>,
    pub l1_lli: Vec<u8>,
    pub l2_lli: Vec<u8>,
}

impl Observables {
    /// Extracts the observables of `sv`, or of every satellite when None.
    /// Missing lock indicators are reported as 0. No gap filling is performed.
    pub fn new(frame: &ObservationFrame, sv: Option<SV>) -> Self {
        let mut observables = Self {
            prns: frame.satellites(),
            ..Default::default()
        };
        let rows = frame
            .iter()
            .filter(|(key, _)| sv.map(|sv| key.sv == sv).unwrap_or(true));
        for (key, row) in rows {
            observables.time.push(key.epoch);
            observables.l1.push(row.l1);
            observables.l2.push(row.l2);
            observables.c1.push(row.c1);
            observables.p2.push(row.p2);
            observables.l1_lli.push(row.l1_lli.unwrap_or(0));
            observables.l2_lli.push(row.l2_lli.unwrap_or(0));
        }
        observables
    }
    /// One series per satellite of the frame
    pub fn by_satellite(frame: &ObservationFrame) -> Vec<(SV, Self)> {
        frame
            .satellites()
            .into_iter()
            .map(|sv| (sv, Self::new(frame, Some(sv))))
            .collect()
    }
    pub fn len(&self) -> usize {
        self.time.len()
    }
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
