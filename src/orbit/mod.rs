//! Satellite orbits: precise positions (SP3) and their interpolation
use std::collections::BTreeMap;

use gnss::prelude::SV;
use hifitime::{Epoch, TimeScale};
use itertools::Itertools;

mod positions;

pub use positions::{OrbitPositions, DEFAULT_STEP_SECONDS, SPLINE_DEGREE};

/// Orbit records are indexed by [Epoch] and [SV]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrbitKey {
    pub epoch: Epoch,
    pub sv: SV,
}

/// Orbit product metadata
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitHeader {
    /// Producing agency, like "IGS"
    pub agency: String,
    /// [TimeScale] the epochs are expressed in
    pub time_scale: TimeScale,
    /// Source file name
    pub filename: String,
}

/// [OrbitTable] is the content of an orbit product,
/// as returned by a [crate::loader::Loader].
/// ECEF positions are expressed in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitTable {
    pub header: OrbitHeader,
    pub record: BTreeMap<OrbitKey, (f64, f64, f64)>,
}

impl OrbitTable {
    /// Satellites described in this product, in ascending order
    pub fn satellites(&self) -> Vec<SV> {
        self.record.keys().map(|k| k.sv).unique().sorted().collect()
    }
    /// Chronological positions of given satellite
    pub fn positions(&self, sv: SV) -> impl Iterator<Item = (Epoch, (f64, f64, f64))> + '_ {
        self.record
            .iter()
            .filter_map(move |(k, xyz)| if k.sv == sv { Some((k.epoch, *xyz)) } else { None })
    }
}
