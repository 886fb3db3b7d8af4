//! Receiver observations data model
use std::collections::BTreeMap;

use gnss::prelude::SV;
use hifitime::Epoch;
use itertools::Itertools;

pub use rinex::prelude::obs::LliFlags;

/// Observations are indexed by sampling [Epoch] and [SV]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObsKey {
    pub epoch: Epoch,
    pub sv: SV,
}

/// Observables retrieved from a receiver file, any of them may be missing
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RawObservation {
    /// L1 carrier phase (cycles)
    pub l1: Option<f64>,
    /// L2 carrier phase (cycles)
    pub l2: Option<f64>,
    /// C/A code pseudo range (m)
    pub c1: Option<f64>,
    /// P2 code pseudo range (m)
    pub p2: Option<f64>,
    /// L1 loss of lock indicator, [LliFlags] bits
    pub l1_lli: Option<u8>,
    /// L2 loss of lock indicator, [LliFlags] bits
    pub l2_lli: Option<u8>,
}

/// Receiver file metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiverHeader {
    /// Approximate ECEF position of the antenna (m)
    pub position: [f64; 3],
    /// Receiver model
    pub rx_model: String,
    /// Time system the epochs are expressed in, like "GPS"
    pub time_system: String,
    /// File format revision
    pub version: f64,
    /// Source file name
    pub filename: String,
}

/// [ObservationTable] is the content of a receiver file,
/// as returned by a [crate::loader::Loader]
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationTable {
    pub header: ReceiverHeader,
    pub record: BTreeMap<ObsKey, RawObservation>,
}

impl ObservationTable {
    /// Satellites described in this table, in ascending order
    pub fn satellites(&self) -> Vec<SV> {
        self.record.keys().map(|k| k.sv).unique().sorted().collect()
    }
}

/// A complete row: the four observables are present,
/// lock indicators remain optional.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ObservationRow {
    pub l1: f64,
    pub l2: f64,
    pub c1: f64,
    pub p2: f64,
    pub l1_lli: Option<u8>,
    pub l2_lli: Option<u8>,
}

impl ObservationRow {
    /// Converts a [RawObservation], only when L1, L2, C1 and P2 are all present
    pub fn from_raw(raw: &RawObservation) -> Option<Self> {
        Some(Self {
            l1: raw.l1?,
            l2: raw.l2?,
            c1: raw.c1?,
            p2: raw.p2?,
            l1_lli: raw.l1_lli,
            l2_lli: raw.l2_lli,
        })
    }
    /// Returns a copy where missing lock indicators are set to 0
    pub fn with_filled_lli(&self) -> Self {
        Self {
            l1_lli: Some(self.l1_lli.unwrap_or(0)),
            l2_lli: Some(self.l2_lli.unwrap_or(0)),
            ..*self
        }
    }
}

/// [ObservationFrame] is a time and satellite indexed table of complete rows
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ObservationFrame {
    pub record: BTreeMap<ObsKey, ObservationRow>,
}

impl ObservationFrame {
    pub fn len(&self) -> usize {
        self.record.len()
    }
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
    /// Iterates rows in chronological order, then by satellite
    pub fn iter(&self) -> impl Iterator<Item = (&ObsKey, &ObservationRow)> {
        self.record.iter()
    }
    /// Satellites described in this frame, in ascending order
    pub fn satellites(&self) -> Vec<SV> {
        self.record.keys().map(|k| k.sv).unique().sorted().collect()
    }
    /// Distinct sampling epochs, in chronological order
    pub fn epochs(&self) -> Vec<Epoch> {
        self.record.keys().map(|k| k.epoch).dedup().collect()
    }
}

impl FromIterator<(ObsKey, ObservationRow)> for ObservationFrame {
    fn from_iter<I: IntoIterator<Item = (ObsKey, ObservationRow)>>(iter: I) -> Self {
        Self {
            record: iter.into_iter().collect(),
        }
    }
}
