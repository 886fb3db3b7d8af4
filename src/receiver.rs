//! Receiver observations loading
use std::path::Path;

use gnss::prelude::SV;

#[cfg(feature = "log")]
use log::debug;

use crate::{
    attributes::StationAttributes,
    error::Error,
    loader::Loader,
    observation::{ObservationFrame, ObservationRow, ObservationTable, ReceiverHeader},
};

/// [Receiver] holds the complete observations of a receiver file:
/// rows lacking one of L1, L2, C1 or P2 are dropped,
/// missing lock indicators are set to 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Receiver {
    header: ReceiverHeader,
    prns: Vec<SV>,
    frame: ObservationFrame,
}

impl Receiver {
    /// Loads a receiver file with given [Loader]
    pub fn load<L: Loader + ?Sized>(loader: &L, path: &Path) -> Result<Self, Error> {
        let table = loader.load_observations(path)?;
        Ok(Self::from_table(table))
    }
    /// Builds [Receiver] from decoded [ObservationTable]
    pub fn from_table(table: ObservationTable) -> Self {
        let prns = table.satellites();

        let frame = table
            .record
            .iter()
            .filter_map(|(key, raw)| {
                let row = ObservationRow::from_raw(raw)?;
                Some((*key, row.with_filled_lli()))
            })
            .collect::<ObservationFrame>();

        #[cfg(feature = "log")]
        debug!(
            "{}: {}/{} complete rows",
            table.header.filename,
            frame.len(),
            table.record.len()
        );

        Self {
            header: table.header,
            prns,
            frame,
        }
    }
    pub fn header(&self) -> &ReceiverHeader {
        &self.header
    }
    /// Complete observations
    pub fn frame(&self) -> &ObservationFrame {
        &self.frame
    }
    pub fn into_frame(self) -> ObservationFrame {
        self.frame
    }
    /// Satellites present in the file, including those
    /// without any complete row
    pub fn prns(&self) -> &[SV] {
        &self.prns
    }
    /// Station code: first 4 characters of the file name
    pub fn station(&self) -> String {
        self.header.filename.chars().take(4).collect()
    }
    /// (station, [StationAttributes]) of this receiver
    pub fn attributes(&self) -> (String, StationAttributes) {
        (self.station(), StationAttributes::from(&self.header))
    }
}
