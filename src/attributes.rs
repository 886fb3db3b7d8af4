//! Daily summary of receiver attributes
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{error::Error, observation::ReceiverHeader};

/// Attributes of one receiver, as stored in the daily summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationAttributes {
    /// Approximate ECEF position (m)
    pub position: [f64; 3],
    pub rxmodel: String,
    pub time_system: String,
    pub version: f64,
}

impl From<&ReceiverHeader> for StationAttributes {
    fn from(header: &ReceiverHeader) -> Self {
        Self {
            position: header.position,
            rxmodel: header.rx_model.clone(),
            time_system: header.time_system.clone(),
            version: header.version,
        }
    }
}

/// [AttributeSummary] gathers [StationAttributes] by station code.
/// It serializes as a JSON object keyed by station.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSummary {
    stations: BTreeMap<String, StationAttributes>,
}

impl AttributeSummary {
    /// Inserts (or replaces) attributes of given station
    pub fn insert(&mut self, station: &str, attributes: StationAttributes) {
        self.stations.insert(station.to_string(), attributes);
    }
    pub fn get(&self, station: &str) -> Option<&StationAttributes> {
        self.stations.get(station)
    }
    pub fn len(&self) -> usize {
        self.stations.len()
    }
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
    /// Iterates stations in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &StationAttributes)> {
        self.stations.iter()
    }
    /// Writes this summary as JSON
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
    /// Reads a summary previously written with [Self::to_file]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn json_layout() {
        let mut summary = AttributeSummary::default();
        summary.insert(
            "alar",
            StationAttributes {
                position: [4896357.1, -3917187.2, -1080282.3],
                rxmodel: "TRIMBLE NETR5".to_string(),
                time_system: "GPS".to_string(),
                version: 2.11,
            },
        );
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "alar": {
                    "position": [4896357.1, -3917187.2, -1080282.3],
                    "rxmodel": "TRIMBLE NETR5",
                    "time_system": "GPS",
                    "version": 2.11
                }
            })
        );
        let parsed: AttributeSummary = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, summary);
    }
}
