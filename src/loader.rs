//! Data files loading, on top of the `rinex` and `sp3` decoders
use std::{collections::BTreeMap, fs::File, io::BufReader, path::Path};

#[cfg(feature = "log")]
use log::debug;

use rinex::prelude::{obs::EpochFlag, Rinex, TimeScale, Version};
use sp3::prelude::SP3;

use crate::{
    calendar::time_system,
    error::{Error, LoadingError},
    observation::{ObsKey, ObservationTable, RawObservation, ReceiverHeader},
    orbit::{OrbitHeader, OrbitKey, OrbitTable},
};

/// Observables an [ObservationTable] is made of
const OBSERVABLES: [&str; 4] = ["L1", "L2", "C1", "P2"];

/// [Loader] decodes receiver observations and orbit products.
pub trait Loader {
    /// Decodes a receiver observation file
    fn load_observations(&self, path: &Path) -> Result<ObservationTable, Error>;
    /// Decodes an orbit product
    fn load_orbits(&self, path: &Path) -> Result<OrbitTable, Error>;
}

/// [FileLoader] decodes RINEX 2.x observation files and SP3 products
/// from the file system, with seamless .gz decompression on `flate2` feature.
#[derive(Debug, Default, Copy, Clone)]
pub struct FileLoader {}

fn filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

#[derive(Debug, Copy, Clone, PartialEq)]
enum Compression {
    Plain,
    #[cfg(feature = "flate2")]
    Gzip,
}

fn compression(path: &Path) -> Result<Compression, LoadingError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => {
            #[cfg(feature = "flate2")]
            {
                Ok(Compression::Gzip)
            }
            #[cfg(not(feature = "flate2"))]
            {
                Err(LoadingError::CompressionNotSupported)
            }
        },
        Some("Z") => Err(LoadingError::CompressionNotSupported),
        _ => Ok(Compression::Plain),
    }
}

// Decoding is only attempted on readable files: i/o errors are ours.
fn decode_rinex(path: &Path) -> Result<Rinex, Error> {
    let compression = compression(path)?;
    let fd = File::open(path)?;
    let rinex = match compression {
        Compression::Plain => Rinex::parse(&mut BufReader::new(fd)),
        #[cfg(feature = "flate2")]
        Compression::Gzip => Rinex::from_gzip_file(path),
    };
    Ok(rinex.map_err(LoadingError::Rinex)?)
}

fn decode_sp3(path: &Path) -> Result<SP3, Error> {
    compression(path)?;
    File::open(path)?;
    Ok(SP3::from_path(path).map_err(LoadingError::Sp3)?)
}

/// Epochs whose observations are retained: events are skipped
fn retained(flag: EpochFlag) -> bool {
    matches!(flag, EpochFlag::Ok | EpochFlag::PowerFailure)
}

/// Only RINEX 2.x observations are supported
fn supported_revision(version: Version) -> Result<(), LoadingError> {
    if version.major == 2 {
        Ok(())
    } else {
        Err(LoadingError::NonSupportedRevision(format!(
            "{}.{:02}",
            version.major, version.minor
        )))
    }
}

/// Maps a decoded observation RINEX onto an [ObservationTable]
fn observation_table(rinex: &Rinex, filename: String) -> Result<ObservationTable, LoadingError> {
    if !rinex.is_observation_rinex() {
        return Err(LoadingError::NotObservationRinex);
    }

    let header = &rinex.header;
    supported_revision(header.version)?;

    let specs = header
        .obs
        .as_ref()
        .ok_or(LoadingError::MissingHeaderField("# / TYPES OF OBSERV"))?;

    for code in OBSERVABLES {
        let described = specs
            .codes
            .values()
            .flatten()
            .any(|observable| observable.to_string() == code);
        if !described {
            return Err(LoadingError::MissingObservable(code));
        }
    }

    let (x, y, z) = header
        .rx_position
        .ok_or(LoadingError::MissingHeaderField("APPROX POSITION XYZ"))?;

    let rx_model = header
        .rcvr
        .as_ref()
        .map(|rcvr| rcvr.model.trim().to_string())
        .unwrap_or_default();

    let time_scale = specs
        .timeof_first_obs
        .map(|t| t.time_scale)
        .unwrap_or(TimeScale::GPST);

    let mut record = BTreeMap::<ObsKey, RawObservation>::new();

    for (key, signal) in rinex.signal_observations_iter() {
        if !retained(key.flag) {
            continue;
        }
        let obs_key = ObsKey {
            epoch: key.epoch,
            sv: signal.sv,
        };
        let lli = signal
            .lli
            .filter(|flags| !flags.is_empty())
            .map(|flags| flags.bits());

        match signal.observable.to_string().as_str() {
            "L1" => {
                let raw = record.entry(obs_key).or_default();
                raw.l1 = Some(signal.value);
                raw.l1_lli = lli;
            },
            "L2" => {
                let raw = record.entry(obs_key).or_default();
                raw.l2 = Some(signal.value);
                raw.l2_lli = lli;
            },
            "C1" => record.entry(obs_key).or_default().c1 = Some(signal.value),
            "P2" => record.entry(obs_key).or_default().p2 = Some(signal.value),
            _ => {},
        }
    }

    if record.is_empty() {
        return Err(LoadingError::EmptyRecord);
    }

    Ok(ObservationTable {
        header: ReceiverHeader {
            position: [x, y, z],
            rx_model,
            time_system: time_system(time_scale).to_string(),
            version: f64::from(header.version.major) + f64::from(header.version.minor) / 100.0,
            filename,
        },
        record,
    })
}

/// Maps a decoded SP3 product onto an [OrbitTable]
fn orbit_table(sp3: &SP3, filename: String) -> Result<OrbitTable, LoadingError> {
    let record = sp3
        .sv_position()
        .filter(|(_, _, (x, y, z))| *x != 0.0 || *y != 0.0 || *z != 0.0)
        .map(|(epoch, sv, xyz)| (OrbitKey { epoch, sv }, xyz))
        .collect::<BTreeMap<_, _>>();

    if record.is_empty() {
        return Err(LoadingError::EmptyRecord);
    }

    Ok(OrbitTable {
        header: OrbitHeader {
            agency: sp3.agency.trim().to_string(),
            time_scale: sp3.time_scale,
            filename,
        },
        record,
    })
}

impl Loader for FileLoader {
    fn load_observations(&self, path: &Path) -> Result<ObservationTable, Error> {
        let rinex = decode_rinex(path)?;
        let table = observation_table(&rinex, filename(path))?;
        #[cfg(feature = "log")]
        debug!(
            "{}: {} observations ({} satellites)",
            table.header.filename,
            table.record.len(),
            table.satellites().len()
        );
        Ok(table)
    }
    fn load_orbits(&self, path: &Path) -> Result<OrbitTable, Error> {
        let sp3 = decode_sp3(path)?;
        let table = orbit_table(&sp3, filename(path))?;
        #[cfg(feature = "log")]
        debug!(
            "{}: {} positions ({} satellites)",
            table.header.filename,
            table.record.len(),
            table.satellites().len()
        );
        Ok(table)
    }
}
