//! Test toolkit: temporary workspaces, synthetic data files
//! and an in-memory [Loader].
use std::{
    collections::HashMap,
    fs::{create_dir_all, remove_dir_all, File},
    io::Write,
    path::{Path, PathBuf},
};

use rand::{distributions::Alphanumeric, Rng};

use crate::{
    error::{Error, LoadingError},
    loader::Loader,
    observation::ObservationTable,
    orbit::OrbitTable,
};

pub fn random_name(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .map(char::from)
        .collect()
}

/// Temporary directory, deleted on drop
pub struct TestWorkspace {
    pub root: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("gnss-db-{}", random_name(8)));
        create_dir_all(&root).unwrap();
        Self { root }
    }
    /// Writes `content` to given path, creating parent directories
    pub fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            create_dir_all(parent).unwrap();
        }
        let mut fd = File::create(path).unwrap();
        fd.write_all(content.as_bytes()).unwrap();
    }
}

impl Drop for TestWorkspace {
    fn drop(&mut self) {
        let _ = remove_dir_all(&self.root);
    }
}

/// Observables described by synthetic RINEX files
pub const OBSERVABLES: [&str; 7] = ["L1", "L2", "C1", "P1", "P2", "S1", "S2"];

fn header_line(content: &str, label: &str) -> String {
    format!("{:<60}{}\n", content, label)
}

/// Synthetic (mixed) RINEX 2.11 observations,
/// sampled every 30s from 2014-01-15 00:00:00 GPST
#[derive(Debug, Clone)]
pub struct Rinex2Builder {
    pub rx_model: String,
    pub position: [f64; 3],
    pub satellites: Vec<String>,
    pub epochs: usize,
    /// (epoch index, satellite) rows with blank C1
    pub missing_c1: Vec<(usize, String)>,
    /// (epoch index, satellite) rows flagged with L1 loss of lock
    pub lock_loss: Vec<(usize, String)>,
}

impl Rinex2Builder {
    pub fn new(satellites: &[&str], epochs: usize) -> Self {
        Self {
            rx_model: "TRIMBLE NETR5".to_string(),
            position: [4896357.1234, -3917187.4321, -1080282.5678],
            satellites: satellites.iter().map(|sv| sv.to_string()).collect(),
            epochs,
            missing_c1: Vec::new(),
            lock_loss: Vec::new(),
        }
    }
    /// Value of given observable, exactly representable with 3 decimals
    pub fn value(epoch: usize, sv: &str, code: &str) -> f64 {
        let prn = sv[1..].trim().parse::<f64>().unwrap();
        let i = epoch as f64;
        match code {
            "L1" => 110_000_000.125 + 1_000_000.0 * prn + 1000.0 * i,
            "L2" => 85_000_000.25 + 1_000_000.0 * prn + 750.0 * i,
            "C1" => 20_000_000.5 + 100_000.0 * prn + 10.0 * i,
            "P1" => 20_000_001.5 + 100_000.0 * prn + 10.0 * i,
            "P2" => 20_000_002.75 + 100_000.0 * prn + 10.0 * i,
            "S1" => 45.0,
            _ => 40.0,
        }
    }
    fn epoch_line(&self, epoch: usize) -> String {
        let seconds = epoch * 30;
        let (hh, mm, ss) = (seconds / 3600, (seconds / 60) % 60, seconds % 60);
        format!(
            " 14  1 15{:>3}{:>3}{:11.7}  0{:>3}",
            hh,
            mm,
            ss as f64,
            self.satellites.len()
        )
    }
    pub fn build(&self) -> String {
        let mut content = String::new();
        content.push_str(&header_line(
            &format!("{:>9}{:11}{:<20}{:<20}", "2.11", "", "OBSERVATION DATA", "M (MIXED)"),
            "RINEX VERSION / TYPE",
        ));
        content.push_str(&header_line(
            "teqc  2013Mar15     UNAVCO              20140116 00:07:12UTC",
            "PGM / RUN BY / DATE",
        ));
        content.push_str(&header_line("ALAR", "MARKER NAME"));
        content.push_str(&header_line(
            &format!("{:<20}{:<20}{:<20}", "5054K", self.rx_model, "4.85"),
            "REC # / TYPE / VERS",
        ));
        content.push_str(&header_line(
            &format!(
                "{:14.4}{:14.4}{:14.4}",
                self.position[0], self.position[1], self.position[2]
            ),
            "APPROX POSITION XYZ",
        ));
        content.push_str(&header_line(
            &format!(
                "{:6}{}",
                OBSERVABLES.len(),
                OBSERVABLES
                    .iter()
                    .map(|code| format!("{:>6}", code))
                    .collect::<String>()
            ),
            "# / TYPES OF OBSERV",
        ));
        content.push_str(&header_line(
            &format!(
                "{:6}{:6}{:6}{:6}{:6}{:13.7}{:>8}",
                2014, 1, 15, 0, 0, 0.0, "GPS"
            ),
            "TIME OF FIRST OBS",
        ));
        content.push_str(&header_line("", "END OF HEADER"));

        for epoch in 0..self.epochs {
            let mut line = self.epoch_line(epoch);
            for (i, sv) in self.satellites.iter().enumerate() {
                if i > 0 && i % 12 == 0 {
                    line.push('\n');
                    line.push_str(&" ".repeat(32));
                }
                line.push_str(sv);
            }
            content.push_str(&line);
            content.push('\n');

            for sv in self.satellites.iter() {
                for (i, code) in OBSERVABLES.iter().enumerate() {
                    let missing = *code == "C1"
                        && self
                            .missing_c1
                            .iter()
                            .any(|(e, s)| *e == epoch && s == sv);
                    if missing {
                        content.push_str(&" ".repeat(16));
                    } else {
                        let lli = if *code == "L1"
                            && self.lock_loss.iter().any(|(e, s)| *e == epoch && s == sv)
                        {
                            '1'
                        } else {
                            ' '
                        };
                        content.push_str(&format!(
                            "{:14.3}{}{}",
                            Self::value(epoch, sv, code),
                            lli,
                            '7'
                        ));
                    }
                    if i % 5 == 4 || i == OBSERVABLES.len() - 1 {
                        content.push('\n');
                    }
                }
            }
        }
        content
    }
}

/// Synthetic ECEF trajectory (km)
pub fn trajectory(prn: u8, t_seconds: f64) -> (f64, f64, f64) {
    let w = 2.0 * std::f64::consts::PI / 43082.0;
    let phase = prn as f64;
    (
        20000.0 * (w * t_seconds + phase).cos(),
        20000.0 * (w * t_seconds + phase).sin(),
        15000.0 * (0.5 * w * t_seconds + phase).sin(),
    )
}

/// Synthetic SP3-c product: GPS satellites `prns`,
/// `samples` epochs spaced by `interval` seconds from 2014-01-15 00:00:00 GPST.
/// `null_prn` is reported with null coordinates.
pub fn sp3_content(prns: &[u8], samples: usize, interval: usize, null_prn: Option<u8>) -> String {
    let mut content = String::new();
    content.push_str(&format!(
        "{:<55}{:>5}\n",
        format!(
            "#cP2014  1 15  0  0  0.00000000 {:>7} ORBIT IGb08 HLM",
            samples
        ),
        "IGS"
    ));
    content.push_str("## 1775 259200.00000000   900.00000000 56672 0.0000000000000\n");
    content.push_str("+   32   G01G02G03G04G05G06G07G08G09G10G11G12G13G14G15G16G17\n");
    content.push_str("%c G  cc GPS ccc cccc cccc cccc cccc ccccc ccccc ccccc ccccc\n");
    content.push_str("%c cc cc ccc ccc cccc cccc cccc cccc ccccc ccccc ccccc ccccc\n");
    content.push_str("/* FINAL ORBIT COMBINATION FROM WEIGHTED AVERAGE OF:\n");
    for i in 0..samples {
        let seconds = i * interval;
        let (hh, mm, ss) = (seconds / 3600, (seconds / 60) % 60, seconds % 60);
        content.push_str(&format!(
            "*  2014  1 15 {:>2} {:>2} {:11.8}\n",
            hh, mm, ss as f64
        ));
        for prn in prns {
            let (x, y, z) = if Some(*prn) == null_prn {
                (0.0, 0.0, 0.0)
            } else {
                trajectory(*prn, seconds as f64)
            };
            content.push_str(&format!(
                "PG{:02}{:14.6}{:14.6}{:14.6}{:14.6}\n",
                prn, x, y, z, 12.345678
            ));
        }
    }
    content.push_str("EOF\n");
    content
}

/// In-memory [Loader], indexed by file name.
/// Unknown files fail to load.
#[derive(Debug, Default)]
pub struct MemoryLoader {
    pub observations: HashMap<String, ObservationTable>,
    pub orbits: HashMap<String, OrbitTable>,
}

fn filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}

impl Loader for MemoryLoader {
    fn load_observations(&self, path: &Path) -> Result<ObservationTable, Error> {
        self.observations
            .get(&filename(path))
            .cloned()
            .ok_or(Error::Loading(LoadingError::EmptyRecord))
    }
    fn load_orbits(&self, path: &Path) -> Result<OrbitTable, Error> {
        self.orbits
            .get(&filename(path))
            .cloned()
            .ok_or(Error::Loading(LoadingError::EmptyRecord))
    }
}
