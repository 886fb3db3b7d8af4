//! Daily batch processing of receiver files
use std::path::PathBuf;

#[cfg(feature = "log")]
use log::{error, info};

use walkdir::WalkDir;

use crate::{
    attributes::AttributeSummary,
    error::Error,
    folders::create_directory,
    loader::Loader,
    paths::PathContext,
    processed,
    receiver::Receiver,
};

/// Outcome of [run_for_all_files]
#[derive(Debug, Default, Clone)]
pub struct BatchReport {
    /// Generated processed files
    pub outputs: Vec<PathBuf>,
    /// Input files that could not be processed, with the reason why
    pub skipped: Vec<(PathBuf, String)>,
    /// Attributes of every processed station
    pub attributes: AttributeSummary,
}

impl BatchReport {
    /// Writes the attribute summary to the daily JSON file, returns its path
    pub fn save_attributes(&self, ctx: &PathContext) -> Result<PathBuf, Error> {
        create_directory(ctx.json())?;
        let path = ctx.json_file();
        self.attributes.to_file(&path)?;
        #[cfg(feature = "log")]
        info!("{} stations summarized in \"{}\"", self.attributes.len(), path.display());
        Ok(path)
    }
}

/// Processes the receiver files of the day described by `ctx`.
/// Files are visited in filename order, `limit` caps the number of
/// directory entries considered. Files that fail to load or to be written
/// are skipped and reported, only listing the input directory or
/// creating the output directory are fatal.
pub fn run_for_all_files<L: Loader + ?Sized>(
    ctx: &PathContext,
    loader: &L,
    limit: Option<usize>,
) -> Result<BatchReport, Error> {
    let input = ctx.rinex();
    if !input.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("\"{}\" is not a directory", input.display()),
        )
        .into());
    }

    let mut entries = Vec::<PathBuf>::new();
    let walkdir = WalkDir::new(&input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in walkdir {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() {
            entries.push(entry.into_path());
        }
    }

    let extension = ctx.rinex_extension();
    let candidates = entries
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .filter(|path| path.to_string_lossy().ends_with(&extension))
        .collect::<Vec<_>>();

    create_directory(ctx.process())?;

    let mut report = BatchReport::default();

    for path in candidates {
        let receiver = match Receiver::load(loader, &path) {
            Ok(receiver) => receiver,
            Err(e) => {
                #[cfg(feature = "log")]
                error!("failed to load \"{}\": {}", path.display(), e);
                report.skipped.push((path, e.to_string()));
                continue;
            },
        };

        let (station, attributes) = receiver.attributes();
        let output = ctx.process_file(&station);

        match processed::write(&output, receiver.frame()) {
            Ok(_) => {
                #[cfg(feature = "log")]
                info!("\"{}\" has been generated", output.display());
                report.attributes.insert(&station, attributes);
                report.outputs.push(output);
            },
            Err(e) => {
                #[cfg(feature = "log")]
                error!("failed to write \"{}\": {}", output.display(), e);
                report.skipped.push((path, e.to_string()));
            },
        }
    }

    Ok(report)
}
