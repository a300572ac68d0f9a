//! Lattice snapshots on disk
//!
//! Two formats are written, named `<prefix><sweep>.<ext>` inside the output
//! directory: plain CSV (one lattice row per line) and a gzip-compressed
//! JSON record that also carries the sweep label.

use color_eyre::eyre::{eyre, Result, WrapErr};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use ising::Lattice;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

const CSV_EXTENSION: &str = "csv";
const COMPRESSED_EXTENSION: &str = "json.gz";

/// A lattice configuration labeled with the sweep it was taken at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub sweep: u64,
    pub size: usize,
    pub spins: Vec<Vec<i8>>,
}

impl SnapshotRecord {
    pub fn capture(sweep: u64, lattice: &Lattice) -> Self {
        SnapshotRecord {
            sweep,
            size: lattice.size(),
            spins: lattice.rows().collect(),
        }
    }

    /// Rebuild a lattice, re-checking every spin value.
    pub fn to_lattice(&self) -> Result<Lattice> {
        let lattice = Lattice::from_rows(&self.spins)?;
        if lattice.size() != self.size {
            return Err(eyre!(
                "snapshot declares size {} but holds {} rows",
                self.size,
                lattice.size()
            ));
        }
        Ok(lattice)
    }
}

/// Writes snapshots into one output directory.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    directory: PathBuf,
    prefix: String,
    csv: bool,
    compressed: bool,
}

impl SnapshotWriter {
    /// Create the output directory if needed and resolve it to an absolute path.
    pub fn new(directory: impl AsRef<Path>, prefix: &str, csv: bool, compressed: bool) -> Result<Self> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory).wrap_err_with(|| {
            format!("Unable to create output directory: {}", directory.display())
        })?;
        let directory = directory.canonicalize().wrap_err_with(|| {
            format!("Unable to resolve output directory: {}", directory.display())
        })?;

        Ok(SnapshotWriter {
            directory,
            prefix: prefix.to_string(),
            csv,
            compressed,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Whether any snapshot format is switched on.
    pub fn is_enabled(&self) -> bool {
        self.csv || self.compressed
    }

    pub fn csv_path(&self, sweep: u64) -> PathBuf {
        self.path_for(sweep, CSV_EXTENSION)
    }

    pub fn compressed_path(&self, sweep: u64) -> PathBuf {
        self.path_for(sweep, COMPRESSED_EXTENSION)
    }

    fn path_for(&self, sweep: u64, extension: &str) -> PathBuf {
        self.directory
            .join(format!("{}{}.{}", self.prefix, sweep, extension))
    }

    /// Write the lattice in every enabled format; returns the files written.
    pub fn write(&self, sweep: u64, lattice: &Lattice) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        if self.csv {
            let path = self.csv_path(sweep);
            write_csv(&path, lattice)?;
            written.push(path);
        }
        if self.compressed {
            let path = self.compressed_path(sweep);
            write_compressed(&path, &SnapshotRecord::capture(sweep, lattice))?;
            written.push(path);
        }
        for path in &written {
            debug!("Saved snapshot of sweep {} to {}", sweep, path.display());
        }
        Ok(written)
    }
}

fn write_csv(path: &Path, lattice: &Lattice) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .wrap_err_with(|| format!("Unable to create snapshot file: {}", path.display()))?;
    for row in lattice.rows() {
        writer
            .serialize(&row)
            .wrap_err_with(|| format!("Failed to write snapshot row to {}", path.display()))?;
    }
    writer.flush()?;
    Ok(())
}

fn write_compressed(path: &Path, record: &SnapshotRecord) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("Unable to create snapshot file: {}", path.display()))?;
    let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    serde_json::to_writer(&mut encoder, record).wrap_err("Failed to serialize snapshot")?;
    encoder
        .finish()
        .wrap_err("Failed to finish snapshot compression")?
        .flush()?;
    Ok(())
}

/// Load a compressed snapshot written by [`SnapshotWriter`].
pub fn read_compressed(path: &Path) -> Result<SnapshotRecord> {
    let file = File::open(path)
        .wrap_err_with(|| format!("Unable to open snapshot file: {}", path.display()))?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let record = serde_json::from_reader(decoder)
        .wrap_err_with(|| format!("Failed to parse snapshot file: {}", path.display()))?;
    Ok(record)
}

/// Load a CSV snapshot written by [`SnapshotWriter`].
pub fn read_csv(path: &Path) -> Result<Lattice> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_path(path)
        .wrap_err_with(|| format!("Unable to open snapshot file: {}", path.display()))?;
    let rows = reader
        .deserialize::<Vec<i8>>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .wrap_err_with(|| format!("Bad spin row in {}", path.display()))?;
    Ok(Lattice::from_rows(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ising::Spin;

    #[test]
    fn test_record_rejects_invalid_spins() {
        let record = SnapshotRecord {
            sweep: 3,
            size: 2,
            spins: vec![vec![1, 1], vec![1, 5]],
        };
        assert!(record.to_lattice().is_err());
    }

    #[test]
    fn test_record_capture() {
        let mut lattice = Lattice::uniform(3, Spin::Up).unwrap();
        lattice.set(0, 2, Spin::Down);
        let record = SnapshotRecord::capture(7, &lattice);
        assert_eq!(record.sweep, 7);
        assert_eq!(record.size, 3);
        assert_eq!(record.spins[0], vec![1, 1, -1]);
        assert_eq!(record.to_lattice().unwrap(), lattice);
    }

    #[test]
    fn test_csv_rows_are_plain_spins() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SnapshotWriter::new(dir.path(), "step_", true, false).unwrap();
        let mut lattice = Lattice::uniform(3, Spin::Down).unwrap();
        lattice.set(1, 2, Spin::Up);

        let written = writer.write(4, &lattice).unwrap();
        assert_eq!(written, vec![writer.csv_path(4)]);

        let text = fs::read_to_string(writer.csv_path(4)).unwrap();
        assert_eq!(text, "-1,-1,-1\n-1,-1,1\n-1,-1,-1\n");
        assert_eq!(read_csv(&writer.csv_path(4)).unwrap(), lattice);
    }

    #[test]
    fn test_read_csv_rejects_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "1,-1\n1,x\n").unwrap();
        assert!(read_csv(&path).is_err());

        fs::write(&path, "1,-1\n1,3\n").unwrap();
        assert!(read_csv(&path).is_err());
    }
}
