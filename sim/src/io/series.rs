use color_eyre::eyre::{Result, WrapErr};
use csv::Writer;
use ising::Observables;
use std::fs::File;
use std::path::{Path, PathBuf};

/// CSV time series of energy and magnetization, one row per recorded sweep.
///
/// The header comes from the [`Observables`] field names.
pub struct ObservableSeries {
    path: PathBuf,
    writer: Writer<File>,
}

impl ObservableSeries {
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let writer = Writer::from_path(&path)
            .wrap_err_with(|| format!("Unable to create observables file: {}", path.display()))?;
        Ok(ObservableSeries { path, writer })
    }

    pub fn record(&mut self, observables: &Observables) -> Result<()> {
        self.writer
            .serialize(observables)
            .wrap_err_with(|| format!("Failed to append to {}", self.path.display()))?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<PathBuf> {
        self.writer.flush()?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_reads_back_as_observables() {
        let dir = tempfile::tempdir().unwrap();
        let mut series = ObservableSeries::create(dir.path().join("obs.csv")).unwrap();
        let rows = [
            Observables {
                sweep: 0,
                energy: -12.0,
                magnetization: 4.0,
            },
            Observables {
                sweep: 10,
                energy: -32.0,
                magnetization: -16.0,
            },
        ];
        for row in &rows {
            series.record(row).unwrap();
        }
        let path = series.finish().unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), ["sweep", "energy", "magnetization"]);
        let read: Vec<Observables> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(read, rows);
    }
}
