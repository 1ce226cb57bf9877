use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

/// A CSV file held in memory, one named column per series.
#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<csv::StringRecord>,
}

impl Dataset {
    /// Loads a data file, rejecting one without any data rows.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open data file {}", path.display()))?;
        let dataset =
            Self::from_reader(file).with_context(|| format!("Failed to read {}", path.display()))?;
        if dataset.is_empty() {
            bail!("Data file {} has no data rows", path.display());
        }
        Ok(dataset)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();
        let records = csv_reader.records().collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(rows = records.len(), "loaded dataset");
        Ok(Self { headers, records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parses every value of column `name` as `f64`.
    ///
    /// Rows are numbered from 1, the header excluded.
    pub fn column(&self, name: &str) -> Result<Vec<f64>> {
        let Some(idx) = self.headers.iter().position(|h| h == name) else {
            bail!(
                "Column '{}' not found; available columns: {}",
                name,
                self.headers.join(", ")
            );
        };

        self.records
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let raw = record.get(idx).unwrap_or_default();
                raw.parse::<f64>().with_context(|| {
                    format!("Row {}, column '{}': '{}' is not a number", row + 1, name, raw)
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "date,fund,index,tbill\n\
                       2024-01,0.021,0.015,0.003\n\
                       2024-02, -0.012 ,-0.020,0.003\n\
                       2024-03,0.034,0.025,0.004\n";

    #[test]
    fn reads_named_columns() {
        let ds = Dataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.headers, ["date", "fund", "index", "tbill"]);
        assert_eq!(ds.column("fund").unwrap(), vec![0.021, -0.012, 0.034]);
        assert_eq!(ds.column("tbill").unwrap(), vec![0.003, 0.003, 0.004]);
    }

    #[test]
    fn unknown_column_lists_the_alternatives() {
        let ds = Dataset::from_reader(CSV.as_bytes()).unwrap();
        let err = ds.column("bench").unwrap_err().to_string();
        assert!(err.contains("'bench'"));
        assert!(err.contains("fund, index"));
    }

    #[test]
    fn bad_value_names_row_and_column() {
        let ds = Dataset::from_reader("a,b\n1,2\n3,x\n".as_bytes()).unwrap();
        let err = ds.column("b").unwrap_err().to_string();
        assert_eq!(err, "Row 2, column 'b': 'x' is not a number");
        assert_eq!(ds.column("a").unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn empty_cell_is_not_a_number() {
        let ds = Dataset::from_reader("a,b\n1,\n".as_bytes()).unwrap();
        assert!(ds.column("b").is_err());
    }

    #[test]
    fn header_only_file_is_empty() {
        let ds = Dataset::from_reader("a,b\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
        assert!(ds.column("a").unwrap().is_empty());
    }

    #[test]
    fn data_file_needs_at_least_one_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "fund,index\n").unwrap();
        let err = Dataset::from_path(file.path()).unwrap_err().to_string();
        assert!(err.contains("has no data rows"));

        writeln!(file, "0.01,0.02").unwrap();
        assert_eq!(Dataset::from_path(file.path()).unwrap().len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Dataset::from_path(Path::new("no/such/returns.csv")).unwrap_err();
        assert!(err.to_string().contains("no/such/returns.csv"));
    }
}
