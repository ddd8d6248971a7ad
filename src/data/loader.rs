use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{CellValue, TenureDataset};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tenure dataset from a file.  Dispatch by extension.
///
/// Only `.csv` is supported: a header row of column names followed by one
/// record per employee. Cell types are inferred per cell.
pub fn load_file(path: &Path) -> Result<TenureDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader with encoding fallback
// ---------------------------------------------------------------------------

/// Read and parse a CSV file, trying UTF-8 first and ISO-8859-1 when the
/// bytes are not valid UTF-8. Exported turnover datasets are often Latin-1.
fn load_csv(path: &Path) -> Result<TenureDataset> {
    let bytes = std::fs::read(path).context("reading CSV file")?;
    let text = match std::str::from_utf8(&bytes) {
        Ok(s) => s.to_owned(),
        Err(_) => {
            log::warn!(
                "{} is not valid UTF-8, falling back to ISO-8859-1",
                path.display()
            );
            latin1_to_string(&bytes)
        }
    };
    parse_csv(&text)
}

/// Decode ISO-8859-1: every byte maps to the Unicode code point of the
/// same value, so the decode cannot fail.
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn parse_csv(text: &str) -> Result<TenureDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let cells: Vec<CellValue> = record.iter().map(CellValue::parse).collect();
        rows.push(cells);
    }

    Ok(TenureDataset::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("tenure_scope_{name}"));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn utf8_csv_loads_rows_and_headers() {
        let path = write_temp(
            "utf8.csv",
            b"stag,event,profession\n3.5,1,HR\n12.0,0,IT\n7.2,1,Sales\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.headers, vec!["stag", "event", "profession"]);
    }

    #[test]
    fn latin1_csv_loads_via_fallback() {
        // 0xE9 is 'é' in ISO-8859-1 and an invalid UTF-8 start byte here.
        let mut bytes = b"stag,event,profession\n3.5,1,Ing".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"nieur\n12.0,0,IT\n");
        let path = write_temp("latin1.csv", &bytes);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        let profs: Vec<String> = ds.professions().into_iter().collect();
        assert!(profs.contains(&"Ingénieur".to_string()));
    }

    #[test]
    fn unreadable_file_is_an_error_not_a_crash() {
        let path = std::env::temp_dir().join("tenure_scope_missing.csv");
        let _ = std::fs::remove_file(&path);
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn ragged_rows_are_an_error() {
        let path = write_temp("ragged.csv", b"stag,event\n1.0,1\n2.0\n");
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let path = write_temp("data.parquet", b"not a csv");
        assert!(load_file(&path).is_err());
    }
}
