use super::model::{PROFESSION_COLUMN, TenureDataset};

// ---------------------------------------------------------------------------
// Profession filtering
// ---------------------------------------------------------------------------

/// Return indices of rows whose profession cell equals `profession` exactly.
///
/// Missing profession column yields an empty subset rather than an error so
/// the caller can report "no rows" uniformly.
pub fn profession_indices(dataset: &TenureDataset, profession: &str) -> Vec<usize> {
    let Ok(col) = dataset.column_index(PROFESSION_COLUMN) else {
        return Vec::new();
    };
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, cells)| cells[col].to_string() == profession)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn dataset_with_professions(professions: &[&str]) -> TenureDataset {
        let headers = vec!["stag".to_string(), "profession".to_string()];
        let rows = professions
            .iter()
            .enumerate()
            .map(|(i, p)| {
                vec![
                    CellValue::Float(i as f64 + 1.0),
                    CellValue::String(p.to_string()),
                ]
            })
            .collect();
        TenureDataset::new(headers, rows)
    }

    #[test]
    fn filter_matches_exact_profession_only() {
        let ds = dataset_with_professions(&["Manager", "IT", "Manager", "manager"]);
        let idx = profession_indices(&ds, "Manager");
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn unknown_profession_yields_empty_subset() {
        let ds = dataset_with_professions(&["HR", "IT"]);
        assert!(profession_indices(&ds, "Finance").is_empty());
    }

    #[test]
    fn missing_profession_column_yields_empty_subset() {
        let ds = TenureDataset::new(vec!["stag".to_string()], vec![vec![CellValue::Float(1.0)]]);
        assert!(profession_indices(&ds, "HR").is_empty());
    }
}
