use anyhow::{Context, Result, bail};

use crate::data::filter::profession_indices;
use crate::data::model::{TENURE_COLUMN, TenureDataset};
use crate::survival::FittedKaplanMeier;

// ---------------------------------------------------------------------------
// Artifacts produced by the three dashboard operations
// ---------------------------------------------------------------------------

/// A fitted curve ready for plotting.
pub struct CurveView {
    pub title: String,
    /// Set when the curve belongs to a single profession; drives line colour.
    pub profession: Option<String>,
    pub fitted: FittedKaplanMeier,
}

/// Per-record survival probabilities for one profession.
pub struct ProbabilityListing {
    pub profession: String,
    pub probabilities: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Fit the overall survival curve from user-chosen duration and event
/// columns across the whole dataset.
pub fn overall_curve(
    dataset: &TenureDataset,
    duration_col: &str,
    event_col: &str,
) -> Result<CurveView> {
    let durations = dataset
        .numeric_column(duration_col, None)
        .context("extracting duration column")?;
    let events = dataset
        .event_column(event_col)
        .context("extracting event column")?;

    let fitted = FittedKaplanMeier::fit(&durations, Some(&events))
        .context("fitting survival curve")?;

    Ok(CurveView {
        title: "Kaplan-Meier Survival Curve".to_string(),
        profession: None,
        fitted,
    })
}

/// Fit a survival curve for one profession from the fixed tenure column.
///
/// No event column is passed, so the fitter's default applies: every row
/// counts as an observed turnover. Inherited behaviour, kept as-is (see
/// DESIGN.md).
pub fn profession_curve(dataset: &TenureDataset, profession: &str) -> Result<CurveView> {
    let fitted = fit_profession(dataset, profession)?.1;
    Ok(CurveView {
        title: format!("Kaplan-Meier Survival Curve for {profession}"),
        profession: Some(profession.to_string()),
        fitted,
    })
}

/// Evaluate the profession curve at each subset record's own tenure value,
/// one probability per matching row.
pub fn profession_probabilities(
    dataset: &TenureDataset,
    profession: &str,
) -> Result<ProbabilityListing> {
    let (tenures, fitted) = fit_profession(dataset, profession)?;
    Ok(ProbabilityListing {
        profession: profession.to_string(),
        probabilities: fitted.survival_at_times(&tenures),
    })
}

/// Shared filter + fit for the per-profession operations. Returns the
/// subset's tenure values alongside the fit.
fn fit_profession(
    dataset: &TenureDataset,
    profession: &str,
) -> Result<(Vec<f64>, FittedKaplanMeier)> {
    let indices = profession_indices(dataset, profession);
    if indices.is_empty() {
        bail!("no rows match profession '{profession}'");
    }
    let tenures = dataset
        .numeric_column(TENURE_COLUMN, Some(&indices))
        .context("extracting tenure column")?;
    let fitted =
        FittedKaplanMeier::fit(&tenures, None).context("fitting survival curve")?;
    Ok((tenures, fitted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn sample_dataset() -> TenureDataset {
        let headers = vec![
            "stag".to_string(),
            "event".to_string(),
            "profession".to_string(),
        ];
        let raw: &[(f64, i64, &str)] = &[
            (3.0, 1, "Manager"),
            (7.5, 0, "Manager"),
            (12.0, 1, "Manager"),
            (2.0, 1, "IT"),
            (9.0, 0, "IT"),
            (5.5, 1, "HR"),
        ];
        let rows = raw
            .iter()
            .map(|&(stag, event, prof)| {
                vec![
                    CellValue::Float(stag),
                    CellValue::Integer(event),
                    CellValue::String(prof.to_string()),
                ]
            })
            .collect();
        TenureDataset::new(headers, rows)
    }

    #[test]
    fn overall_curve_is_monotonically_non_increasing() {
        let ds = sample_dataset();
        let view = overall_curve(&ds, "stag", "event").unwrap();
        let survival: Vec<f64> = view.fitted.survival_function().map(|(_, s)| s).collect();
        assert!(survival.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(view.title, "Kaplan-Meier Survival Curve");
    }

    #[test]
    fn overall_curve_rejects_missing_columns() {
        let ds = sample_dataset();
        assert!(overall_curve(&ds, "tenure", "event").is_err());
        assert!(overall_curve(&ds, "stag", "left_company").is_err());
    }

    #[test]
    fn profession_curve_treats_every_row_as_observed() {
        let ds = sample_dataset();
        let view = profession_curve(&ds, "Manager").unwrap();
        assert_eq!(view.title, "Kaplan-Meier Survival Curve for Manager");
        let survival: Vec<f64> = view.fitted.survival_function().map(|(_, s)| s).collect();
        assert!(survival.windows(2).all(|w| w[1] <= w[0]));
        // Three observed records: the curve reaches zero at the last tenure.
        assert_eq!(*survival.last().unwrap(), 0.0);
    }

    #[test]
    fn probabilities_decrease_with_tenure() {
        // Manager tenures are 3.0, 7.5, 12.0: each record's own tenure sits
        // one step further down the curve.
        let ds = sample_dataset();
        let listing = profession_probabilities(&ds, "Manager").unwrap();
        let expected = [2.0 / 3.0, 1.0 / 3.0, 0.0];
        assert_eq!(listing.probabilities.len(), expected.len());
        for (p, e) in listing.probabilities.iter().zip(expected) {
            assert!((p - e).abs() < 1e-12);
        }
    }

    #[test]
    fn probability_listing_has_one_entry_per_subset_row() {
        let ds = sample_dataset();
        let listing = profession_probabilities(&ds, "Manager").unwrap();
        assert_eq!(listing.probabilities.len(), 3);

        let listing = profession_probabilities(&ds, "HR").unwrap();
        assert_eq!(listing.probabilities.len(), 1);
    }

    #[test]
    fn empty_profession_subset_is_an_error() {
        let ds = sample_dataset();
        assert!(profession_probabilities(&ds, "Finance").is_err());
    }
}
