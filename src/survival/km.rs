use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SurvivalError {
    #[error("no observations to fit")]
    Empty,

    #[error("durations and events have different lengths ({0} vs {1})")]
    LengthMismatch(usize, usize),

    #[error("duration at index {0} is negative or not finite")]
    InvalidDuration(usize),
}

// ---------------------------------------------------------------------------
// FittedKaplanMeier – the product-limit estimate
// ---------------------------------------------------------------------------

/// A fitted Kaplan-Meier survival curve.
///
/// `timeline` holds 0 followed by every distinct observed duration in
/// increasing order; `survival[i]` is the estimated probability of still
/// being employed just after `timeline[i]`. The function is a
/// right-continuous step function.
#[derive(Debug, Clone)]
pub struct FittedKaplanMeier {
    timeline: Vec<f64>,
    survival: Vec<f64>,
}

impl FittedKaplanMeier {
    /// Fit the product-limit estimator.
    ///
    /// `events[i] = true` means the event (turnover) was observed at
    /// `durations[i]`; `false` means the record is censored there. Passing
    /// `None` treats every record as observed, the conventional fitter
    /// default when no censoring information exists.
    pub fn fit(durations: &[f64], events: Option<&[bool]>) -> Result<Self, SurvivalError> {
        if durations.is_empty() {
            return Err(SurvivalError::Empty);
        }
        if let Some(ev) = events {
            if ev.len() != durations.len() {
                return Err(SurvivalError::LengthMismatch(durations.len(), ev.len()));
            }
        }
        for (i, &d) in durations.iter().enumerate() {
            if !d.is_finite() || d < 0.0 {
                return Err(SurvivalError::InvalidDuration(i));
            }
        }

        let mut observations: Vec<(f64, bool)> = durations
            .iter()
            .enumerate()
            .map(|(i, &d)| (d, events.map_or(true, |ev| ev[i])))
            .collect();
        observations.sort_by(|a, b| a.0.total_cmp(&b.0));

        let mut timeline = vec![0.0];
        let mut survival = vec![1.0];

        let mut at_risk = observations.len();
        let mut s = 1.0;
        let mut i = 0;
        while i < observations.len() {
            let t = observations[i].0;
            let mut deaths = 0usize;
            let mut leaving = 0usize;
            while i < observations.len() && observations[i].0 == t {
                if observations[i].1 {
                    deaths += 1;
                }
                leaving += 1;
                i += 1;
            }
            if deaths > 0 {
                s *= 1.0 - deaths as f64 / at_risk as f64;
            }
            at_risk -= leaving;
            if t > 0.0 {
                timeline.push(t);
                survival.push(s);
            } else {
                // Events exactly at t = 0 fold into the leading point.
                survival[0] = s;
            }
        }

        Ok(FittedKaplanMeier { timeline, survival })
    }

    /// The step-function vertices as `(time, survival)` pairs.
    pub fn survival_function(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.timeline
            .iter()
            .copied()
            .zip(self.survival.iter().copied())
    }

    /// Evaluate the survival function at `t` (right-continuous step lookup).
    pub fn survival_at(&self, t: f64) -> f64 {
        match self.timeline.partition_point(|&x| x <= t) {
            0 => 1.0,
            n => self.survival[n - 1],
        }
    }

    /// Evaluate the survival function at every time in `times`.
    pub fn survival_at_times(&self, times: &[f64]) -> Vec<f64> {
        times.iter().map(|&t| self.survival_at(t)).collect()
    }
}
