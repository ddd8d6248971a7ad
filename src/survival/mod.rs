/// Survival estimation: the Kaplan-Meier product-limit estimator.
///
/// Kept deliberately small: fit over (durations, optional event flags),
/// expose the step survival function and point evaluation. No confidence
/// intervals and no regression models.

pub mod km;

pub use km::FittedKaplanMeier;
