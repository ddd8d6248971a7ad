use eframe::egui::{Color32, ScrollArea, Ui};
use egui_plot::{Line, Plot, PlotPoints};
use egui_extras::{Column, TableBuilder};

use crate::analysis::CurveView;
use crate::state::AppState;
use crate::survival::FittedKaplanMeier;

/// Rows shown in the data preview.
const PREVIEW_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Central panel: heading, preview, plot, probability listing
// ---------------------------------------------------------------------------

pub fn central_view(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a turnover CSV to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Predictive Modeling of Employee Retention Using Survival Analysis");
            ui.add_space(8.0);

            // ---- Data preview ----
            ui.strong("Data Preview");
            let n_preview = dataset.len().min(PREVIEW_ROWS);
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .columns(Column::auto().at_least(60.0), dataset.headers.len())
                .header(20.0, |mut header| {
                    for h in &dataset.headers {
                        header.col(|ui: &mut Ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, n_preview, |mut row| {
                        let r = row.index();
                        for cell in &dataset.rows[r] {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                });
            ui.add_space(12.0);

            // ---- Active survival curve ----
            if let Some(view) = &state.active_curve {
                ui.separator();
                ui.strong(&view.title);
                km_plot(ui, state, view);
                ui.add_space(12.0);
            }

            // ---- Probability listing ----
            if let Some(listing) = &state.probabilities {
                ui.separator();
                ui.strong(format!(
                    "Survival probabilities for {}:",
                    listing.profession
                ));
                for (i, prob) in listing.probabilities.iter().enumerate() {
                    ui.monospace(format!("Month {}: {prob}", i + 1));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Kaplan-Meier step plot
// ---------------------------------------------------------------------------

fn km_plot(ui: &mut Ui, state: &AppState, view: &CurveView) {
    let color = view
        .profession
        .as_deref()
        .map(|p| state.profession_colors.color_for(p))
        .unwrap_or(Color32::LIGHT_BLUE);

    let points: PlotPoints = step_points(&view.fitted).into();
    let line = Line::new(points)
        .name(&view.title)
        .color(color)
        .width(1.5);

    Plot::new("km_plot")
        .height(320.0)
        .x_axis_label("Time")
        .y_axis_label("Survival Probability")
        .include_y(0.0)
        .include_y(1.05)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(line);
        });
}

/// Expand the fitted curve's vertices into step-function geometry: the
/// survival estimate holds its value until the next distinct time.
fn step_points(fitted: &FittedKaplanMeier) -> Vec<[f64; 2]> {
    let mut points = Vec::new();
    let mut prev: Option<(f64, f64)> = None;
    for (t, s) in fitted.survival_function() {
        if let Some((_, ps)) = prev {
            points.push([t, ps]);
        }
        points.push([t, s]);
        prev = Some((t, s));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_points_hold_value_between_times() {
        let fitted = FittedKaplanMeier::fit(&[1.0, 2.0], Some(&[true, true])).unwrap();
        let pts = step_points(&fitted);
        // (0,1) → hold to (1,1) → drop to (1,0.5) → hold to (2,0.5) → (2,0)
        assert_eq!(
            pts,
            vec![
                [0.0, 1.0],
                [1.0, 1.0],
                [1.0, 0.5],
                [2.0, 0.5],
                [2.0, 0.0]
            ]
        );
    }
}
