use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – curve controls
// ---------------------------------------------------------------------------

/// Render the left control panel: column selectors, profession selectors,
/// and the three action buttons.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone what the widgets read so we can mutate state inside closures.
    let headers = dataset.headers.clone();
    let professions = state.professions.clone();

    // ---- Overall curve ----
    ui.strong("Kaplan-Meier Survival Curve");
    ui.label("Select the columns for duration and event:");
    column_selector(ui, "duration_col", "Duration", &headers, &mut state.duration_col);
    column_selector(ui, "event_col", "Event", &headers, &mut state.event_col);
    if ui.button("Generate Kaplan-Meier Survival Curve").clicked() {
        state.generate_overall_curve();
    }
    ui.separator();

    // ---- Profession-wise curve ----
    ui.strong("Profession-wise Survival Curve");
    profession_selector(
        ui,
        "km_profession",
        &professions,
        state,
        SelectorKind::Curve,
    );
    if ui.button("Generate Profession-wise Curve").clicked() {
        state.generate_profession_curve();
    }
    ui.separator();

    // ---- Profession-wise probabilities ----
    ui.strong("Profession-wise Survival Probabilities");
    profession_selector(
        ui,
        "prob_profession",
        &professions,
        state,
        SelectorKind::Probabilities,
    );
    if ui.button("Show Survival Probabilities").clicked() {
        state.show_profession_probabilities();
    }
}

/// A dropdown over all dataset columns.
fn column_selector(
    ui: &mut Ui,
    id: &str,
    label: &str,
    headers: &[String],
    selection: &mut Option<String>,
) {
    let current = selection.clone().unwrap_or_default();
    ui.horizontal(|ui: &mut Ui| {
        ui.label(label);
        egui::ComboBox::from_id_salt(id)
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for col in headers {
                    if ui.selectable_label(current == *col, col).clicked() {
                        *selection = Some(col.clone());
                    }
                }
            });
    });
}

enum SelectorKind {
    Curve,
    Probabilities,
}

/// A dropdown over professions, each entry tinted with its curve colour.
fn profession_selector(
    ui: &mut Ui,
    id: &str,
    professions: &[String],
    state: &mut AppState,
    kind: SelectorKind,
) {
    let current = match kind {
        SelectorKind::Curve => state.curve_profession.clone(),
        SelectorKind::Probabilities => state.prob_profession.clone(),
    }
    .unwrap_or_default();

    egui::ComboBox::from_id_salt(id)
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for prof in professions {
                let color = state.profession_colors.color_for(prof);
                let text = RichText::new(prof).color(color);
                if ui.selectable_label(current == *prof, text).clicked() {
                    match kind {
                        SelectorKind::Curve => state.curve_profession = Some(prof.clone()),
                        SelectorKind::Probabilities => {
                            state.prob_profession = Some(prof.clone())
                        }
                    }
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar with the shape readout and status line.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows × {} columns",
                ds.len(),
                ds.headers.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open turnover data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
