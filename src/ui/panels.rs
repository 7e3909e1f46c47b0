use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::{FIRST_YEAR, LAST_YEAR};
use crate::state::{AppState, ChartKind};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Top bar – title and headline metrics
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Country wise immigration data analysis");
        ui.separator();
        ui.label(format!("Immigration to Canada, {FIRST_YEAR}–{LAST_YEAR}"));
    });
    ui.separator();

    let s = &state.summary;
    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Total countries", &s.count.to_string(), None);
        ui.add_space(24.0);
        let delta = s.rounded_mean().map(|m| format!("mean {m} per country"));
        metric(ui, "Total immigration", &s.total.to_string(), delta.as_deref());

        if let Some(msg) = &state.status_message {
            ui.add_space(24.0);
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str, delta: Option<&str>) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).size(24.0).strong());
        if let Some(delta) = delta {
            ui.label(RichText::new(delta).color(Color32::from_rgb(0x21, 0xc3, 0x54)));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Country selector for the trend, multi-select and chart kind for the comparison.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Country trend");
    ui.separator();

    let table = state.table;
    let current = state.selected_country.clone().unwrap_or_default();
    let mut picked: Option<&str> = None;
    egui::ComboBox::from_id_salt("trend_country")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for country in table.countries() {
                if ui.selectable_label(current == country, country).clicked() {
                    picked = Some(country);
                }
            }
        });
    if let Some(country) = picked {
        log::debug!("Trend country: {country}");
        state.select_country(country);
    }

    ui.add_space(12.0);
    ui.heading("Comparison");
    ui.separator();

    ui.strong("Graph");
    ui.horizontal(|ui: &mut Ui| {
        for kind in ChartKind::ALL {
            ui.radio_value(&mut state.chart_kind, kind, kind.to_string());
        }
    });
    ui.add_space(6.0);

    ui.horizontal(|ui: &mut Ui| {
        ui.strong(format!("Countries ({})", state.compared.len()));
        if ui.small_button("Clear").clicked() {
            state.clear_compared();
        }
    });
    ui.add(egui::TextEdit::singleline(&mut state.compare_search).hint_text("Search…"));

    // Chosen countries first, in selection order, so they can be removed.
    let mut toggled: Option<String> = None;
    for country in &state.compared {
        let text = RichText::new(format!("✕ {country}")).color(state.color_map.color_for(country));
        if ui.small_button(text).clicked() {
            toggled = Some(country.clone());
        }
    }
    ui.separator();

    let matches = state.search_matches();
    ScrollArea::vertical()
        .id_salt("compare_list")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for country in matches {
                let mut checked = state.is_compared(country);
                if ui.checkbox(&mut checked, country).changed() {
                    toggled = Some(country.to_string());
                }
            }
        });

    if let Some(country) = toggled {
        state.toggle_compared(&country);
    }
}

// ---------------------------------------------------------------------------
// Central panel – data, trend and comparison sections
// ---------------------------------------------------------------------------

pub fn central_panel(ui: &mut Ui, state: &AppState) {
    ScrollArea::vertical()
        .id_salt("central")
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Our country wise data");
            let all: Vec<_> = state.table.records().iter().collect();
            table::records_table(ui, "all_countries", &all, 260.0);
            ui.add_space(16.0);

            ui.heading("Country immigration trend");
            match &state.trend {
                Some(trend) => {
                    ui.label(
                        RichText::new(format!(
                            "You selected {} ({} immigrants in total)",
                            trend.country,
                            trend.total()
                        ))
                            .color(Color32::from_rgb(0x21, 0xc3, 0x54)),
                    );
                    ui.columns(2, |cols| {
                        plot::trend_plot(&mut cols[0], trend);
                        table::trend_table(&mut cols[1], trend, 300.0);
                    });
                }
                None => {
                    ui.label("No country selected.");
                }
            }
            ui.add_space(16.0);

            let slice = state.slice();
            ui.heading(format!("Country immigration comparison ({})", slice.len()));
            if !slice.is_empty() {
                table::records_table(ui, "compared_countries", slice.records(), 160.0);
            }
            plot::comparison_plot(ui, &slice, state.chart_kind, &state.color_map);
            ui.add_space(16.0);

            conclusions(ui);
        });
}

fn conclusions(ui: &mut Ui) {
    ui.separator();
    ui.heading("Conclusions");
    ui.label(
        "Total immigration: the headline figures give the scale of immigration \
         over the whole period.",
    );
    ui.label(
        "Country trends: a single country's yearly counts show how immigration \
         from it evolved over time.",
    );
    ui.label(
        "Country comparisons: several countries side by side, as line, bar or \
         stacked area charts, reveal similar or diverging patterns.",
    );
}
