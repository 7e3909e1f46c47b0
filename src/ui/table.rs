use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{years, Record, YEAR_COUNT};
use crate::data::query::Trend;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Country rows: attributes, yearly counts, total
// ---------------------------------------------------------------------------

/// Render records as a scrollable grid (country, continent, region, status,
/// one column per year, total).
pub fn records_table(ui: &mut Ui, id: &str, records: &[&Record], max_height: f32) {
    ui.push_id(id, |ui: &mut Ui| {
        egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(max_height)
                .column(Column::auto().at_least(160.0))
                .columns(Column::auto().at_least(90.0), 3)
                .columns(Column::auto().at_least(48.0), YEAR_COUNT)
                .column(Column::auto().at_least(70.0))
                .header(HEADER_HEIGHT, |mut header| {
                    for name in ["Country", "Continent", "Region", "Status"] {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                    for year in years() {
                        header.col(|ui: &mut Ui| {
                            ui.strong(year.to_string());
                        });
                    }
                    header.col(|ui: &mut Ui| {
                        ui.strong("Total");
                    });
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, records.len(), |mut row| {
                        let rec = records[row.index()];
                        for text in [&rec.country, &rec.continent, &rec.region, &rec.status] {
                            row.col(|ui: &mut Ui| {
                                ui.label(text);
                            });
                        }
                        for (_, count) in rec.year_counts.iter() {
                            row.col(|ui: &mut Ui| {
                                ui.monospace(count.to_string());
                            });
                        }
                        row.col(|ui: &mut Ui| {
                            ui.monospace(rec.total().to_string());
                        });
                    });
                });
        });
    });
}

// ---------------------------------------------------------------------------
// Year / count table for one country
// ---------------------------------------------------------------------------

pub fn trend_table(ui: &mut Ui, trend: &Trend, max_height: f32) {
    ui.push_id("trend_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(max_height)
            .column(Column::auto().at_least(60.0))
            .column(Column::remainder())
            .header(HEADER_HEIGHT, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("Year");
                });
                header.col(|ui: &mut Ui| {
                    ui.strong(&trend.country);
                });
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, trend.len(), |mut row| {
                    let (year, count) = trend.points()[row.index()];
                    row.col(|ui: &mut Ui| {
                        ui.label(year.to_string());
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(count.to_string());
                    });
                });
            });
    });
}
