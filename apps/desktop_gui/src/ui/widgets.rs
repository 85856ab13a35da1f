//! Sort selectors, unknown-total pagination bar and the tag table.

use std::num::NonZeroU32;

use eframe::egui;
use shared::domain::{QueryParameters, SortField, SortOrder, TagRecord, PAGE_SIZE_OPTIONS};

use crate::backend_bridge::commands::BackendCommand;

/// "11–20 of more than 20": the remote service never reports a total.
pub fn displayed_rows_label(page_index: u32, page_size: NonZeroU32) -> String {
    let size = u64::from(page_size.get());
    let from = u64::from(page_index) * size + 1;
    let to = (u64::from(page_index) + 1) * size;
    format!("{from}–{to} of more than {to}")
}

pub fn page_size_choices(current: NonZeroU32) -> Vec<NonZeroU32> {
    let mut choices: Vec<NonZeroU32> = PAGE_SIZE_OPTIONS
        .iter()
        .filter_map(|n| NonZeroU32::new(*n))
        .collect();
    if !choices.contains(&current) {
        choices.push(current);
        choices.sort();
    }
    choices
}

pub fn sort_controls(ui: &mut egui::Ui, params: &QueryParameters) -> Option<BackendCommand> {
    let mut sort_field = params.sort_field;
    let mut sort_order = params.sort_order;

    ui.horizontal(|ui| {
        ui.label("Sort Field");
        egui::ComboBox::from_id_salt("sort_field")
            .selected_text(sort_field.label())
            .show_ui(ui, |ui| {
                for field in SortField::ALL {
                    ui.selectable_value(&mut sort_field, *field, field.label());
                }
            });

        ui.add_space(16.0);
        ui.label("Sort Order");
        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(sort_order.label())
            .show_ui(ui, |ui| {
                for order in SortOrder::ALL {
                    ui.selectable_value(&mut sort_order, *order, order.label());
                }
            });
    });

    if sort_field != params.sort_field {
        Some(BackendCommand::SetSortField { sort_field })
    } else if sort_order != params.sort_order {
        Some(BackendCommand::SetSortOrder { sort_order })
    } else {
        None
    }
}

pub fn pagination_bar(ui: &mut egui::Ui, params: &QueryParameters) -> Option<BackendCommand> {
    let mut page_size = params.page_size;
    let mut command = None;

    ui.horizontal(|ui| {
        ui.label("Rows per page:");
        egui::ComboBox::from_id_salt("rows_per_page")
            .selected_text(page_size.to_string())
            .width(64.0)
            .show_ui(ui, |ui| {
                for choice in page_size_choices(params.page_size) {
                    ui.selectable_value(&mut page_size, choice, choice.to_string());
                }
            });

        ui.add_space(16.0);
        ui.label(displayed_rows_label(params.page_index, params.page_size));
        ui.add_space(16.0);

        if ui
            .add_enabled(params.page_index > 0, egui::Button::new("‹"))
            .on_hover_text("Previous page")
            .clicked()
        {
            command = Some(BackendCommand::SetPageIndex {
                page_index: params.page_index - 1,
            });
        }
        if ui
            .add_enabled(params.page_index < u32::MAX, egui::Button::new("›"))
            .on_hover_text("Next page")
            .clicked()
        {
            command = Some(BackendCommand::SetPageIndex {
                page_index: params.page_index + 1,
            });
        }
    });

    if page_size != params.page_size {
        return Some(BackendCommand::SetPageSize { page_size });
    }
    command
}

pub fn tag_table(ui: &mut egui::Ui, items: &[TagRecord]) {
    if items.is_empty() {
        ui.weak("No tags on this page.");
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("tags_table")
            .num_columns(2)
            .striped(true)
            .min_col_width(120.0)
            .spacing([48.0, 6.0])
            .show(ui, |ui| {
                ui.strong("Tag");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong("Count");
                });
                ui.end_row();

                for tag in items {
                    ui.label(&tag.name);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(tag.count.to_string());
                    });
                    ui.end_row();
                }
            });
    });
}
