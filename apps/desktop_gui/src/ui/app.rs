use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::FetchState;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::UiEvent, orchestration::dispatch_backend_command, reducer::ListViewModel,
};
use crate::ui::{
    theme::{visuals_for_theme, ThemeSettings},
    widgets,
};

pub const APP_TITLE: &str = "StackOverflow Tags Explorer";

pub struct TagsExplorerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: ListViewModel,
    theme: ThemeSettings,
    applied_theme: Option<ThemeSettings>,
}

impl TagsExplorerApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        theme: ThemeSettings,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            view: ListViewModel::default(),
            theme,
            applied_theme: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.view.apply(event);
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.applied_theme == Some(self.theme) {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = visuals_for_theme(&self.theme);
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(10.0, 6.0);
        ctx.set_style(style);
        self.applied_theme = Some(self.theme);
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.view);
    }

    fn paper_frame(&self) -> egui::Frame {
        egui::Frame::new()
            .fill(self.theme.paper)
            .corner_radius(egui::CornerRadius::same(self.theme.corner_radius))
            .inner_margin(egui::Margin::symmetric(12, 10))
    }

    fn show_list(&mut self, ui: &mut egui::Ui) {
        if let Some(status) = self.view.status.clone() {
            ui.colored_label(ui.visuals().error_fg_color, status);
            return;
        }
        if let Some(notice) = self.view.notice.clone() {
            ui.colored_label(ui.visuals().warn_fg_color, notice);
            ui.add_space(4.0);
        }

        let params = self.view.snapshot.parameters;
        match &self.view.snapshot.state {
            FetchState::Idle | FetchState::Loading => {
                ui.add(egui::Spinner::new().size(32.0));
            }
            FetchState::Failure(message) => {
                let message = message.clone();
                ui.colored_label(ui.visuals().error_fg_color, message);
                if ui.button("Retry").clicked() {
                    self.dispatch(BackendCommand::Retry);
                }
            }
            FetchState::Success(items) => {
                let items = items.clone();
                let mut command = None;

                self.paper_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    command = widgets::sort_controls(ui, &params);
                });
                ui.add_space(8.0);
                self.paper_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if let Some(cmd) = widgets::pagination_bar(ui, &params) {
                        command = Some(cmd);
                    }
                });
                ui.add_space(8.0);
                self.paper_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    widgets::tag_table(ui, &items);
                });

                if let Some(cmd) = command {
                    self.dispatch(cmd);
                }
            }
        }
    }
}

impl eframe::App for TagsExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.apply_theme_if_needed(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(900.0);
                ui.heading(APP_TITLE);
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                    self.show_list(ui);
                });
            });
        });

        if self.view.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
