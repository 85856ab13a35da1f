//! Theme settings handed to the app at construction.

use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeSettings {
    pub dark_mode: bool,
    pub primary: egui::Color32,
    pub background: egui::Color32,
    pub paper: egui::Color32,
    pub hover: egui::Color32,
    pub corner_radius: u8,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            primary: egui::Color32::from_rgb(0x90, 0xca, 0xf9),
            background: egui::Color32::from_rgb(0x12, 0x12, 0x12),
            paper: egui::Color32::from_rgb(0x33, 0x33, 0x33),
            hover: egui::Color32::from_rgb(0x55, 0x55, 0x55),
            corner_radius: 4,
        }
    }
}

pub fn visuals_for_theme(theme: &ThemeSettings) -> egui::Visuals {
    let mut visuals = if theme.dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.paper;
    visuals.faint_bg_color = theme.paper;
    visuals.extreme_bg_color = theme.background;
    visuals.hyperlink_color = theme.primary;
    visuals.selection.bg_fill = theme.primary.gamma_multiply(0.6);
    visuals.selection.stroke = egui::Stroke::new(1.0, theme.primary);
    visuals.widgets.inactive.weak_bg_fill = theme.paper;
    visuals.widgets.inactive.bg_fill = theme.paper;
    visuals.widgets.hovered.weak_bg_fill = theme.hover;
    visuals.widgets.hovered.bg_fill = theme.hover;
    visuals.widgets.active.bg_fill = theme.primary;
    visuals.window_corner_radius = egui::CornerRadius::same(theme.corner_radius);
    visuals.menu_corner_radius = egui::CornerRadius::same(theme.corner_radius);
    visuals
}
