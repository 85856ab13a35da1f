use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use clap::Parser;
use client_core::load_settings;
use controller::events::UiEvent;
use crossbeam_channel::{bounded, unbounded};
use eframe::egui;
use tracing_subscriber::EnvFilter;
use ui::{app::APP_TITLE, TagsExplorerApp, ThemeSettings};

#[derive(Parser, Debug)]
struct Args {
    /// TOML settings file; defaults to ./tags_explorer.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Use the light palette instead of the default dark one.
    #[arg(long)]
    light: bool,
}

impl Args {
    fn theme(&self) -> ThemeSettings {
        if self.light {
            ThemeSettings {
                dark_mode: false,
                background: egui::Color32::from_rgb(0xfa, 0xfa, 0xfa),
                paper: egui::Color32::WHITE,
                hover: egui::Color32::from_rgb(0xee, 0xee, 0xee),
                primary: egui::Color32::from_rgb(0x19, 0x76, 0xd2),
                ..ThemeSettings::default()
            }
        } else {
            ThemeSettings::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();
    let settings = load_settings(args.config.as_deref());

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = unbounded::<UiEvent>();
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx);

    let theme = args.theme();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(TagsExplorerApp::new(cmd_tx, ui_rx, theme)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_by_default() {
        let args = Args::parse_from(["tags_explorer"]);
        assert!(args.theme().dark_mode);
        assert!(args.config.is_none());
    }

    #[test]
    fn light_flag_switches_palette() {
        let args = Args::parse_from(["tags_explorer", "--light", "--config", "custom.toml"]);
        let theme = args.theme();
        assert!(!theme.dark_mode);
        assert_eq!(theme.paper, egui::Color32::WHITE);
        assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn backend_commands_map_onto_list_commands() {
        use client_core::ListCommand;
        use std::num::NonZeroU32;

        let size = NonZeroU32::new(25).expect("size");
        assert_eq!(
            BackendCommand::SetPageSize { page_size: size }.list_command(),
            ListCommand::SetPageSize(size)
        );
        assert_eq!(BackendCommand::Retry.name(), "retry");
    }
}
