// SPDX-License-Identifier: MPL-2.0
use iced_uikit::app::{self, Flags};
use iced_uikit::ui::theming::ThemeMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_uikit gallery

USAGE:
  iced_uikit [OPTIONS]

OPTIONS:
  -h, --help              Print this help
  --config <PATH>         Load settings from a specific TOML file
  --theme <MODE>          Override the theme: light, dark or system

ENVIRONMENT:
  RUST_LOG                Log filter (default: iced_uikit=info)
  ICED_UIKIT_CONFIG_DIR   Directory holding settings.toml
";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_uikit=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    init_tracing();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring --config");
            None
        }
    };

    let theme: Option<ThemeMode> = match args.opt_value_from_str("--theme") {
        Ok(theme) => theme,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring --theme");
            None
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(Flags { config_path, theme })
}
