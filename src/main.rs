// SPDX-License-Identifier: MPL-2.0
use photopro::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
PhotoPro - photo editor with live filters, ratio cropping and AI-assisted edits

USAGE:
  photopro [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>        UI language (en-US, vi)
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help

ENVIRONMENT:
  PHOTOPRO_API_KEY       API key for AI edits (falls back to API_KEY, GEMINI_API_KEY)
  PHOTOPRO_CONFIG_DIR    Config directory when --config-dir is not given
  RUST_LOG               Log filter (default: photopro=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("photopro=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = read_option(&mut args, "--lang");
    let config_dir = read_option(&mut args, "--config-dir");
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags {
        lang,
        file_path,
        config_dir,
    })
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "ignoring invalid command-line option");
            None
        }
    }
}
