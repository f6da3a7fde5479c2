// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_lightbox [OPTIONS] [PATH...]

Shows the given images, or the images inside the given directories, as a
gallery. Click a thumbnail to open it; drag it away or press Escape to close.

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --navigator           Present lightboxes through the route stack
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir");
        None
    });
    let navigator = args.contains("--navigator");

    let paths = args.finish().into_iter().map(PathBuf::from).collect();

    app::run(Flags {
        lang,
        config_dir,
        navigator,
        paths,
    })
}
