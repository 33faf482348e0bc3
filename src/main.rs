// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, Flags};
use iced_folio::ui::layout::SectionId;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
IcedFolio - data science portfolio

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (e.g. en-US, it)
  --i18n-dir <DIR>      Directory with extra or overriding .ftl files
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Data directory (documents live in <DIR>/documents)
  --section <NAME>      Open scrolled to a section
                        (about, experience, skills, projects)
  -h, --help            Print this help

Set RUST_LOG (e.g. RUST_LOG=iced_folio=debug) to change log verbosity.
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        i18n_dir: opt_value(&mut args, "--i18n-dir"),
        config_dir: opt_value(&mut args, "--config-dir"),
        data_dir: opt_value(&mut args, "--data-dir"),
        section: opt_value(&mut args, "--section").and_then(|name: String| {
            name.parse::<SectionId>()
                .map_err(|err| tracing::warn!(section = %name, error = %err, "ignoring --section"))
                .ok()
        }),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%key, error = %err, "invalid command line value");
            None
        }
    }
}
