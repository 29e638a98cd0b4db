// SPDX-License-Identifier: MPL-2.0
use iced_meme::app::{self, Flags};
use iced_meme::diagnostics;
use log::LevelFilter;

const HELP: &str = "\
IcedMeme - caption a picture and share it

USAGE:
  iced_meme [OPTIONS] [IMAGE]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --data-dir <DIR>       Directory for application data
  --log-level <LEVEL>    off, error, warn, info, debug or trace (default: info)
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("Ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        eprintln!("Ignoring --config-dir: {err}");
        None
    });
    let data_dir: Option<String> = args.opt_value_from_str("--data-dir").unwrap_or_else(|err| {
        eprintln!("Ignoring --data-dir: {err}");
        None
    });
    let level: LevelFilter = args
        .opt_value_from_str("--log-level")
        .unwrap_or_else(|err| {
            eprintln!("Ignoring --log-level: {err}");
            None
        })
        .unwrap_or(LevelFilter::Info);

    if let Err(err) = diagnostics::init(level) {
        eprintln!("Logger already installed: {err}");
    }

    let flags = Flags {
        lang,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
        data_dir,
        config_dir,
    };

    app::run(flags)
}
