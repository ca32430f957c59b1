// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        max_visible: args.opt_value_from_str("--max-visible")?,
        position: args.opt_value_from_str("--position")?,
        theme_mode: args.opt_value_from_str("--theme")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("toast_playground: {err}");
            eprintln!(
                "usage: toast_playground [--max-visible N] [--position top|bottom] \
                 [--theme light|dark|system] [--config-dir DIR]"
            );
            std::process::exit(2);
        }
    };

    app::run(flags)
}
