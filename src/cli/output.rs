//! Output formatting and logging setup for the CLI

use env_logger::Env;

/// Initialise `env_logger`: `info` by default, `debug` when verbose.
///
/// `RUST_LOG` overrides either default.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let initialised = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
    // A second call keeps the logger already installed.
    if let Err(err) = initialised {
        log::debug!("logger already initialised: {err}");
    }
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:24} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_init_keeps_first_logger() {
        init_logging(false);
        init_logging(true);
        log::info!("logging still works after a second init");
    }
}
