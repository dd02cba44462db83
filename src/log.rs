use log::LevelFilter;

/// Environment variable that switches logging to `Debug`.
pub const DEBUG_ENV_VAR: &str = "WORDCOVER_DEBUG";

/// `true` when [`DEBUG_ENV_VAR`] is set to anything.
#[must_use]
pub fn debug_enabled_from_env() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Log level used for a given debug switch.
fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize logging for wordcover.
///
/// # Behavior
/// - Uses `Debug` level if `debug_enabled` is true, otherwise `Info` level.
/// - `RUST_LOG`, when set, overrides these defaults.
/// - Output carries no timestamps, module paths or targets.
/// - Calling it again is harmless: later calls leave the first logger in place.
pub fn init_logger(debug_enabled: bool) {
    use std::env;
    let level = level_for(debug_enabled);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logger(false);
        init_logger(true);
    }
}
