//! Platforms command handler.

use sdkresolve_core::PlatformId;
use sdkresolve_core::strategy::strategy_for;

/// One row per supported platform: tag, family, directory, desktop class.
pub fn rows() -> Vec<String> {
    PlatformId::ALL
        .into_iter()
        .map(|platform| {
            format!(
                "{:<12} {:<13} Platforms/{:<8} pc={}",
                platform.as_str(),
                platform.family().to_string(),
                platform.dir_name(),
                strategy_for(platform).is_desktop_class()
            )
        })
        .collect()
}

/// Execute the platforms command.
pub fn execute() {
    for row in rows() {
        println!("{}", row.trim_end());
    }
}
