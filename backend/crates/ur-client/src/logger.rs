use std::time::SystemTime;

use fern::Dispatch;
use log::LevelFilter;

/// Plain stderr logger so stdout stays reserved for the rendered list
pub fn initialize(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .level(level)
        .level_for("reqwest", LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = record.level(),
            ))
        })
        .chain(std::io::stderr())
        .apply()
}
