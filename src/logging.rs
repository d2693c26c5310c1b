use std::io::Write;

use env_logger::WriteStyle;
use log::LevelFilter;

/// Installs the crate's logger. Demos and tools call this once at startup;
/// a second call reports the usual `SetLoggerError` and can be ignored.
pub fn try_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "[LSWP | {}] {}", record.level(), record.args()))
        .write_style(WriteStyle::Always)
        .filter(None, LevelFilter::Info)
        .try_init()
}
