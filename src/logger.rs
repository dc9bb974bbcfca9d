use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use once_cell::sync::OnceCell;
use std::path::Path;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initializes the logging system from the default file `log4rs.yaml` in the
/// working directory. Prefer `init_in` for programmatic control.
///
/// # Errors
/// Currently infallible; kept fallible for config-file validation growth.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let _ = log4rs::init_file("log4rs.yaml", log4rs::config::Deserializers::default());
    Ok(())
}

/// Initializes logging to `{base}/{name}_logs/{name}.log`. Repeated calls
/// are no-ops.
///
/// # Errors
/// Returns an error if the directory cannot be created or the logger fails
/// to initialize.
pub fn init_in(base_dir: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }
    let dir = base_dir.join(format!("{name}_logs"));
    std::fs::create_dir_all(&dir)?;
    let encoder = Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}"));
    let logfile = dir.join(format!("{name}.log"));
    let file_appender = FileAppender::builder().encoder(encoder).build(logfile)?;
    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    let _ = INITIALIZED.set(());
    Ok(())
}
