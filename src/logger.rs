use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};

/// Initializes the logging system.
///
/// Builds a stderr console appender so command output on stdout stays
/// machine-readable. It should be called once at the beginning of the
/// application's execution.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(log::LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

/// Initializes the logging system from a log4rs configuration file.
pub fn init_file(path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    log4rs::init_file(path, Default::default())?;
    Ok(())
}
