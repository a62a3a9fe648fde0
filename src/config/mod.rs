// Configuration module entry point
// Binds resolver options from a TOML file with environment overrides

mod types;

pub use types::{Config, LoggingConfig, ResolverConfig};

use crate::extensions::ExtensionList;
use crate::sink::WriterSink;

impl Config {
    /// Load configuration from "resolver.toml" in the working directory.
    /// A missing file is not an error; defaults apply.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("resolver")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("RESOLVER"))
            .build()?;

        settings.try_deserialize()
    }

    /// Normalized extension list in configured probe order.
    pub fn extension_list(&self) -> ExtensionList {
        ExtensionList::new(&self.resolver.extensions)
    }

    /// Sink described by the logging section: a file sink when a log file
    /// is configured, stdout otherwise.
    pub fn info_sink(&self) -> std::io::Result<WriterSink> {
        match self.logging.info_log_file.as_deref() {
            Some(path) => WriterSink::file(path),
            None => Ok(WriterSink::stdout()),
        }
    }
}
