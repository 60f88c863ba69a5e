//! Config composition: defaults plus ordered sources.

pub mod service;

pub(crate) mod merge_policy {
    use config::builder::DefaultState;
    use config::{Config, ConfigBuilder, ConfigError};

    /// Builder seeded with the defaults every other source overrides.
    pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("logging.level", "warn")?
            .set_default("logging.format", "text")?
            .set_default("logging.output", "stderr")
    }
}
