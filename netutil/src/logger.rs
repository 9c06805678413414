use env_logger::{Builder, Env};

/// Intercept messages using the `log` crate and print them to STDERR. Respects `RUST_LOG`,
/// defaulting to `info`. Only binaries should call this.
pub fn setup() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
