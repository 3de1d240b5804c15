/// Initializes `env_logger` with `info` as default level, `RUST_LOG` takes precedence.
/// Calling it more than once is a no-op.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .try_init();
}
