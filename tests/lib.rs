mod props;
mod suite;

/// Route `log` output from the engine through the test harness. Run with
/// `--features logging` and `RUST_LOG=trace` to see it.
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
