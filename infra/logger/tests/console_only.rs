use safebuy_logger::{LevelFilter, Logging};

#[test]
fn init_console_only_has_no_guard() {
    let logging = Logging::builder("integration-console-only")
        .console(true)
        .level(LevelFilter::INFO)
        .init()
        .expect("logging should initialize");

    assert!(logging.guard().is_none(), "console-only pipeline should not create a file guard");
}
