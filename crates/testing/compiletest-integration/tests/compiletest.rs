//! Literal macro suites using compiletest_rs (same framework as rustc).
//!
//! - Compile-fail tests: out-of-range and malformed literals must stop the build
//!   with a diagnostic naming the suffix type
//! - Run-pass tests: valid literals in every base and width compile to the
//!   expected typed values

use std::path::PathBuf;

fn config_for(mode: compiletest_rs::common::Mode, dir: &str) -> compiletest_rs::Config {
    let mut config = compiletest_rs::Config::default();

    config.mode = mode;
    config.src_base = PathBuf::from(dir);
    config.build_base = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("target/compiletest");
    config.target_rustcflags = Some("--edition=2021".to_owned());
    config.link_deps();
    config.clean_rmeta();

    config
}

/// Run compile-fail tests which verify that invalid literals are rejected.
///
/// Each file marks the rejected literal with a `//~ ERROR` annotation
/// carrying the expected message prefix.
#[test]
fn run_compile_fail_tests() {
    let config = config_for(compiletest_rs::common::Mode::CompileFail, "tests/compile-fail");
    compiletest_rs::run_tests(&config);
}

/// Run run-pass tests which verify that valid literals compile to the right
/// typed values.
#[test]
fn run_run_pass_tests() {
    let config = config_for(compiletest_rs::common::Mode::RunPass, "tests/run-pass");
    compiletest_rs::run_tests(&config);
}
