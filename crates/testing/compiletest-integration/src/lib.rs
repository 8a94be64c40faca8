//! Compile-fail and run-pass suites for the literal macros
//!
//! The suites live under `tests/` and are driven by `compiletest_rs`. This
//! crate depends on `intlit` so its rlib and the proc macro are built into
//! the dependency directory the suites link against.
