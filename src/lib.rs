// Library target exists solely for the integration tests.
// The binary entry point is main.rs; this file re-declares the module tree so
// that test harnesses can drive a lesson via `keysprout::session::*` without
// a terminal. Most code is only exercised through the binary, so suppress
// dead_code warnings.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod keyboard;
pub mod session;
pub mod settings;

// Private: the rest of the binary's tree, compiled here too so the whole
// crate stays warning-checked under `cargo test`
mod app;
mod event;
mod ui;
