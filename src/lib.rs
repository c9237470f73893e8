// Library root
// -----------
// This crate exposes the smoke-test logic as a library. The binary
// (`main.rs`) only sets up logging, loads the configuration and maps the
// outcome of `runner::run` to a process exit code.
//
// Module responsibilities:
// - `config`: Target URL, credentials and category payload, with
//   environment overrides.
// - `api`: Encapsulates HTTP interactions with the category API (login,
//   create, list).
// - `error`: Failure taxonomy shared by the modules above.
// - `output`: JSON rendering for the console report.
// - `runner`: The login -> create -> list sequence.
pub mod api;
pub mod config;
pub mod error;
pub mod output;
pub mod runner;
