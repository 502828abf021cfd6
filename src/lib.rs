// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive quiz runner.
//
// Module responsibilities:
// - `session`: Quiz domain types — questions, scored sessions, and the
//   percentage/feedback report math.
// - `catalog`: Discovers quiz definition files on disk, validates them,
//   and builds the category catalog.
// - `ui`: Implements the terminal menus and the question/answer loop,
//   delegating scoring decisions to `session`.
//
// Keeping this separation makes it possible to test the scoring and
// loading logic without driving a live console.
pub mod catalog;
pub mod session;
pub mod ui;
