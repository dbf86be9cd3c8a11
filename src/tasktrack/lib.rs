//! # Tasktrack Architecture
//!
//! Tasktrack is a **UI-agnostic task-tracking library** with a thin CLI client
//! on top. The split drives the layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, print.rs, wired by main.rs)            │
//! │  - Parses arguments, renders tables and messages            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (filter strings → StatusFilter)        │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per verb, pure load → mutate → save logic     │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TaskStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<CmdResult>`, and never touches stdout/stderr or calls
//! `std::process::exit`. The one deliberate exception is the `clear-tasks`
//! confirmation prompt, which reads from a *caller-supplied* input source so
//! tests can feed canned answers.
//!
//! ## Testing Strategy
//!
//! - **Commands** (`commands/*.rs`): unit tests against `InMemoryStore`.
//!   This is where the lion's share of testing lives.
//! - **Storage** (`store/fs.rs`): round-trip and failure tests on temp dirs.
//! - **CLI**: end-to-end tests in `tests/` against the built binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Task`, `Status`, `TaskMap`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
