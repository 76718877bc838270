//! # Taskz Architecture
//!
//! Taskz is a **UI-agnostic task-tracking library**. The terminal client in
//! `main.rs` is one front end; anything that can pass a line of text in and show
//! text back can drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Reads lines, prints responses, owns stdout/exit codes    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │  submit(line) -> Response
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the session: task list, store, pending confirmation │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs)                                         │
//! │  - Resolves the command word, validates its arguments       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Applies one validated command to the task list           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Row codec, DataStore trait, FileStore / InMemoryStore    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - Invalid input is rejected before it reaches the task list.
//! - Tasks are immutable values; a change produces a new task.
//! - Multi-index commands check every index before changing anything.
//! - Loading a data file is all-or-nothing.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade and its [`api::Response`] type
//! - [`parser`]: Command resolution and argument/row validation
//! - [`commands`]: One module per command
//! - [`model`]: `Task` and `TaskKind`
//! - [`task_list`]: The ordered task collection
//! - [`index`]: 1-based user-facing indexes
//! - [`store`]: Persistence codec and backends
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod store;
pub mod task_list;
