//! # Therabook Architecture
//!
//! Therabook is a **UI-agnostic scheduling library** for therapy practices. The
//! calendar CLI that ships with it is one possible client, not the application
//! itself.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, prompts for            │
//! │    confirmation, handles terminal I/O                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - The single write surface for the event collection        │
//! │  - Dispatches `EventAction` variants exhaustively           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation                             │
//! │  - Operates on Rust types, returns `Result<CmdResult>`      │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract EventStore trait                                │
//! │  - InMemoryStore seeded from static mock data               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Operations that need user confirmation take a continuation
//! (`FnOnce(&ConfirmRequest) -> bool`); the UI decides how to ask.
//!
//! ## Failure Semantics
//!
//! Soft failures (past-dated scheduling, nothing to export, declined
//! confirmations) are leveled [`commands::CmdMessage`]s inside an
//! `Ok(CmdResult)` with the collection left untouched. `Err` is reserved for
//! real I/O and serialization failures. Mutations addressed to an id that is
//! no longer in the collection are silent no-ops.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: Core data types (`AppointmentEvent`, status lifecycle)
//! - [`guard`]: Temporal validation of proposed start dates
//! - [`filter`]: Predicate composition over the event collection
//! - [`lookup`]: Static token resolution tables (clients, session types)
//! - [`seed`]: The mock calendar loaded at startup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod filter;
pub mod guard;
pub mod lookup;
pub mod model;
pub mod seed;
pub mod store;
