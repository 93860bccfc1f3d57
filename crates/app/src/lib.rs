//! # wordclock-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Transport` — deliver a request to the device and read its answer
//!   - `Notifier` — tell the user how a request went
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `PanelService` — colour, timezone, brightness, Wi-Fi and control submits
//! - Orchestrate domain objects without knowing *how* requests travel or
//!   *where* the user reads the result
//!
//! ## Dependency rule
//! Depends on `wordclock-domain` only (plus `tokio` for spawning).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
