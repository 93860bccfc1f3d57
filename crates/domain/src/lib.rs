//! # wordclock-domain
//!
//! Pure domain model for the word clock control panel.
//!
//! ## Responsibilities
//! - Decompose `#RRGGBB` colour strings into RGB channels ([`color`])
//! - Define the settings payloads the device accepts ([`settings`])
//! - Name the device endpoints and where they are served ([`endpoint`])
//! - Define the one-shot control actions ([`control`])
//! - Define the uniform result of every request ([`outcome`])
//! - Define the error types shared across the workspace ([`error`])
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod color;
pub mod control;
pub mod endpoint;
pub mod outcome;
pub mod settings;
