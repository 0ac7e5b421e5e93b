//! Console record keeping for a veterinary clinic
//!
//! Tracks owners, veterinarians, animals, and scheduled appointments in
//! memory, linked by numeric identifiers. The `domain` layer holds the
//! generic store and validation, `application` the per-entity services, and
//! `cli` the interactive console frontend.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;
