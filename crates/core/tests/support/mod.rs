//! Shared test helpers for `freehold-core` integration tests.
//!
//! In-memory stand-ins for the page, the CRM endpoint, the clock and the two
//! browser export channels.

#![allow(dead_code)]

pub mod contact;
pub mod order;
