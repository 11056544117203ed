//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page receives the session context as a prop and delegates form and
//! session rules to the `accounts` crate.

pub mod profile;
pub mod register;
