//! # accounts
//!
//! Framework-free account layer for the CulinaryTech client: the persisted
//! user session, the registration form flow, and the profile view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos `client` crate and the `culinary` CLI are both consumers of this
//! crate. They inject their own storage, transport, timer, and navigation
//! implementations; everything here is testable without a browser.

#[cfg(feature = "http")]
pub mod api;
pub mod config;
pub mod profile;
pub mod register;
pub mod session;
pub mod storage;
