//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the account endpoints on top of `gloo-net` `fetch`.

pub mod api;
