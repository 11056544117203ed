//! Reactive client state shared between pages.

pub mod session;
