//! Decoder for the `GVAS` save containers written by Out of Ore.
//!
//! The container is a property bag without a published schema. Rather than
//! walking the whole property graph, the decoder scans for a handful of known
//! markers and reads the fixed-layout records that follow them. Opening is
//! all-or-nothing (the magic must match); every field below that decodes
//! independently and falls back to an empty default on failure.

pub mod core_api;
pub mod error;
pub mod gvas;
pub mod layout;
pub mod property;
pub mod reader;
pub mod scanner;

pub use core_api::decode;
