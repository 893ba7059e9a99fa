//! Configuration models shared by the library and the preview binary.

pub mod config;
