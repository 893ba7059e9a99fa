//! Server-rendered request table for pushkind services.
//!
//! The `data` feature exposes only the domain types; `server` adds the Tera
//! renderer, the Actix-web route the table controls post to and the
//! `preview_table` binary.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod preview;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod table;
