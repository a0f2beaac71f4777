//! Networking modules for the REST backend and the live channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `error` classifies their failures, `types`
//! defines the wire schema and `live` owns the optional websocket handle.

pub mod api;
pub mod error;
pub mod live;
pub mod types;
