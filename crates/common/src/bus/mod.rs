//! Message-bus plumbing shared by the catalog server and its callers.
//!
//! - `packet` - request/reply envelopes exchanged over NATS
//! - `client` - request helpers with failure normalization
//! - `keys` - key inclusion/exclusion helpers for JSON objects

pub mod client;
pub mod keys;
pub mod packet;

pub use client::{BusClient, BusRequester, NatsRequester};
pub use keys::{omit_keys, pick_keys};
pub use packet::{ReplyPacket, RequestPacket, RpcErrorBody};
