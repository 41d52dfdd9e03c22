//! Domain layer: wire frames, message registry, decoding.

pub mod decode;
pub mod entities;
pub mod errors;
pub mod messages;

pub use decode::{resolve_signers, TxDecoder};
pub use entities::*;
pub use errors::DecodeError;
pub use messages::{Message, MessageRegistry};
