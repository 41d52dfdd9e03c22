//! Domain layer: gas accounting, sign bytes, decorators, and the handler.

pub mod context;
pub mod crypto;
pub mod decorators;
pub mod errors;
pub mod handler;
pub mod params;
pub mod sign_bytes;

pub use context::{AnteContext, GasMeter};
pub use errors::AnteError;
pub use handler::{AnteHandler, AnteOutcome, AnteRejection};
pub use params::AnteParams;
