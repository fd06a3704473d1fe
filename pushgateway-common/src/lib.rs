//! Push Gateway Common Types
//!
//! Wire-level vocabulary shared by push gateway clients: which transport
//! scheme is allowed, which HTTP verb an operation maps to, and how a job
//! name plus grouping key become a request path.

pub mod grouping;
pub mod method;
pub mod transport;

pub use grouping::{job_path, GroupingKey};
pub use method::PushMethod;
pub use transport::{ParseTransportError, TransportScheme};
