//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local region storage behind a reader/writer lock.
//!
//! Adapters translate between domain types and their storage; they contain
//! no business rules beyond what the port contract requires.

pub mod memory;
