//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events
//! after successful domain mutations. Hosts implement the sink to turn
//! events into refresh cycles (fetch transactions, recompute the ledger).

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
