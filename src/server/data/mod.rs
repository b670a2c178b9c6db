//! Database repository layer.
//!
//! Order and menu reads run as batches: one read-only transaction, a fixed sequence of flat
//! queries and an in-memory assembly of the nested result (see `batch`). The floor plan and
//! POS status reads run the same way. The remaining repositories are plain single-query
//! lookups plus the payment and open-switch write paths.

pub mod batch;
pub mod delivery_session;
pub mod floor_plan;
pub mod menu;
pub mod order;
pub mod payment;
pub mod pos;
pub mod user;

#[cfg(test)]
mod test;
