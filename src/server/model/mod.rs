//! Server-side domain models and parameter types.
//!
//! This module contains the types the service and data layers exchange: the caller's
//! resolved identity, the order views and fetch strategy driving a read batch, and the
//! outcomes returned before they are converted to DTOs at the controller boundary.

pub mod identity;
pub mod menu;
pub mod order;
pub mod pos;
