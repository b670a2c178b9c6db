//! Server-side API backend.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Maps repository results onto the application's errors
//! - **Data Layer** (`data/`) - Read batches assembling order and menu aggregates, plus plain lookups
//! - **Model Layer** (`model/`) - Views, fetch strategy, identities and aggregate outcomes
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Token extraction and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, batch settings, shutdown signal)
//! - **Startup** (`startup`) - Database pool and migrations
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** resolves the caller through `AuthGuard`, parses parameters, calls service
//! 3. **Service** calls the repository and maps missing aggregates to `NotFound`
//! 4. **Data** runs one read batch in a single transaction and assembles the aggregate
//! 5. **Controller** returns the DTO as JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
