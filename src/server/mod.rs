//! Server-side API backend and business logic.
//!
//! This module contains the backend of the payout notifier: HTTP endpoints, the
//! notification pipeline, history persistence and the Discord bot connection. The
//! backend uses Axum as the web framework, SeaORM for database operations, and
//! Serenity for Discord integration.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control, DTO conversion
//! - **Service Layer** (`service/`) - Credential checks, formatting, publishing, history
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, publisher, admin secret)
//! - **Startup** (`startup`) - Initialization of database and sessions
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Bot** (`bot/`) - Discord gateway connection and readiness tracking
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** guard checks the session's authenticated flag
//! 3. **Controller** validates input, converts DTOs to params, calls service
//! 4. **Service** formats and publishes the notification, then records it
//! 5. **Controller** converts the outcome to a DTO and returns the HTTP response
//!
//! # Feature Gates
//!
//! This module is only available with the `server` feature flag enabled.

pub mod bot;
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
