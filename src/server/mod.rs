//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the auction
//! platform: API endpoints, business logic, data access, and infrastructure
//! services. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authorization guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, broadcaster, mailer)
//! - **Startup** (`startup`) - Initialization of database, sessions, and OAuth
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Events** (`events/`) - Broadcast fan-out behind per-auction SSE streams
//! - **Scheduler** (`scheduler/`) - Cron job that settles ended items
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Middleware** resolves the session and authorization guards
//! 3. **Controller** validates access, converts DTOs to params, calls a service
//! 4. **Service** executes business logic, orchestrates data operations
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the result to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod events;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
