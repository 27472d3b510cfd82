//! Database repository layer for all domain aggregates.
//!
//! Repositories handle database operations (CRUD) for each domain in the
//! application. They use SeaORM entity models internally and return entity or
//! parameter models to keep the data layer separate from business logic.
//! Repositories are generic over `ConnectionTrait` so services can run them
//! against the pool or inside a transaction.

pub mod auction;
pub mod bid;
pub mod invite;
pub mod item;
pub mod member;
pub mod user;

#[cfg(test)]
mod test;
