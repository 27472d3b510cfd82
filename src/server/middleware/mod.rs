//! Session wrappers and authorization guards.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
