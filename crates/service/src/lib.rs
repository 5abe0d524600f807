//! Service layer providing business-oriented customer operations on top of models.
//! - Separates business rules from data access behind `CustomerRepository`.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod customer;
#[cfg(test)]
pub mod test_support;
