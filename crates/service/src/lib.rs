//! Service layer for parcel persistence.
//! - `ParcelStore` abstracts the table behind an async trait.
//! - `ParcelService` is the façade callers depend on.
//! - Entity definitions live in the `models` crate.

pub mod errors;
pub mod parcel;
#[cfg(test)]
pub mod test_support;
