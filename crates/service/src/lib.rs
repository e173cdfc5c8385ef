//! Service layer for the citizen report resource.
//! - Each operation takes the database handle explicitly.
//! - Writes run inside a transaction committed before returning.
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod pagination;
pub mod report_service;
#[cfg(test)]
pub mod test_support;
