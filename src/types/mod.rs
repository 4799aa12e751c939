//! Signature data model.
//!
//! This module provides:
//! - `Parameter` and `FunctionSignature`, the per-function documentation records
//! - `SignatureStore`, the insertion-ordered table of one module or of a merged set

mod signature;
mod store;

pub use signature::{FunctionSignature, Parameter};
pub use store::SignatureStore;
