//! Core domain logic: the call catalog, filesystem scanning, and the
//! optional-dependency probe.

pub mod catalog;
pub mod probe;
pub mod scan;
