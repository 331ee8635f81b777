//! A priority queue of named patients, backed by a binary min-heap.
//!
//! Lower priority values are more urgent. Ties are broken by name, in
//! code-point order.

pub mod error;
pub mod patient;
pub mod patient_queue;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::patient::Patient;
pub use crate::patient_queue::PatientQueue;

// priority of a patient; lower is more urgent
pub type Priority = i32;
