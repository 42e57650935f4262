//! Vocabulary shared by the order-form core and its front ends.

pub mod domain;
pub mod error;
pub mod protocol;
