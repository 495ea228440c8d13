//! Payload validation and the squared-value computation.

pub mod square;
pub mod validation;
pub use square::{parse_stored, square};
pub use validation::{parse_n_new, N_NEW_KEY};
