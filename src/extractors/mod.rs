pub mod n_new;
pub use n_new::NNew;
