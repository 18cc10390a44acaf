// Contact form: validation, the external contact store, failure classification.

pub mod classify;
pub mod handlers;
pub mod models;
pub mod store;
pub mod submit;

pub use classify::ErrorClassifier;
pub use store::{ContactStore, SupabaseContactStore};
