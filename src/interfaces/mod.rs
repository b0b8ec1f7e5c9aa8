//! Trait definitions for index administration backends.

mod index_admin_provider;

pub use index_admin_provider::IndexAdminProvider;
