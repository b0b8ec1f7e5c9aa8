//! Elasticsearch implementation of the index administration provider.

mod provider;

pub use provider::ElasticsearchProvider;
