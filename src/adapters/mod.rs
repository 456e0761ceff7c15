// Adapters layer: concrete implementations for external systems (proxy HTTP endpoints).

pub mod http;

pub use http::HttpBudgetApi;
