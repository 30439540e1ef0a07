//! Mock implementations for testing


pub use dictionary::MockDictionary;
pub use http_server::MockHttpServer;
