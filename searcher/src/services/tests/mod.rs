//! Tests for searcher services
//!
//! HTTP behaviour is exercised against a local wiremock server.
