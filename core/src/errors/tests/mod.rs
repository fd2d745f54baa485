//! Tests for domain errors and failure dispatch
