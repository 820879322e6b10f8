//! Tests for token service
