//! Unit tests for Composer artifact operations.
