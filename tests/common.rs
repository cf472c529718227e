//! Test helper utilities for uniform-error integration tests
//!
//! This module provides reusable fixtures shared across test files.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use std::sync::Arc;

use uniform_error::{ErrorHandler, MemoryLogger};

/// Handler wired to a shared in-memory logger so tests can observe the
/// logging gate from the outside.
pub fn memory_handler() -> (ErrorHandler, Arc<MemoryLogger>) {
    let logger = Arc::new(MemoryLogger::new());
    let mut handler = ErrorHandler::new();
    handler.set_logger(logger.clone());
    (handler, logger)
}
