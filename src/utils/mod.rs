//! Utility functions for code generation, URL checks, and request handling.
//!
//! - [`code_generator`] - Short code generation, normalization and validation
//! - [`url_validator`] - Absolute URL validation
//! - [`request_context`] - Click metadata extraction from HTTP headers

pub mod code_generator;
pub mod request_context;
pub mod url_validator;
