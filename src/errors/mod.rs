//! Error types and error handling for the front end.
//!
//! This module defines the errors a parse can end with. It includes:
//!
//! - Error structures with source position information
//! - The syntax error and end-of-input variants
//! - Error formatting and display functionality

pub mod errors;
