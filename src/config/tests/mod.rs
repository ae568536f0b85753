//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `cli_parsing`: Short and long flags loaded from arguments
//! - `helpers`: Layer composition
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `field_resolution`: Credentials, ignore list, and API URL resolution
//! - `validation`: `default_method` and flag consistency checks

mod helpers;
mod precedence;
mod validation;
