//! # Application Layer
//!
//! Services that turn domain values into shipping estimates without I/O.

pub mod services;
