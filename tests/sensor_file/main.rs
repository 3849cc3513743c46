//! Sensor File Test Suite
//!
//! Exercises the public `deformspec` API against real files.
//!
//! ## Test Groups
//!
//! - **end_to_end**: write → read back through the facade
//! - **byte_fidelity**: idempotent write-back, offsets, padding
//! - **discovery**: folder walk feeding batch scaling
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test sensor_file
//! ```

mod test_utils;

mod byte_fidelity;
mod discovery;
mod end_to_end;
