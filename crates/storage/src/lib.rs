//! Storage layer for deformspec
//!
//! - `codec`: decode/encode/merge of one 64-byte sensor slot
//! - `file`: reading and writing the 20-slot sensor block of a file

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod file;

pub use codec::{decode, encode, merge, SlotBytes};
pub use file::{
    apply_updates, read_all, read_records, write_all, write_records, SensorFile, WriteMode,
};
