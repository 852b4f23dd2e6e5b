//! # Record Serialization with O(1) Field Access
//!
//! This module provides schema-driven fixed-layout record access. A schema
//! pre-computes a packed byte layout once; every field read or write is then
//! a direct offset calculation and a raw byte copy, never a parse of the
//! whole record.
//!
//! ## Record Binary Layout
//!
//! ```text
//! +------------------+------------------+-----+------------------+
//! | field 0          | field 1          | ... | field N-1        |
//! | [u8; w0]         | [u8; w1]         |     | [u8; wN-1]       |
//! +------------------+------------------+-----+------------------+
//! ```
//!
//! | Component | Description |
//! |-----------|-------------|
//! | **field i** | `element_size(type_i) * count_i` bytes, native byte order |
//! | **offset i** | Sum of widths of fields `0..i`, no inter-field padding |
//! | **record length** | Sum of all field widths, exactly `Schema::total_size` |
//!
//! There is no header, magic number, or length prefix in the buffer. The
//! schema travels out-of-band: minimal size and overhead, zero
//! self-description.
//!
//! ## Design Goals
//!
//! 1. **O(1) field access**: offsets cached at schema build time
//! 2. **Zero-copy reads**: `field_bytes` and view getters borrow the buffer
//! 3. **Schema-dependent**: types come from the schema, not stored per-row
//! 4. **No partial writes**: every check precedes the first copied byte
//!
//! ## Module Structure
//!
//! - `schema`: Schema and SchemaBuilder with pre-computed offsets
//! - `codec`: raw field read/write against caller-supplied buffers
//! - `view`: RecordView for zero-copy typed reading
//! - `builder`: RecordBuilder for typed construction

pub mod builder;
pub mod codec;
pub mod schema;
pub mod view;


pub use builder::RecordBuilder;
pub use codec::{field_bytes, field_bytes_mut, read_field, write_field};
pub use schema::{Schema, SchemaBuilder};
pub use view::RecordView;
