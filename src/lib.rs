//! # Packrec - Fixed-Layout Binary Record Engine
//!
//! Packrec packs typed fields into contiguous byte buffers using a
//! schema-computed layout. A caller builds a schema once (an ordered list of
//! typed, fixed-width fields) and reuses it across many buffers; individual
//! fields are then read and written in place, without parsing or
//! re-serializing the whole record. The implementation prioritizes:
//!
//! - **O(1) field access**: offsets cached at schema build time, never
//!   recomputed on the access path
//! - **Zero-copy reads**: view getters and `field_bytes` borrow directly
//!   from the buffer
//! - **Zero allocation on the codec path**: pure byte copies between
//!   caller-supplied slices
//!
//! ## Quick Start
//!
//! ```ignore
//! use packrec::{FieldType, RecordView, Schema};
//! use packrec::records::codec::write_field;
//!
//! let mut builder = Schema::builder();
//! let id = builder.push(FieldType::Int4, 1)?;
//! let samples = builder.push(FieldType::Float4, 3)?;
//! let schema = builder.finish();
//!
//! let mut buf = vec![0u8; schema.total_size()];
//! write_field(&schema, &mut buf, &42i32.to_ne_bytes(), id)?;
//!
//! let view = RecordView::new(&buf, &schema)?;
//! assert_eq!(view.get_int4(id)?, 42);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Typed Access (RecordView/Builder)   │
//! ├─────────────────────────────────────┤
//! │   Raw Field Codec (read/write)       │
//! ├─────────────────────────────────────┤
//! │  Schema / Layout (offsets, widths)   │
//! ├─────────────────────────────────────┤
//! │   Field Type Table (widths per kind) │
//! └─────────────────────────────────────┘
//! ```
//!
//! Fields are packed in declaration order with zero padding; each occupies
//! `element_size * count` bytes in native host byte order. Buffers carry no
//! header or magic: the schema travels out-of-band, which is the format's
//! defining trade-off (minimal size and overhead, zero self-description).
//!
//! ## Concurrency
//!
//! A finished [`Schema`] is immutable and safe to share across threads.
//! Buffers have no engine-managed concurrency; concurrent writes to one
//! buffer are the caller's to serialize.
//!
//! ## Module Overview
//!
//! - [`types`]: `FieldType` width table and `FieldDef` descriptors
//! - [`records`]: schema layout computation, raw field codec, typed
//!   view/builder

pub mod records;
pub mod types;

pub use records::{RecordBuilder, RecordView, Schema, SchemaBuilder};
pub use types::{FieldDef, FieldType};
