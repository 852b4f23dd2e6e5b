//! # RecordBuilder - Record Construction
//!
//! This module provides `RecordBuilder` for constructing records with
//! type-checked setters. The builder pre-allocates a zeroed buffer of the
//! schema's exact size and supports reset for zero-alloc reuse.
//!
//! ## Usage
//!
//! ```ignore
//! let mut builder = RecordBuilder::new(&schema);
//! builder.set_int4(0, 42)?;
//! builder.set_bytes(1, b"0123456789")?;
//! let record = builder.finish();
//!
//! // Reuse builder for next record
//! builder.reset();
//! builder.set_int4(0, 100)?;
//! ```

use eyre::{ensure, Result};
use zerocopy::IntoBytes;

use crate::records::codec;
use crate::records::schema::Schema;
use crate::types::FieldType;

pub struct RecordBuilder<'a> {
    schema: &'a Schema,
    data: Vec<u8>,
}

impl<'a> RecordBuilder<'a> {
    /// Allocates a zero-filled buffer of the schema's total size.
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            schema,
            data: vec![0u8; schema.total_size()],
        }
    }

    /// Zeroes the buffer so the builder can assemble another record without
    /// reallocating.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Hands the assembled record buffer to the caller.
    pub fn finish(self) -> Vec<u8> {
        self.data
    }

    /// Copies `src` verbatim into a field's extent, any kind. `src` must be
    /// exactly the field's byte width.
    pub fn set_bytes(&mut self, field_idx: usize, src: &[u8]) -> Result<()> {
        codec::write_field(self.schema, &mut self.data, src, field_idx)
    }

    fn set_scalar(&mut self, field_idx: usize, expected: FieldType, bytes: &[u8]) -> Result<()> {
        let Some(field) = self.schema.field(field_idx) else {
            eyre::bail!(
                "field index {} out of range ({} fields)",
                field_idx,
                self.schema.field_count()
            );
        };
        ensure!(
            field.field_type() == expected,
            "field {} is {:?}, expected {:?}",
            field_idx,
            field.field_type(),
            expected
        );
        ensure!(
            field.count() == 1,
            "field {} is an array of {} elements, use set_bytes",
            field_idx,
            field.count()
        );
        let offset = self.schema.offset(field_idx);
        self.data[offset..offset + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    pub fn set_int1(&mut self, field_idx: usize, value: i8) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Int1, value.as_bytes())
    }

    pub fn set_uint1(&mut self, field_idx: usize, value: u8) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Uint1, value.as_bytes())
    }

    pub fn set_int2(&mut self, field_idx: usize, value: i16) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Int2, value.as_bytes())
    }

    pub fn set_uint2(&mut self, field_idx: usize, value: u16) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Uint2, value.as_bytes())
    }

    pub fn set_int4(&mut self, field_idx: usize, value: i32) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Int4, value.as_bytes())
    }

    pub fn set_uint4(&mut self, field_idx: usize, value: u32) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Uint4, value.as_bytes())
    }

    pub fn set_int8(&mut self, field_idx: usize, value: i64) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Int8, value.as_bytes())
    }

    pub fn set_uint8(&mut self, field_idx: usize, value: u64) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Uint8, value.as_bytes())
    }

    pub fn set_float4(&mut self, field_idx: usize, value: f32) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Float4, value.as_bytes())
    }

    pub fn set_float8(&mut self, field_idx: usize, value: f64) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Float8, value.as_bytes())
    }

    pub fn set_char(&mut self, field_idx: usize, value: u8) -> Result<()> {
        self.set_scalar(field_idx, FieldType::Char, &[value])
    }
}
