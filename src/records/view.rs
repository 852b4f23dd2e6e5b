//! # RecordView - Zero-Copy Record Access
//!
//! This module provides `RecordView` for reading typed values out of a record
//! buffer with O(1) field access. Scalar getters decode directly from the
//! underlying bytes; array and nested fields come back as borrowed subslices.
//!
//! ## Usage
//!
//! ```ignore
//! let view = RecordView::new(&buffer, &schema)?;
//! let id: i32 = view.get_int4(0)?;
//! let payload: &[u8] = view.get_bytes(1)?;  // Zero-copy reference
//! ```
//!
//! ## Thread Safety
//!
//! `RecordView` borrows immutably from a byte slice. Multiple `RecordView`
//! instances can read the same data concurrently.

use eyre::{ensure, Result};
use zerocopy::FromBytes;

use crate::records::schema::Schema;
use crate::types::FieldType;

#[derive(Debug)]
pub struct RecordView<'a> {
    data: &'a [u8],
    schema: &'a Schema,
}

impl<'a> RecordView<'a> {
    pub fn new(data: &'a [u8], schema: &'a Schema) -> Result<Self> {
        ensure!(
            data.len() >= schema.total_size(),
            "buffer too small: {} bytes, schema requires {}",
            data.len(),
            schema.total_size()
        );
        Ok(Self { data, schema })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Whole extent of a field, any kind: all `count` packed elements of an
    /// array field, or the embedded blob of a nested field.
    pub fn get_bytes(&self, field_idx: usize) -> Result<&'a [u8]> {
        let range = self.schema.field_range(field_idx)?;
        Ok(&self.data[range])
    }

    fn scalar_bytes(&self, field_idx: usize, expected: FieldType) -> Result<&'a [u8]> {
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
            "field {} is an array of {} elements, use get_bytes",
            field_idx,
            field.count()
        );
        let offset = self.schema.offset(field_idx);
        Ok(&self.data[offset..offset + expected.element_size()])
    }

    pub fn get_int1(&self, field_idx: usize) -> Result<i8> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Int1)?;
        i8::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for int1 at field {}", field_idx))
    }

    pub fn get_uint1(&self, field_idx: usize) -> Result<u8> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Uint1)?;
        u8::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for uint1 at field {}", field_idx))
    }

    pub fn get_int2(&self, field_idx: usize) -> Result<i16> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Int2)?;
        i16::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for int2 at field {}", field_idx))
    }

    pub fn get_uint2(&self, field_idx: usize) -> Result<u16> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Uint2)?;
        u16::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for uint2 at field {}", field_idx))
    }

    pub fn get_int4(&self, field_idx: usize) -> Result<i32> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Int4)?;
        i32::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for int4 at field {}", field_idx))
    }

    pub fn get_uint4(&self, field_idx: usize) -> Result<u32> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Uint4)?;
        u32::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for uint4 at field {}", field_idx))
    }

    pub fn get_int8(&self, field_idx: usize) -> Result<i64> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Int8)?;
        i64::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for int8 at field {}", field_idx))
    }

    pub fn get_uint8(&self, field_idx: usize) -> Result<u64> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Uint8)?;
        u64::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for uint8 at field {}", field_idx))
    }

    pub fn get_float4(&self, field_idx: usize) -> Result<f32> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Float4)?;
        f32::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for float4 at field {}", field_idx))
    }

    pub fn get_float8(&self, field_idx: usize) -> Result<f64> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Float8)?;
        f64::read_from_bytes(bytes)
            .map_err(|_| eyre::eyre!("insufficient data for float8 at field {}", field_idx))
    }

    pub fn get_char(&self, field_idx: usize) -> Result<u8> {
        let bytes = self.scalar_bytes(field_idx, FieldType::Char)?;
        Ok(bytes[0])
    }
}
