//! # Field Descriptors
//!
//! A `FieldDef` is one typed slot in a schema: an element type plus a repeat
//! count. A count greater than one declares an array field whose elements are
//! packed contiguously; for `Nest` the count is the literal byte length of
//! the embedded blob.
//!
//! Validation happens at construction, so a descriptor that exists is always
//! well-formed: a zero count or a width that would overflow `usize` is
//! rejected up front.

use eyre::{bail, Result};

use crate::types::field_type::FieldType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    field_type: FieldType,
    count: usize,
}

impl FieldDef {
    /// Creates a descriptor for `count` packed elements of `field_type`.
    pub fn new(field_type: FieldType, count: usize) -> Result<Self> {
        if count == 0 {
            bail!("field count must be at least 1");
        }
        if field_type.element_size().checked_mul(count).is_none() {
            bail!(
                "field width overflows: {} elements of {} bytes",
                count,
                field_type.element_size()
            );
        }
        Ok(Self { field_type, count })
    }

    /// Single-element field of the given type.
    pub fn scalar(field_type: FieldType) -> Self {
        Self {
            field_type,
            count: 1,
        }
    }

    /// Embedded opaque blob of `len` bytes.
    pub fn nested(len: usize) -> Result<Self> {
        Self::new(FieldType::Nest, len)
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Total bytes this field occupies in a record.
    pub fn byte_width(&self) -> usize {
        self.field_type.element_size() * self.count
    }
}
