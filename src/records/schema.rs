//! # Schema Definition
//!
//! This module provides the `Schema` struct that defines the packed byte
//! layout of a record, and the `SchemaBuilder` used to construct one. The
//! schema pre-computes offsets for O(1) field access.
//!
//! ## Schema Internals
//!
//! - `fields`: ordered field descriptors, indexed 0..N-1 in declaration order
//! - `offsets`: pre-computed byte offset of each field
//! - `total_size`: exact byte length of a record buffer for this schema
//!
//! Offsets are cached at append time rather than recomputed per access:
//! field access is the hot path and happens far more often than schema
//! construction. A finished schema is immutable and safe to share across
//! threads.

use eyre::{bail, Result};

use crate::types::{FieldDef, FieldType};

#[derive(Debug, Clone)]
pub struct Schema {
    pub(crate) fields: Vec<FieldDef>,
    pub(crate) offsets: Vec<usize>,
    pub(crate) total_size: usize,
}

impl Schema {
    /// Builds a schema from a complete field list in one pass.
    pub fn new(fields: Vec<FieldDef>) -> Result<Self> {
        let mut builder = SchemaBuilder::new();
        for field in fields {
            builder.push_def(field)?;
        }
        Ok(builder.finish())
    }

    /// Starts an empty schema with `total_size == 0`.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Exact buffer size in bytes required for a record of this schema.
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    pub fn field(&self, field_idx: usize) -> Option<&FieldDef> {
        self.fields.get(field_idx)
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Byte offset of a field. Panics if `field_idx` is out of range; use
    /// [`Schema::field_range`] for the checked variant.
    pub fn offset(&self, field_idx: usize) -> usize {
        self.offsets[field_idx]
    }

    /// Checked extent of a field within a record buffer.
    pub fn field_range(&self, field_idx: usize) -> Result<std::ops::Range<usize>> {
        let Some(field) = self.fields.get(field_idx) else {
            bail!(
                "field index {} out of range ({} fields)",
                field_idx,
                self.fields.len()
            );
        };
        let start = self.offsets[field_idx];
        Ok(start..start + field.byte_width())
    }
}

/// Append-only construction phase for [`Schema`].
///
/// Each `push` stores the running total as the new field's offset and
/// extends the total by the field's width, so N appends cost O(N) overall.
/// `finish` freezes the layout; nothing mutates a schema afterwards.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldDef>,
    offsets: Vec<usize>,
    total_size: usize,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field of `count` packed elements and returns its index.
    pub fn push(&mut self, field_type: FieldType, count: usize) -> Result<usize> {
        self.push_def(FieldDef::new(field_type, count)?)
    }

    /// Appends an embedded opaque blob field of `len` bytes.
    pub fn push_nested(&mut self, len: usize) -> Result<usize> {
        self.push_def(FieldDef::nested(len)?)
    }

    pub(crate) fn push_def(&mut self, field: FieldDef) -> Result<usize> {
        let Some(new_total) = self.total_size.checked_add(field.byte_width()) else {
            bail!(
                "schema size overflows with field of {} bytes",
                field.byte_width()
            );
        };
        self.offsets.push(self.total_size);
        self.fields.push(field);
        self.total_size = new_total;
        Ok(self.fields.len() - 1)
    }

    /// Removes and returns the most recently appended field.
    pub fn pop(&mut self) -> Option<FieldDef> {
        let field = self.fields.pop()?;
        self.offsets.pop();
        self.total_size -= field.byte_width();
        Some(field)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Freezes the builder into an immutable schema.
    pub fn finish(self) -> Schema {
        Schema {
            fields: self.fields,
            offsets: self.offsets,
            total_size: self.total_size,
        }
    }
}
