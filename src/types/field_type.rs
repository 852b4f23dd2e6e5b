//! # Field Type System
//!
//! This module provides the canonical `FieldType` enum for the record engine,
//! used across schema definition, layout computation, and typed record access.
//!
//! ## Design Principles
//!
//! 1. **Single source of truth**: one enum dispatched to a width table
//! 2. **Storage-efficient**: `#[repr(u8)]` for single-byte discriminant
//! 3. **Metadata-free**: repeat count lives in `FieldDef`, not the enum
//!
//! ## Element Widths
//!
//! | Type | Width (bytes) |
//! |------|---------------|
//! | Int1, Uint1, Char | 1 |
//! | Int2, Uint2 | 2 |
//! | Int4, Uint4, Float4 | 4 |
//! | Int8, Uint8, Float8 | 8 |
//! | Nest | 1 (per byte of the embedded blob) |
//!
//! ## Discriminant Values
//!
//! Discriminants are stable and fit in a single byte, so a raw tag stored
//! externally round-trips through `TryFrom<u8>`. Integers are ordered by
//! width with the signed variant first, floats follow, then the byte-wise
//! kinds (char, nest).

/// Primitive field kind with a fixed element width.
///
/// `Nest` marks an embedded sub-record carried as an opaque byte blob: its
/// element width is one byte and the owning field's count is the blob length.
/// The engine never interprets nested content.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int1 = 0,
    Uint1 = 1,
    Int2 = 2,
    Uint2 = 3,
    Int4 = 4,
    Uint4 = 5,
    Int8 = 6,
    Uint8 = 7,
    Float4 = 8,
    Float8 = 9,
    Char = 10,
    Nest = 11,
}

impl FieldType {
    /// Returns the width in bytes of a single element of this type.
    pub fn element_size(&self) -> usize {
        match self {
            FieldType::Int1 | FieldType::Uint1 | FieldType::Char | FieldType::Nest => 1,
            FieldType::Int2 | FieldType::Uint2 => 2,
            FieldType::Int4 | FieldType::Uint4 | FieldType::Float4 => 4,
            FieldType::Int8 | FieldType::Uint8 | FieldType::Float8 => 8,
        }
    }

    /// Returns true if this is an integer type (signed or unsigned).
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            FieldType::Int1
                | FieldType::Uint1
                | FieldType::Int2
                | FieldType::Uint2
                | FieldType::Int4
                | FieldType::Uint4
                | FieldType::Int8
                | FieldType::Uint8
        )
    }

    /// Returns true if this is a floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self, FieldType::Float4 | FieldType::Float8)
    }

    /// Returns true if this is a signed integer type.
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            FieldType::Int1 | FieldType::Int2 | FieldType::Int4 | FieldType::Int8
        )
    }

    /// Returns true if this is an embedded opaque blob.
    pub fn is_nested(&self) -> bool {
        matches!(self, FieldType::Nest)
    }
}

impl TryFrom<u8> for FieldType {
    type Error = eyre::Report;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FieldType::Int1),
            1 => Ok(FieldType::Uint1),
            2 => Ok(FieldType::Int2),
            3 => Ok(FieldType::Uint2),
            4 => Ok(FieldType::Int4),
            5 => Ok(FieldType::Uint4),
            6 => Ok(FieldType::Int8),
            7 => Ok(FieldType::Uint8),
            8 => Ok(FieldType::Float4),
            9 => Ok(FieldType::Float8),
            10 => Ok(FieldType::Char),
            11 => Ok(FieldType::Nest),
            _ => Err(eyre::eyre!("unknown field type tag: {}", value)),
        }
    }
}
