//! # Raw Field Codec
//!
//! Stateless read/write of individual fields against a record buffer. Both
//! directions are pure byte copies at the schema's cached offsets: no
//! allocation, no interpretation of field content, native byte order
//! verbatim. Index and bounds checks happen before any byte moves, so a
//! failed call never leaves a partially written buffer.
//!
//! The buffer carries no structure of its own; pairing it with the schema it
//! was sized for is the caller's contract. Any schema with a matching
//! `total_size` will accept the buffer, but only the originating schema makes
//! sense of the bytes.

use eyre::{bail, ensure, Result};

use crate::records::schema::Schema;

fn checked_extent(schema: &Schema, buffer_len: usize, field_idx: usize) -> Result<(usize, usize)> {
    let Some(field) = schema.field(field_idx) else {
        bail!(
            "field index {} out of range ({} fields)",
            field_idx,
            schema.field_count()
        );
    };
    ensure!(
        buffer_len >= schema.total_size(),
        "buffer too small: {} bytes, schema requires {}",
        buffer_len,
        schema.total_size()
    );
    Ok((schema.offset(field_idx), field.byte_width()))
}

/// Copies `src` verbatim into the field's extent within `buffer`.
///
/// `src` must be exactly the field's byte width and already hold the field's
/// declared representation in native byte order; the codec never converts.
pub fn write_field(
    schema: &Schema,
    buffer: &mut [u8],
    src: &[u8],
    field_idx: usize,
) -> Result<()> {
    let (offset, width) = checked_extent(schema, buffer.len(), field_idx)?;
    ensure!(
        src.len() == width,
        "source length {} does not match field width {} at field {}",
        src.len(),
        width,
        field_idx
    );
    buffer[offset..offset + width].copy_from_slice(src);
    Ok(())
}

/// Copies the field's extent within `buffer` verbatim into `dst`.
pub fn read_field(schema: &Schema, buffer: &[u8], dst: &mut [u8], field_idx: usize) -> Result<()> {
    let (offset, width) = checked_extent(schema, buffer.len(), field_idx)?;
    ensure!(
        dst.len() == width,
        "destination length {} does not match field width {} at field {}",
        dst.len(),
        width,
        field_idx
    );
    dst.copy_from_slice(&buffer[offset..offset + width]);
    Ok(())
}

/// Borrows a field's bytes directly out of `buffer`, zero-copy.
pub fn field_bytes<'a>(schema: &Schema, buffer: &'a [u8], field_idx: usize) -> Result<&'a [u8]> {
    let (offset, width) = checked_extent(schema, buffer.len(), field_idx)?;
    Ok(&buffer[offset..offset + width])
}

/// Mutably borrows a field's bytes directly out of `buffer`, zero-copy.
pub fn field_bytes_mut<'a>(
    schema: &Schema,
    buffer: &'a mut [u8],
    field_idx: usize,
) -> Result<&'a mut [u8]> {
    let (offset, width) = checked_extent(schema, buffer.len(), field_idx)?;
    Ok(&mut buffer[offset..offset + width])
}
