//! Fuzz testing for the raw field codec.
//!
//! This fuzz target builds arbitrary schemas, applies arbitrary field writes
//! through the codec, and checks the buffer against a byte-level mirror model
//! to ensure writes land exactly in their field's extent and reads return
//! what was written.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use packrec::records::codec::{field_bytes, read_field, write_field};
use packrec::{FieldType, Schema};

#[derive(Debug, Arbitrary)]
struct CodecInput {
    schema: Vec<FuzzFieldDef>,
    writes: Vec<WriteOperation>,
}

#[derive(Debug, Arbitrary)]
struct FuzzFieldDef {
    field_type: FuzzFieldType,
    count: u8,
}

#[derive(Debug, Arbitrary, Clone, Copy)]
enum FuzzFieldType {
    Int1,
    Uint1,
    Int2,
    Uint2,
    Int4,
    Uint4,
    Int8,
    Uint8,
    Float4,
    Float8,
    Char,
    Nest,
}

#[derive(Debug, Arbitrary)]
struct WriteOperation {
    field_idx: u8,
    fill: u8,
}

impl From<FuzzFieldType> for FieldType {
    fn from(fft: FuzzFieldType) -> Self {
        match fft {
            FuzzFieldType::Int1 => FieldType::Int1,
            FuzzFieldType::Uint1 => FieldType::Uint1,
            FuzzFieldType::Int2 => FieldType::Int2,
            FuzzFieldType::Uint2 => FieldType::Uint2,
            FuzzFieldType::Int4 => FieldType::Int4,
            FuzzFieldType::Uint4 => FieldType::Uint4,
            FuzzFieldType::Int8 => FieldType::Int8,
            FuzzFieldType::Uint8 => FieldType::Uint8,
            FuzzFieldType::Float4 => FieldType::Float4,
            FuzzFieldType::Float8 => FieldType::Float8,
            FuzzFieldType::Char => FieldType::Char,
            FuzzFieldType::Nest => FieldType::Nest,
        }
    }
}

fuzz_target!(|input: CodecInput| {
    if input.schema.is_empty() || input.schema.len() > 32 {
        return;
    }

    let mut builder = Schema::builder();
    for def in &input.schema {
        let count = (def.count as usize % 64) + 1;
        builder.push(def.field_type.into(), count).unwrap();
    }
    let schema = builder.finish();

    let mut buf = vec![0u8; schema.total_size()];
    let mut mirror = vec![0u8; schema.total_size()];

    for op in &input.writes {
        let field_idx = (op.field_idx as usize) % schema.field_count();
        let width = schema.field(field_idx).unwrap().byte_width();
        let src = vec![op.fill; width];

        write_field(&schema, &mut buf, &src, field_idx).unwrap();
        let range = schema.field_range(field_idx).unwrap();
        mirror[range].fill(op.fill);

        assert_eq!(buf, mirror);

        let mut out = vec![0u8; width];
        read_field(&schema, &buf, &mut out, field_idx).unwrap();
        assert_eq!(out, src);
        assert_eq!(field_bytes(&schema, &buf, field_idx).unwrap(), &src[..]);
    }

    // Out-of-range and short-buffer failures must not touch the buffer.
    let before = buf.clone();
    assert!(write_field(&schema, &mut buf, &[], schema.field_count()).is_err());
    if schema.total_size() > 0 {
        let mut short = buf[..schema.total_size() - 1].to_vec();
        let width = schema.field(0).unwrap().byte_width();
        assert!(write_field(&schema, &mut short, &vec![0xFF; width], 0).is_err());
    }
    assert_eq!(buf, before);
});
