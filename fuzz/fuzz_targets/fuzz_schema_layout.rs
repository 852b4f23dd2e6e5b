//! Fuzz testing for schema layout computation.
//!
//! This fuzz target drives SchemaBuilder with arbitrary push/pop sequences
//! and checks the layout invariants: cached offsets equal the cumulative sum
//! of preceding widths, the total equals the sum of all widths, and pop
//! exactly undoes the most recent push.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use packrec::{FieldType, SchemaBuilder};

#[derive(Debug, Arbitrary)]
enum BuildStep {
    Push { tag: u8, count: u16 },
    Pop,
}

fuzz_target!(|steps: Vec<BuildStep>| {
    let mut builder = SchemaBuilder::new();

    for step in &steps {
        match step {
            BuildStep::Push { tag, count } => {
                let field_type = FieldType::try_from(*tag % 12).unwrap();
                let count = (*count as usize % 1024) + 1;
                let before = builder.field_count();
                let idx = builder.push(field_type, count).unwrap();
                assert_eq!(idx, before);
            }
            BuildStep::Pop => {
                let before_size = builder.total_size();
                if let Some(field) = builder.pop() {
                    assert_eq!(builder.total_size(), before_size - field.byte_width());
                } else {
                    assert_eq!(before_size, 0);
                }
            }
        }
        if builder.field_count() > 64 {
            break;
        }
    }

    let schema = builder.finish();

    let mut expected_offset = 0;
    for (idx, field) in schema.fields().iter().enumerate() {
        assert_eq!(schema.offset(idx), expected_offset);
        let range = schema.field_range(idx).unwrap();
        assert_eq!(range.len(), field.byte_width());
        expected_offset += field.byte_width();
    }
    assert_eq!(schema.total_size(), expected_offset);
    assert!(schema.field_range(schema.field_count()).is_err());
});
