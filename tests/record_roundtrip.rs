//! # Record Engine Round-Trip Tests
//!
//! End-to-end coverage of the public API over real-life record scenarios:
//!
//! - Schema construction, layout math, and builder reuse
//! - Raw codec write/read round-trips and field independence
//! - Typed view/builder access including array and nested fields
//! - Error paths: out-of-range indices, short buffers, mis-sized sources
//! - Concurrent read-only schema sharing across threads
//!
//! If any test fails after making changes, it indicates a regression.

use std::sync::Arc;
use std::thread;

use packrec::records::codec::{read_field, write_field};
use packrec::{FieldType, RecordBuilder, RecordView, Schema};

fn sensor_schema() -> Schema {
    let mut builder = Schema::builder();
    builder.push(FieldType::Float4, 1).unwrap();
    builder.push(FieldType::Float4, 1).unwrap();
    builder.push(FieldType::Float4, 1).unwrap();
    builder.push(FieldType::Int4, 1).unwrap();
    builder.finish()
}

mod layout_tests {
    use super::*;

    #[test]
    fn sensor_schema_layout_is_sixteen_packed_bytes() {
        let schema = sensor_schema();
        assert_eq!(schema.total_size(), 16);
        assert_eq!(
            (0..4).map(|i| schema.offset(i)).collect::<Vec<_>>(),
            vec![0, 4, 8, 12]
        );
    }

    #[test]
    fn mixed_width_schema_packs_without_padding() {
        let mut builder = Schema::builder();
        builder.push(FieldType::Int1, 1).unwrap();
        builder.push(FieldType::Uint2, 1).unwrap();
        builder.push(FieldType::Float4, 1).unwrap();
        builder.push(FieldType::Int8, 1).unwrap();
        let schema = builder.finish();

        assert_eq!(schema.total_size(), 1 + 2 + 4 + 8);
        assert_eq!(schema.offset(1), 1);
        assert_eq!(schema.offset(2), 3);
        assert_eq!(schema.offset(3), 7);
    }

    #[test]
    fn schema_survives_repeated_buffer_reuse() {
        let schema = sensor_schema();
        let mut buf = vec![0u8; schema.total_size()];

        for round in 0..100i32 {
            write_field(&schema, &mut buf, &round.to_ne_bytes(), 3).unwrap();
            let mut out = [0u8; 4];
            read_field(&schema, &buf, &mut out, 3).unwrap();
            assert_eq!(i32::from_ne_bytes(out), round);
        }
    }
}

mod codec_tests {
    use super::*;

    #[test]
    fn sensor_record_round_trips_through_raw_codec() {
        let schema = sensor_schema();
        let mut buf = vec![0u8; schema.total_size()];

        write_field(&schema, &mut buf, &1.1f32.to_ne_bytes(), 0).unwrap();
        write_field(&schema, &mut buf, &2.2f32.to_ne_bytes(), 1).unwrap();
        write_field(&schema, &mut buf, &3.3f32.to_ne_bytes(), 2).unwrap();
        write_field(&schema, &mut buf, &123i32.to_ne_bytes(), 3).unwrap();

        let mut float_out = [0u8; 4];
        read_field(&schema, &buf, &mut float_out, 0).unwrap();
        assert_eq!(f32::from_ne_bytes(float_out), 1.1);
        read_field(&schema, &buf, &mut float_out, 1).unwrap();
        assert_eq!(f32::from_ne_bytes(float_out), 2.2);
        read_field(&schema, &buf, &mut float_out, 2).unwrap();
        assert_eq!(f32::from_ne_bytes(float_out), 3.3);

        let mut int_out = [0u8; 4];
        read_field(&schema, &buf, &mut int_out, 3).unwrap();
        assert_eq!(i32::from_ne_bytes(int_out), 123);
    }

    #[test]
    fn writes_to_one_field_never_bleed_into_neighbors() {
        let mut builder = Schema::builder();
        builder.push(FieldType::Uint1, 13).unwrap();
        builder.push(FieldType::Int4, 1).unwrap();
        let schema = builder.finish();
        assert_eq!(schema.total_size(), 17);

        let mut buf = vec![0u8; schema.total_size()];
        let message = b"Hello World\0\0";
        write_field(&schema, &mut buf, message, 0).unwrap();
        write_field(&schema, &mut buf, &2024i32.to_ne_bytes(), 1).unwrap();

        let view = RecordView::new(&buf, &schema).unwrap();
        assert_eq!(view.get_bytes(0).unwrap(), message);
        assert_eq!(view.get_int4(1).unwrap(), 2024);

        // Overwrite the int and confirm the array is untouched.
        write_field(&schema, &mut buf, &(-1i32).to_ne_bytes(), 1).unwrap();
        let view = RecordView::new(&buf, &schema).unwrap();
        assert_eq!(view.get_bytes(0).unwrap(), message);
    }

    #[test]
    fn error_paths_leave_buffer_intact() {
        let schema = sensor_schema();
        let mut buf = vec![0xEEu8; schema.total_size()];
        let before = buf.clone();

        assert!(write_field(&schema, &mut buf, &[0u8; 4], 4).is_err());
        assert!(write_field(&schema, &mut buf, &[0u8; 3], 0).is_err());

        let mut short = vec![0xEEu8; schema.total_size() - 1];
        let short_before = short.clone();
        assert!(write_field(&schema, &mut short, &[0u8; 4], 0).is_err());

        assert_eq!(buf, before);
        assert_eq!(short, short_before);
    }

    #[test]
    fn buffer_moves_freely_as_raw_bytes() {
        let schema = sensor_schema();
        let mut record = RecordBuilder::new(&schema);
        record.set_float4(0, 9.5).unwrap();
        record.set_int4(3, 7).unwrap();
        let original = record.finish();

        // A record buffer holds no references; a byte-for-byte copy is a
        // fully independent record.
        let copied = original.clone();
        drop(original);

        let view = RecordView::new(&copied, &schema).unwrap();
        assert_eq!(view.get_float4(0).unwrap(), 9.5);
        assert_eq!(view.get_int4(3).unwrap(), 7);
    }
}

mod concurrency_tests {
    use super::*;

    #[test]
    fn frozen_schema_is_shared_across_reader_threads() {
        let schema = Arc::new(sensor_schema());

        let mut record = RecordBuilder::new(&schema);
        record.set_float4(0, 0.5).unwrap();
        record.set_float4(1, 1.5).unwrap();
        record.set_float4(2, 2.5).unwrap();
        record.set_int4(3, 42).unwrap();
        let data = Arc::new(record.finish());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let schema = Arc::clone(&schema);
                let data = Arc::clone(&data);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        let view = RecordView::new(&data, &schema).unwrap();
                        assert_eq!(view.get_float4(1).unwrap(), 1.5);
                        assert_eq!(view.get_int4(3).unwrap(), 42);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
