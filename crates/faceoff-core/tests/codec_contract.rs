//! Behavior every codec must show on the shared fixtures, and where they differ

use faceoff::prelude::*;
use faceoff::{JSON_INPUT, JSON_WITH_NULL};
use proptest::prelude::*;

fn assert_id_is_one<C: JsonCodec>(codec: &C) {
    let json = codec.encode(&A::new(1)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("{} produced invalid JSON {json}: {e}", codec.name()));
    assert_eq!(value["id"], 1, "{} lost the id", codec.name());
}

fn assert_decodes_input<C: JsonCodec>(codec: &C) {
    let b: B = codec.decode(JSON_INPUT).unwrap();
    assert_eq!(b.id(), 3, "{}", codec.name());
    assert_eq!(b.text().unwrap(), "string3", "{}", codec.name());
}

#[test]
fn test_every_codec_encodes_id() {
    assert_id_is_one(&SerdeJsonCodec::new());
    assert_id_is_one(&SonicCodec::new());
    assert_id_is_one(&SimdJsonCodec::new());
}

#[test]
fn test_every_codec_decodes_input() {
    assert_decodes_input(&SerdeJsonCodec::new());
    assert_decodes_input(&SonicCodec::new());
    assert_decodes_input(&SimdJsonCodec::new());
}

#[test]
fn test_serde_json_defers_null_to_access() {
    let b: B = SerdeJsonCodec::new().decode(JSON_WITH_NULL).unwrap();
    assert_eq!(b.id(), 3);

    let err = b.text().map(str::len).unwrap_err();
    assert_eq!(
        err,
        Error::NullField {
            record: "B",
            field: "str"
        }
    );
}

#[test]
fn test_sonic_rejects_null_with_validation_error() {
    let err = SonicCodec::new().decode::<B>(JSON_WITH_NULL).unwrap_err();
    assert!(err.is_data_validation(), "unexpected error: {err:?}");
}

#[test]
fn test_simd_json_rejects_null_with_decode_error() {
    let err = SimdJsonCodec::new().decode::<B>(JSON_WITH_NULL).unwrap_err();
    assert!(err.is_decode(), "unexpected error: {err:?}");
}

#[test]
fn test_codec_names_in_report_order() {
    assert_eq!(SerdeJsonCodec::new().name(), "serde_json");
    assert_eq!(SonicCodec::new().name(), "sonic-rs");
    assert_eq!(SimdJsonCodec::new().name(), "simd-json");
}

proptest! {
    #[test]
    fn prop_encoded_a_keeps_id(id in any::<i32>()) {
        let a = A::new(id);
        for json in [
            SerdeJsonCodec::new().encode(&a).unwrap(),
            SonicCodec::new().encode(&a).unwrap(),
            SimdJsonCodec::new().encode(&a).unwrap(),
        ] {
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(value["id"].as_i64(), Some(i64::from(id)));
        }
    }

    #[test]
    fn prop_libraries_agree_on_b(id in any::<i32>(), text in "[a-zA-Z0-9 ]{0,32}") {
        let input = serde_json::json!({ "id": id, "str": text }).to_string();

        let expected = B::new(id, text.as_str());
        prop_assert_eq!(SerdeJsonCodec::new().decode::<B>(&input).unwrap(), expected.clone());
        prop_assert_eq!(SonicCodec::new().decode::<B>(&input).unwrap(), expected.clone());
        prop_assert_eq!(SimdJsonCodec::new().decode::<B>(&input).unwrap(), expected);
    }
}
