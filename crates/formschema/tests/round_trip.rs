use formschema::{EnumValues, Field, FieldKind, FieldType, decode, encode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

/// Random field list with unique sibling names.
fn random_fields(rng: &mut StdRng, depth: usize) -> Vec<Field> {
    let count = rng.random_range(0..=4);
    (0..count)
        .map(|index| {
            let name = format!("f{depth}_{index}");
            let kind = random_kind(rng, depth);
            Field::new(name, kind)
                .with_required(rng.random_bool(0.5))
                .with_allow_null(rng.random_bool(0.3))
        })
        .collect()
}

fn random_kind(rng: &mut StdRng, depth: usize) -> FieldKind {
    let nest = depth < 3;
    match rng.random_range(0..6) {
        0 => FieldKind::String,
        1 => FieldKind::Number,
        2 => FieldKind::Boolean,
        3 if nest => FieldKind::Object {
            children: random_fields(rng, depth + 1),
        },
        4 => {
            let item_type = FieldType::ALL[rng.random_range(0..FieldType::ALL.len())];
            let item_fields = if item_type == FieldType::Object && nest {
                random_fields(rng, depth + 1)
            } else {
                Vec::new()
            };
            FieldKind::Array {
                item_type,
                item_fields,
            }
        }
        _ => {
            let values: EnumValues = (0..rng.random_range(0..4))
                .map(|i| format!("V{}", 3 - i))
                .collect();
            FieldKind::Enum { values }
        }
    }
}

#[test]
fn test_structural_round_trip_generated() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..200 {
        let fields = random_fields(&mut rng, 0);
        let doc = encode(&fields).to_value();
        assert_eq!(decode(&doc), fields, "document: {doc}");
    }
}

#[test]
fn test_round_trip_through_text() {
    let fields = vec![
        Field::object(
            "user",
            vec![
                Field::of_type("name", FieldType::String).with_required(true),
                Field::enumeration("role", ["ADMIN", "USER"]).with_allow_null(true),
            ],
        )
        .with_required(true),
        Field::array_of_objects(
            "orders",
            vec![Field::of_type("total", FieldType::Number).with_required(true)],
        ),
        Field::array("tags", FieldType::String).with_allow_null(true),
        Field::array("roles", FieldType::Enum).with_required(true),
    ];
    let text = formschema::to_text(&encode(&fields), 2);
    let value = formschema::parse_text(&text).unwrap();
    assert_eq!(decode(&value), fields);
}

#[test]
fn test_totality_on_degenerate_input() {
    assert_eq!(
        encode(&[]).to_value(),
        json!({"type": "object", "properties": {}})
    );
    assert_eq!(
        encode(&[Field::of_type("", FieldType::Boolean)]).to_value(),
        json!({"type": "object", "properties": {"": {"type": "boolean"}}})
    );
    assert_eq!(
        encode(&[Field::object("empty", vec![])]).to_value(),
        json!({
            "type": "object",
            "properties": {"empty": {"type": "object", "properties": {}}}
        })
    );
}

#[test]
fn test_nullable_scalar() {
    let fields = vec![
        Field::of_type("age", FieldType::Number)
            .with_required(true)
            .with_allow_null(true),
    ];
    let doc = encode(&fields).to_value();
    assert_eq!(doc["properties"]["age"], json!({"type": ["number", "null"]}));
    assert_eq!(doc["required"], json!(["age"]));

    let decoded = decode(&doc);
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0].field_type(), FieldType::Number);
    assert!(decoded[0].required);
    assert!(decoded[0].allow_null);
}

#[test]
fn test_enum_order_preserved() {
    for values in [["ADMIN", "USER"], ["USER", "ADMIN"]] {
        let fields = vec![Field::enumeration("role", values)];
        let doc = encode(&fields).to_value();
        assert_eq!(doc["properties"]["role"]["enum"], json!(values));
        let FieldKind::Enum { values: decoded } = &decode(&doc)[0].kind else {
            panic!("expected enum field");
        };
        assert_eq!(decoded.as_slice(), values);
    }
}

#[test]
fn test_minimal_scenario() {
    let fields = vec![Field::of_type("age", FieldType::Number).with_required(true)];
    assert_eq!(
        encode(&fields).to_value(),
        json!({
            "type": "object",
            "properties": {"age": {"type": "number"}},
            "required": ["age"]
        })
    );
}

#[test]
fn test_duplicate_siblings_last_write_wins() {
    let fields = vec![
        Field::of_type("id", FieldType::String).with_required(true),
        Field::of_type("note", FieldType::String),
        Field::of_type("id", FieldType::Number).with_required(true),
    ];
    let doc = encode(&fields).to_value();
    assert_eq!(
        doc,
        json!({
            "type": "object",
            "properties": {"id": {"type": "number"}, "note": {"type": "string"}},
            "required": ["id"]
        })
    );
    let names: Vec<_> = decode(&doc).into_iter().map(|f| f.name).collect();
    assert_eq!(names, ["id", "note"]);
}

#[test]
fn test_hand_edited_document_degrades_to_string() {
    let doc = json!({
        "properties": {
            "when": {"type": "date"},
            "loose": {},
            "list": {"type": "array"}
        }
    });
    let fields = decode(&doc);
    assert_eq!(
        fields[0].kind,
        FieldKind::Unknown {
            original: "date".to_string()
        }
    );
    assert_eq!(fields[0].field_type(), FieldType::String);
    assert_eq!(fields[1].kind, FieldKind::String);
    assert_eq!(fields[2], Field::array("list", FieldType::String));

    // Unknown re-encodes as a plain string.
    assert_eq!(
        encode(&fields).to_value()["properties"]["when"],
        json!({"type": "string"})
    );
}
