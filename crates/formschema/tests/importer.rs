use formschema::{Field, FieldType, ImportErrorKind, encode, import_declarations};
use serde_json::json;

#[test]
fn test_asymmetric_required_rule() {
    let fields =
        import_declarations("id: string;\nrole: \"ADMIN\" | \"USER\";\ndept: string | null;")
            .unwrap();
    assert_eq!(fields.len(), 3);

    assert_eq!(fields[0].name, "id");
    assert_eq!(fields[0].field_type(), FieldType::String);
    assert!(fields[0].required && !fields[0].allow_null);

    assert_eq!(fields[1], Field::enumeration("role", ["ADMIN", "USER"]).with_required(true));

    assert_eq!(fields[2].name, "dept");
    assert_eq!(fields[2].field_type(), FieldType::String);
    assert!(fields[2].allow_null);
    assert!(!fields[2].required);
}

#[test]
fn test_fail_fast_reports_line() {
    let err = import_declarations("id: string;\nbroken line\ndept: string;").unwrap_err();
    assert_eq!(err.line, 2);
    assert_eq!(err.text, "broken line");
    assert_eq!(err.kind, ImportErrorKind::MissingColon);
}

#[test]
fn test_import_then_encode() {
    let fields = import_declarations(
        "interface Employee {\n  id: string;\n  dept: string | null;\n  skills: string[];\n}",
    )
    .unwrap();
    assert_eq!(
        encode(&fields).to_value(),
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "string"},
                "dept": {"type": ["string", "null"]},
                "skills": {"type": "array", "items": {"type": "string"}}
            },
            "required": ["id", "skills"]
        })
    );
}
