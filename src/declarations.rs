//! Front API: one JSON object in, both declaration blocks out.
use serde_json::Value;

use crate::codegen::{emit_block, CSharp, Notation, TypeScript};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::ir::Field;
use crate::lower::{lower_record, lower_to_ir};
use crate::shape::{analyze, PropertyRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarations {
    pub class_block: String,
    pub interface_block: String,
}

/// Class-notation type name for one property.
pub fn render_class_type(record: &PropertyRecord<'_>, cfg: &RenderConfig) -> String {
    CSharp::new(cfg).type_name(&lower_to_ir(record.value, cfg))
}

/// Structural-notation type name for one property.
pub fn render_structural_type(record: &PropertyRecord<'_>, cfg: &RenderConfig) -> String {
    TypeScript::new(cfg).type_name(&lower_to_ir(record.value, cfg))
}

pub fn emit_class_block(records: &[PropertyRecord<'_>], cfg: &RenderConfig) -> String {
    emit_block(CSharp::new(cfg), &lower_fields(records, cfg))
}

pub fn emit_interface_block(records: &[PropertyRecord<'_>], cfg: &RenderConfig) -> String {
    emit_block(TypeScript::new(cfg), &lower_fields(records, cfg))
}

/// Analyze `object` once and render both notations from the same records, so
/// both blocks list members in the same order.
pub fn render(object: &Value, cfg: &RenderConfig) -> Result<Declarations> {
    let records = analyze(object)?;
    let fields = lower_fields(&records, cfg);
    Ok(Declarations {
        class_block: emit_block(CSharp::new(cfg), &fields),
        interface_block: emit_block(TypeScript::new(cfg), &fields),
    })
}

fn lower_fields(records: &[PropertyRecord<'_>], cfg: &RenderConfig) -> Vec<Field> {
    records.iter().map(|r| lower_record(r, cfg)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn types(v: Value) -> (String, String) {
        let cfg = RenderConfig::default();
        let obj = json!({ "x": v });
        let records = analyze(&obj).unwrap();
        (render_class_type(&records[0], &cfg), render_structural_type(&records[0], &cfg))
    }

    #[test]
    fn per_value_type_pairs() {
        let cases = [
            (json!("2024-01-15T10:30:00+02:00"), "DateTimeOffset", "Date"),
            (json!("2024-01-15T10:30:00Z"), "DateTimeOffset", "Date"),
            (json!("2024-01-15T10:30:00"), "DateTime", "Date"),
            (json!("hello"), "string", "string"),
            (json!(3), "int", "number"),
            (json!(3.5), "float", "number"),
            (json!(true), "bool", "boolean"),
            (json!(null), "string", "any"),
            (json!([1, 2, 3]), "List<int>", "number[]"),
            (json!([]), "List<object>", "any[]"),
            (json!({"k": 1}), "object", "object"),
        ];
        for (v, class_ty, ts_ty) in cases {
            let shown = v.to_string();
            assert_eq!(types(v), (class_ty.to_owned(), ts_ty.to_owned()), "{shown}");
        }
    }

    #[test]
    fn scenario_object_renders_both_blocks() {
        let obj: Value = serde_json::from_str(
            r#"{"id": 1, "createdAt": "2024-01-15T10:30:00Z", "tags": ["a","b"], "note": null}"#,
        ).unwrap();
        let out = render(&obj, &RenderConfig::default()).unwrap();
        assert_eq!(out.class_block, indoc! {"
            public class ClassName {
                public int Id { get; set; }
                public DateTimeOffset CreatedAt { get; set; }
                public List<string> Tags { get; set; }
                public string Note { get; set; }
            }"});
        assert_eq!(out.interface_block, indoc! {"
            interface interfaceName {
              id: number;
              createdAt: Date;
              tags: string[];
              note: any;
            }"});
    }

    #[test]
    fn empty_object_renders_bare_blocks() {
        let out = render(&json!({}), &RenderConfig::default()).unwrap();
        assert_eq!(out.class_block, "public class ClassName {\n}");
        assert_eq!(out.interface_block, "interface interfaceName {\n}");
    }

    #[test]
    fn separate_emitters_agree_with_render() {
        let obj = json!({"userName": "x", "age": 40, "score": 9.5});
        let cfg = RenderConfig::default();
        let records = analyze(&obj).unwrap();
        let out = render(&obj, &cfg).unwrap();
        assert_eq!(emit_class_block(&records, &cfg), out.class_block);
        assert_eq!(emit_interface_block(&records, &cfg), out.interface_block);
    }

    #[test]
    fn renamed_placeholders() {
        let cfg = RenderConfig::default().with_class_name("User").with_interface_name("IUser");
        let out = render(&json!({"a": 1}), &cfg).unwrap();
        assert!(out.class_block.starts_with("public class User {"));
        assert!(out.interface_block.starts_with("interface IUser {"));
    }
}
