//! jq pre-processing of input documents (via jaq).
use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

use crate::error::{Error, Result};

/// Run `filter_src` over `input`; every filter output becomes one document.
pub fn run_jaq(filter_src: &str, input: &Value) -> Result<Vec<Value>> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(format_parse_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(format_undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let outputs = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    for item in outputs {
        let v = item.map_err(|e| Error::jq(format!("{e:?}")))?;
        // Val: Display -> JSON text; re-parse so key order survives as written
        out.push(parse_output(&v.to_string())?);
    }
    Ok(out)
}

/// Filter output that serde_json rejects (e.g. non-finite numbers) is a jq
/// failure, not an input failure.
fn parse_output(text: &str) -> Result<Value> {
    serde_json::from_str::<Value>(text)
        .map_err(|e| Error::jq(format!("filter output `{text}` is not JSON: {e}")))
}

fn format_parse_errors(
    errs: Vec<(load::File<&str, ()>, load::Error<&str>)>,
) -> Error {
    let mut s = String::new();
    for (file, err) in errs {
        s.push_str(&format!("parse error: {err:?} in `{}`\n", file.code));
    }
    Error::jq(s)
}

fn format_undefined_errors(
    errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>,
) -> Error {
    let mut s = String::new();
    for (file, list) in errs {
        for (name, undef) in list {
            s.push_str(&format!("undefined `{name}`: {undef:?} in `{}`\n", file.code));
        }
    }
    Error::jq(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selects_sub_objects() {
        let input = json!({"data": [{"id": 1}, {"id": 2}]});
        let out = run_jaq(".data[]", &input).unwrap();
        assert_eq!(out, vec![json!({"id": 1}), json!({"id": 2})]);
    }

    #[test]
    fn unknown_function_is_jq_error() {
        let err = run_jaq("no_such_fn(1)", &json!({})).unwrap_err();
        assert!(matches!(err, Error::Jq { .. }), "{err:?}");
    }

    #[test]
    fn unparsable_output_is_jq_error() {
        match parse_output("NaN") {
            Err(Error::Jq { message }) => assert!(message.contains("NaN"), "{message}"),
            other => panic!("expected Jq error, got {other:?}"),
        }
        assert_eq!(parse_output(r#"{"a":1}"#).unwrap(), json!({"a": 1}));
    }
}
