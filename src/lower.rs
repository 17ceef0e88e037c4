use serde_json::{Number, Value};
use tracing::warn;

use crate::config::{NumberPolicy, RenderConfig, MAX_SAFE_INTEGER};
use crate::ir::{Field, Ty};
use crate::shape::PropertyRecord;
use crate::temporal::{classify_with_policy, Temporal};

pub fn lower_to_ir(v: &Value, cfg: &RenderConfig) -> Ty {
    match v {
        Value::Null => Ty::Null,
        Value::Bool(_) => Ty::Bool,
        Value::Number(n) => lower_number(n, cfg.number_policy),
        Value::String(s) => match classify_with_policy(s, cfg.temporal_policy) {
            Temporal::Plain => Ty::String,
            t => Ty::Temporal(t),
        },
        // Only the first element is consulted; the rest are never inspected.
        Value::Array(xs) => match xs.first() {
            Some(first) => Ty::list_of(lower_to_ir(first, cfg)),
            None => {
                warn!("empty array: element type is unknown");
                Ty::list_of(Ty::Unknown)
            }
        },
        Value::Object(_) => Ty::Object,
    }
}

pub fn lower_record(record: &PropertyRecord<'_>, cfg: &RenderConfig) -> Field {
    Field {
        name: record.name.to_owned(),
        ty: lower_to_ir(record.value, cfg),
    }
}

fn lower_number(n: &Number, policy: NumberPolicy) -> Ty {
    // Exact integers carried as i64/u64 never lose their fraction test to rounding.
    let integral = n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0);
    if !integral {
        return Ty::Float;
    }
    match policy {
        NumberPolicy::Fractional => Ty::Integer,
        NumberPolicy::SafeInteger => {
            let in_range = match (n.as_i64(), n.as_u64()) {
                (Some(i), _) => i.unsigned_abs() <= MAX_SAFE_INTEGER as u64,
                (None, Some(u)) => u <= MAX_SAFE_INTEGER as u64,
                _ => n.as_f64().is_some_and(|f| f.abs() <= MAX_SAFE_INTEGER),
            };
            if in_range { Ty::Integer } else { Ty::Float }
        }
    }
}
