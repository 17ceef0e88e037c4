use crate::config::RenderConfig;
use crate::ir::{Field, Ty};

use super::Notation;

/// Structural notation. Member names are the original keys, verbatim.
#[derive(Clone, Copy)]
pub struct TypeScript<'a> {
    cfg: &'a RenderConfig,
}

impl<'a> TypeScript<'a> {
    pub fn new(cfg: &'a RenderConfig) -> Self {
        Self { cfg }
    }
}

impl Notation for TypeScript<'_> {
    fn type_name(&self, ty: &Ty) -> String {
        match ty {
            Ty::Integer | Ty::Float => "number".to_owned(),
            Ty::Bool => "boolean".to_owned(),
            Ty::String => "string".to_owned(),
            Ty::Temporal(_) => "Date".to_owned(),
            Ty::List(item) => format!("{}[]", self.type_name(item)),
            Ty::Null | Ty::Unknown => "any".to_owned(),
            Ty::Object => "object".to_owned(),
        }
    }

    fn member_line(&self, field: &Field) -> String {
        format!("{}{}: {};", self.cfg.interface_indent, field.name, self.type_name(&field.ty))
    }

    fn header(&self) -> String {
        format!("interface {} {{", self.cfg.interface_name)
    }
}
