use crate::casing::to_property_case;
use crate::config::RenderConfig;
use crate::ir::{Field, Ty};
use crate::temporal::Temporal;

use super::Notation;

/// Class notation: `public int Id { get; set; }` members.
#[derive(Clone, Copy)]
pub struct CSharp<'a> {
    cfg: &'a RenderConfig,
}

impl<'a> CSharp<'a> {
    pub fn new(cfg: &'a RenderConfig) -> Self {
        Self { cfg }
    }
}

impl Notation for CSharp<'_> {
    fn type_name(&self, ty: &Ty) -> String {
        match ty {
            Ty::Integer => self.cfg.integer_type.clone(),
            Ty::Float => self.cfg.float_type.clone(),
            Ty::Bool => "bool".to_owned(),
            Ty::Temporal(t) if t.is_offset_aware() => "DateTimeOffset".to_owned(),
            Ty::Temporal(Temporal::Local) => "DateTime".to_owned(),
            // null-only fields still need a renderable type
            Ty::String | Ty::Temporal(_) | Ty::Null => "string".to_owned(),
            Ty::List(item) => format!("List<{}>", self.type_name(item)),
            Ty::Object | Ty::Unknown => "object".to_owned(),
        }
    }

    fn member_line(&self, field: &Field) -> String {
        format!(
            "{}{} {} {} {}",
            self.cfg.class_indent,
            self.cfg.modifier,
            self.type_name(&field.ty),
            to_property_case(&field.name),
            self.cfg.accessor,
        )
    }

    fn header(&self) -> String {
        format!("public class {} {{", self.cfg.class_name)
    }
}
