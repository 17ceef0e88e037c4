// Notation-neutral type tree for codegen. No serde_json::Value here.

use crate::temporal::Temporal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Integer,
    Float,
    Bool,
    String,
    Temporal(Temporal),      // never `Temporal::Plain`; plain text lowers to `String`
    List(Box<Ty>),           // element type from the first element only
    Null,                    // exactly null, no other evidence
    Object,                  // nested object, not expanded
    Unknown,                 // element of an empty array
}

impl Ty {
    pub fn list_of(item: Ty) -> Self {
        Ty::List(Box::new(item))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: Ty,
}
