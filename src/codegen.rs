//! Declaration codegen: `ir::Field` lists → source text, one notation at a time.
//!
//! Each notation supplies type names, member lines and the block's header and
//! footer; [`Codegen`] owns the buffer and the assembly order.
pub mod csharp;
pub mod typescript;

use crate::ir::{Field, Ty};

pub use csharp::CSharp;
pub use typescript::TypeScript;

pub trait Notation {
    fn type_name(&self, ty: &Ty) -> String;
    fn member_line(&self, field: &Field) -> String;
    fn header(&self) -> String;
    fn footer(&self) -> String { "}".to_owned() }
}

pub struct Codegen<N: Notation> {
    notation: N,
    out: String,
}

impl<N: Notation> Codegen<N> {
    pub fn new(notation: N) -> Self {
        Self { notation, out: String::new() }
    }

    /// Emit one full block. Field order is kept exactly as given.
    pub fn emit(&mut self, fields: &[Field]) {
        self.out.push_str(&self.notation.header());
        self.out.push('\n');
        for field in fields {
            self.out.push_str(&self.notation.member_line(field));
            self.out.push('\n');
        }
        self.out.push_str(&self.notation.footer());
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

pub fn emit_block<N: Notation>(notation: N, fields: &[Field]) -> String {
    let mut cg = Codegen::new(notation);
    cg.emit(fields);
    cg.into_string()
}
