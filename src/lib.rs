//! Infer type declarations from a JSON object.
//!
//! A flat object is analyzed key by key, each value is lowered to a small
//! notation-neutral [`ir::Ty`], and two notations are emitted from the same
//! field list: a class with auto-properties and a structural interface.
//!
//! ```
//! use json_decl::{render, RenderConfig};
//! use serde_json::json;
//!
//! let out = render(&json!({"userName": "ada", "age": 36}), &RenderConfig::default()).unwrap();
//! assert!(out.class_block.contains("public string UserName { get; set; }"));
//! assert!(out.interface_block.contains("  age: number;"));
//! ```
pub mod casing;
pub mod codegen;
pub mod config;
pub mod declarations;
pub mod error;
pub mod ir;
pub mod jq_exec;
pub mod lower;
pub mod path_de;
pub mod session;
pub mod shape;
pub mod temporal;

pub use casing::to_property_case;
pub use config::{NumberPolicy, RenderConfig, TemporalPolicy};
pub use declarations::{
    emit_class_block, emit_interface_block, render, render_class_type, render_structural_type,
    Declarations,
};
pub use error::{Error, Result};
pub use session::{format_json, render_text, Message, Rendered, Session, INVALID_JSON_MESSAGE};
pub use shape::{analyze, classify, Kind, PropertyRecord};
pub use temporal::{classify_temporal, Temporal};
