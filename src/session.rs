//! Explicit message passing between an input surface and the renderer.
//!
//! One `InputChanged` message produces one [`Rendered`] value carrying both
//! blocks. There is no subscription and no feedback path: the caller decides
//! what to do with the output.
use serde_json::Value;
use tracing::warn;

use crate::config::RenderConfig;
use crate::declarations::render;
use crate::error::{Error, Result};

/// Shown in place of each block when the input text is not valid JSON.
pub const INVALID_JSON_MESSAGE: &str = "Invalid Json String";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    InputChanged(String),
    Rename { class_name: String, interface_name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// pretty-printed input, `None` when the text did not parse
    pub formatted: Option<String>,
    pub class_block: String,
    pub interface_block: String,
}

impl Rendered {
    fn message(formatted: Option<String>, text: &str) -> Self {
        Self {
            formatted,
            class_block: text.to_owned(),
            interface_block: text.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    config: RenderConfig,
    last_input: Option<String>,
}

impl Session {
    pub fn new(config: RenderConfig) -> Self {
        Self { config, last_input: None }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Copy of this session with new placeholder names.
    pub fn renamed(&self, class_name: impl Into<String>, interface_name: impl Into<String>) -> Self {
        Self {
            config: self.config.clone()
                .with_class_name(class_name)
                .with_interface_name(interface_name),
            last_input: self.last_input.clone(),
        }
    }

    /// Handle one message. A rename re-renders the last input under the new
    /// names; with no input yet it yields empty blocks.
    pub fn handle(&mut self, msg: Message) -> Rendered {
        match msg {
            Message::InputChanged(text) => {
                let out = render_text(&text, &self.config);
                self.last_input = Some(text);
                out
            }
            Message::Rename { class_name, interface_name } => {
                *self = self.renamed(class_name, interface_name);
                match &self.last_input {
                    Some(text) => render_text(text, &self.config),
                    None => Rendered::message(None, ""),
                }
            }
        }
    }
}

/// Parse, pretty-print and render. Never fails: failures become the text of
/// both blocks.
pub fn render_text(text: &str, cfg: &RenderConfig) -> Rendered {
    let value = match serde_json::from_str::<Value>(text) {
        Ok(v) => v,
        Err(error) => {
            warn!(%error, "input is not valid JSON");
            return Rendered::message(None, INVALID_JSON_MESSAGE);
        }
    };
    let formatted = pretty(&value).ok();
    match render(&value, cfg) {
        Ok(decls) => Rendered {
            formatted,
            class_block: decls.class_block,
            interface_block: decls.interface_block,
        },
        Err(error) => {
            warn!(%error, "cannot render input");
            Rendered::message(formatted, &error.to_string())
        }
    }
}

/// Two-space pretty-printing; key order is preserved.
pub fn format_json(text: &str) -> Result<String> {
    let value = serde_json::from_str::<Value>(text)?;
    pretty(&value)
}

fn pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_text_shows_fixed_message() {
        let out = render_text("{not json", &RenderConfig::default());
        assert_eq!(out.class_block, INVALID_JSON_MESSAGE);
        assert_eq!(out.interface_block, INVALID_JSON_MESSAGE);
        assert_eq!(out.formatted, None);
    }

    #[test]
    fn top_level_array_reports_malformed_input() {
        let out = render_text("[1, 2]", &RenderConfig::default());
        assert_eq!(out.class_block, "expected a JSON object at the top level, found array");
        assert_eq!(out.formatted.as_deref(), Some("[\n  1,\n  2\n]"));
    }

    #[test]
    fn input_changed_renders_and_formats() {
        let mut session = Session::default();
        let out = session.handle(Message::InputChanged(r#"{"b":1,"a":"x"}"#.into()));
        assert_eq!(out.formatted.as_deref(), Some("{\n  \"b\": 1,\n  \"a\": \"x\"\n}"));
        assert!(out.class_block.contains("public int B { get; set; }"));
        assert!(out.interface_block.contains("  a: string;"));
    }

    #[test]
    fn repeated_input_is_idempotent() {
        let mut session = Session::default();
        let text = r#"{"id": 1, "tags": ["a"], "when": "2024-01-15T10:30:00"}"#;
        let first = session.handle(Message::InputChanged(text.into()));
        let second = session.handle(Message::InputChanged(text.into()));
        assert_eq!(first, second);
    }

    #[test]
    fn rename_rerenders_last_input() {
        let mut session = Session::default();
        session.handle(Message::InputChanged(r#"{"id": 1}"#.into()));
        let out = session.handle(Message::Rename {
            class_name: "Order".into(),
            interface_name: "IOrder".into(),
        });
        assert!(out.class_block.starts_with("public class Order {"));
        assert!(out.interface_block.starts_with("interface IOrder {"));
        assert_eq!(session.config().class_name, "Order");
    }

    #[test]
    fn rename_before_input_is_empty() {
        let mut session = Session::default();
        let out = session.handle(Message::Rename {
            class_name: "A".into(),
            interface_name: "B".into(),
        });
        assert_eq!(out.class_block, "");
    }

    #[test]
    fn renamed_leaves_original_untouched() {
        let session = Session::default();
        let other = session.renamed("X", "Y");
        assert_eq!(session.config().class_name, "ClassName");
        assert_eq!(other.config().interface_name, "Y");
    }

    #[test]
    fn format_json_rejects_garbage() {
        assert!(matches!(format_json("nope"), Err(Error::InvalidJson { .. })));
        assert_eq!(format_json(" {\"a\":[]} ").unwrap(), "{\n  \"a\": []\n}");
    }
}
