//! Format sniffing for FamilyMenu responses.
//!
//! The endpoint is asked for JSON but often answers with XML. The body is
//! tried as JSON first, then as XML, in that order.

use crate::error::{MenuError, Result};
use crate::extract;
use crate::types::{ExtractOptions, MenuItem};
use serde_json::Value;
use tracing::debug;

/// A response body that parsed as one of the supported shapes.
///
/// The XML variant borrows from the raw body, so the caller keeps the raw
/// text alive (it is also dumped to disk for diagnosis).
#[derive(Debug)]
pub enum MenuDocument<'a> {
    Json(Value),
    Xml(roxmltree::Document<'a>),
}

impl<'a> MenuDocument<'a> {
    /// Sniff the body: a non-empty JSON object wins, then any well-formed XML.
    pub fn sniff(raw: &'a str) -> Result<Self> {
        let json_reason = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) if !map.is_empty() => {
                debug!("Response parsed as JSON object with {} keys", map.len());
                return Ok(MenuDocument::Json(Value::Object(map)));
            }
            Ok(_) => "not a non-empty JSON object".to_string(),
            Err(e) => e.to_string(),
        };

        match roxmltree::Document::parse(raw) {
            Ok(doc) => {
                debug!(
                    "Response parsed as XML with root <{}>",
                    doc.root_element().tag_name().name()
                );
                Ok(MenuDocument::Xml(doc))
            }
            Err(e) => Err(MenuError::UnrecognizedFormat {
                json: json_reason,
                xml: e.to_string(),
            }),
        }
    }

    /// Short label for logs and diagnostics.
    pub fn format_name(&self) -> &'static str {
        match self {
            MenuDocument::Json(_) => "json",
            MenuDocument::Xml(_) => "xml",
        }
    }

    /// Pull every (date, recipe) pair for the requested meal session.
    pub fn extract(&self, opts: &ExtractOptions) -> Vec<MenuItem> {
        match self {
            MenuDocument::Json(value) => extract::json::extract(value, opts),
            MenuDocument::Xml(doc) => extract::xml::extract(doc, opts),
        }
    }
}
