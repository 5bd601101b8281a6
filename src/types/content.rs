//! Schema-typed content values exchanged with evaluation targets.
//!
//! Inputs and outputs cross the adapter boundary as maps from slot key to
//! [`Content`], so the rest of the pipeline never sees source-specific
//! formats. A `Content` is a tagged value: the type/format discriminants say
//! what the payload is, and `text` carries it when present.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::usage_metrics::EvalTargetUsage;

// ---------------------------------------------------------------------------
// Content discriminants
// ---------------------------------------------------------------------------

/// The kind of payload a [`Content`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A textual payload held in [`Content::text`].
    Text,
}

/// Sub-format of a textual payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    /// Free-form text.
    Plain,
    /// The text is a JSON document.
    Json,
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// A tagged content value for one I/O slot.
///
/// For `ContentType::Text` the value is usable only when `text` is present;
/// an absent `text` means "no data for this slot".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub content_type: ContentType,
    pub format: ContentFormat,
    pub text: Option<String>,
}

impl Content {
    /// Plain-text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Text,
            format: ContentFormat::Plain,
            text: Some(text.into()),
        }
    }

    /// Text content whose payload is a JSON document.
    pub fn json_text(text: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Text,
            format: ContentFormat::Json,
            text: Some(text.into()),
        }
    }

    /// The textual payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Input / output field maps
// ---------------------------------------------------------------------------

/// Caller-supplied input for one execution, keyed by slot name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalTargetInputData {
    pub input_fields: HashMap<String, Content>,
}

impl EvalTargetInputData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build input data from a single slot.
    pub fn from_field(key: impl Into<String>, content: Content) -> Self {
        let mut input_fields = HashMap::new();
        input_fields.insert(key.into(), content);
        Self { input_fields }
    }

    /// The text payload of a slot, if the slot exists and carries text.
    pub fn field_text(&self, key: &str) -> Option<&str> {
        self.input_fields.get(key).and_then(Content::as_text)
    }
}

/// Normalized output of one execution: slot contents plus reported usage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvalTargetOutputData {
    pub output_fields: HashMap<String, Content>,
    pub usage: EvalTargetUsage,
}

impl EvalTargetOutputData {
    /// Output data holding a single slot and zero-valued usage.
    pub fn from_field(key: impl Into<String>, content: Content) -> Self {
        let mut output_fields = HashMap::new();
        output_fields.insert(key.into(), content);
        Self {
            output_fields,
            usage: EvalTargetUsage::default(),
        }
    }

    /// The text payload of an output slot, if present.
    pub fn field_text(&self, key: &str) -> Option<&str> {
        self.output_fields.get(key).and_then(Content::as_text)
    }
}
