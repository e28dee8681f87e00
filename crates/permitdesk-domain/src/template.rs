//! Template references - self-contained data-URI form templates

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed `data:<mime>;base64,<payload>` template reference
///
/// This is the only form in which PDF templates travel through the system:
/// the MIME type and the base64 payload in one string, no file paths or
/// storage handles. Parsing is syntactic; the payload is kept encoded and
/// never decoded here.
///
/// # Examples
///
/// ```
/// use permitdesk_domain::TemplateRef;
///
/// let template = TemplateRef::parse("data:application/pdf;base64,AAAA").unwrap();
/// assert_eq!(template.mime(), "application/pdf");
/// assert_eq!(template.decoded_len(), 3);
/// assert_eq!(template.to_string(), "data:application/pdf;base64,AAAA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TemplateRef {
    mime: String,
    data: String,
}

impl TemplateRef {
    /// Parse a data URI into a template reference
    ///
    /// Requires the `data:` prefix, the `;base64,` marker, a non-empty MIME
    /// type, and a non-empty standard (padded) base64 body.
    pub fn parse(input: &str) -> Result<Self, String> {
        let rest = input
            .strip_prefix("data:")
            .ok_or_else(|| "missing 'data:' prefix".to_string())?;

        let (mime, data) = rest
            .split_once(";base64,")
            .ok_or_else(|| "missing ';base64,' marker".to_string())?;

        if mime.is_empty() {
            return Err("empty MIME type".to_string());
        }
        if data.is_empty() {
            return Err("empty base64 body".to_string());
        }
        if !is_base64(data) {
            return Err("body is not valid base64".to_string());
        }

        Ok(Self {
            mime: mime.to_string(),
            data: data.to_string(),
        })
    }

    /// The MIME type (e.g. "application/pdf")
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// The base64 payload, still encoded
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Size of the decoded payload in bytes
    pub fn decoded_len(&self) -> usize {
        let padding = self
            .data
            .bytes()
            .rev()
            .take_while(|b| *b == b'=')
            .count();
        self.data.len() / 4 * 3 - padding
    }
}

/// Standard base64: length a multiple of four, alphabet characters only,
/// up to two `=` of trailing padding.
fn is_base64(s: &str) -> bool {
    if s.len() % 4 != 0 {
        return false;
    }
    let bytes = s.as_bytes();
    let padding = bytes.iter().rev().take_while(|b| **b == b'=').count();
    if padding > 2 {
        return false;
    }
    bytes[..bytes.len() - padding]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'+' || *b == b'/')
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{};base64,{}", self.mime, self.data)
    }
}

impl TryFrom<String> for TemplateRef {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TemplateRef> for String {
    fn from(template: TemplateRef) -> Self {
        template.to_string()
    }
}

/// A named entry in the template library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfTemplate {
    /// Library identifier (e.g. "tpl_001")
    pub id: String,

    /// Display name
    pub name: String,

    /// One-line description
    pub description: String,

    /// The template content as a data URI
    pub data_uri: String,
}

impl PdfTemplate {
    /// Parse the stored data URI into a template reference
    pub fn template_ref(&self) -> Result<TemplateRef, String> {
        TemplateRef::parse(&self.data_uri)
    }
}
