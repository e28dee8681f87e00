//! Built-in PDF template library.
//!
//! A small fixed set of county form templates, embedded as data URIs so the
//! binary is self-contained. Larger deployments would source these from the
//! office's document store instead.

use permitdesk_domain::PdfTemplate;

const STANDARD_APPLICATION_URI: &str = "data:application/pdf;base64,JVBERi0xLjQKMSAwIG9iajw8L1R5cGUvQ2F0YWxvZy9QYWdlcyAyIDAgUj4+ZW5kb2JqCjIgMCBvYmo8PC9UeXBlL1BhZ2VzL0tpZHNbMyAwIFJdL0NvdW50IDE+PmVuZG9iagozIDAgb2JqPDwvVHlwZS9QYWdlL1BhcmVudCAyIDAgUi9NZWRpYUJveFswIDAgNjEyIDc5Ml0+PmVuZG9iagp0cmFpbGVyPDwvUm9vdCAxIDAgUi9TaXplIDQ+PgolJUVPRgo=";

const NOTICE_OF_COMMENCEMENT_URI: &str = "data:application/pdf;base64,JVBERi0xLjQKMSAwIG9iajw8L1R5cGUvQ2F0YWxvZy9QYWdlcyAyIDAgUj4+ZW5kb2JqCjIgMCBvYmo8PC9UeXBlL1BhZ2VzL0tpZHNbMyAwIFJdL0NvdW50IDE+PmVuZG9iagozIDAgb2JqPDwvVHlwZS9QYWdlL1BhcmVudCAyIDAgUi9NZWRpYUJveFswIDAgNTk1IDg0Ml0+PmVuZG9iagolIE5vdGljZSBvZiBDb21tZW5jZW1lbnQKdHJhaWxlcjw8L1Jvb3QgMSAwIFIvU2l6ZSA0Pj4KJSVFT0YK";

/// The built-in template library
pub fn builtin() -> Vec<PdfTemplate> {
    vec![
        PdfTemplate {
            id: "tpl_001".to_string(),
            name: "Standard Building Permit Application".to_string(),
            description: "Generic permit application form for most counties.".to_string(),
            data_uri: STANDARD_APPLICATION_URI.to_string(),
        },
        PdfTemplate {
            id: "tpl_002".to_string(),
            name: "Notice of Commencement".to_string(),
            description: "Official document to be filed before work begins.".to_string(),
            data_uri: NOTICE_OF_COMMENCEMENT_URI.to_string(),
        },
    ]
}

/// Look up a template by its library id
pub fn find(id: &str) -> Option<PdfTemplate> {
    builtin().into_iter().find(|template| template.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_parse() {
        for template in builtin() {
            let reference = template.template_ref().unwrap();
            assert_eq!(reference.mime(), "application/pdf");
            assert!(reference.decoded_len() > 0);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("tpl_001").unwrap().id, "tpl_001");
        assert!(find("tpl_999").is_none());
    }
}
