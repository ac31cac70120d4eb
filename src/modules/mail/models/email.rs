use serde::Serialize;

const PDF_CONTENT_TYPE: &str = "application/pdf";
const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// Binary file attached to an outgoing email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

impl EmailAttachment {
    /// Attachment whose MIME type is picked from the file extension
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        let filename = filename.into();
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        let content_type = match extension.as_str() {
            "pdf" => PDF_CONTENT_TYPE,
            "xlsx" => XLSX_CONTENT_TYPE,
            _ => BINARY_CONTENT_TYPE,
        };

        Self {
            filename,
            content,
            content_type: content_type.to_string(),
        }
    }
}

/// An outgoing email with an HTML and/or plain-text body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
    pub attachments: Vec<EmailAttachment>,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            ..Default::default()
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attachment(mut self, attachment: EmailAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }
}

/// Facts listed in the body of a sales export email
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportEmailDetails {
    pub total_records: u64,
    /// Human-readable filter summary; empty when nothing was filtered
    pub filters: String,
    pub export_date: String,
}
