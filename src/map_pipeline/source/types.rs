//! Source image data types

/// Raw source image bytes plus the content type declared by the origin,
/// if any. Lives only for the duration of one request; the decoder sniffs
/// the actual format from the bytes rather than trusting the declaration.
#[derive(Debug, Clone)]
pub struct SourceImage {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

impl SourceImage {
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
