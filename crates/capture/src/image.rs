use base64::{Engine, engine::general_purpose::STANDARD};

/// A locally selected picture. Its content is never inspected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Image {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Image {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inline `data:` URL used to preview the picture.
    pub fn data_url(&self) -> String {
        let content_type = if self.content_type.is_empty() {
            "application/octet-stream"
        } else {
            self.content_type.as_str()
        };

        format!("data:{content_type};base64,{}", STANDARD.encode(&self.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_embeds_content_type_and_payload() {
        let image = Image::new("food.png", "image/png", b"abc".to_vec());
        assert_eq!(image.data_url(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn empty_upload_has_no_data() {
        assert!(Image::new("", "", Vec::new()).is_empty());
        assert!(!Image::new("food.png", "image/png", b"abc".to_vec()).is_empty());
    }

    #[test]
    fn data_url_falls_back_to_octet_stream() {
        let image = Image::new("food", "", b"abc".to_vec());
        assert!(image.data_url().starts_with("data:application/octet-stream;base64,"));
    }
}
