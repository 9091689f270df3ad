// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("article id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-empty text value object. With `trim = true` surrounding whitespace is stripped.
macro_rules! text_value {
    ($name:ident, $label:literal, trim = $trim:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(DomainError::validation(concat!($label, " cannot be empty")));
                }
                if $trim {
                    Ok(Self(value.trim().to_string()))
                } else {
                    Ok(Self(value))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

text_value!(ArticleTitle, "title", trim = true);
text_value!(ArticleContent, "content", trim = false);
text_value!(ArticleExcerpt, "excerpt", trim = false);
text_value!(CommentText, "comment", trim = false);

/// Lowercase, dash-separated identifier used in article URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("slug cannot be empty"));
        }
        let url_safe = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !url_safe {
            return Err(DomainError::validation(format!(
                "slug '{value}' must contain only lowercase letters, digits and dashes"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

const DATA_IMAGE_PREFIX: &str = "data:image/";

/// An image embedded as a `data:image/...` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage(String);

impl CoverImage {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let invalid = || DomainError::validation("Invalid image format");

        let rest = value.strip_prefix(DATA_IMAGE_PREFIX).ok_or_else(invalid)?;
        let (header, payload) = rest.split_once(',').ok_or_else(invalid)?;

        let (media_subtype, is_base64) = match header.strip_suffix(";base64") {
            Some(subtype) => (subtype, true),
            None => (header, false),
        };
        let media_subtype = media_subtype.split(';').next().unwrap_or_default();
        let subtype_ok = !media_subtype.is_empty()
            && media_subtype
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !subtype_ok || payload.is_empty() {
            return Err(invalid());
        }

        if is_base64 && STANDARD.decode(payload.trim()).is_err() {
            return Err(invalid());
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Ordered list of trimmed, non-empty labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTags(Vec<String>);

impl ArticleTags {
    pub fn new(tags: impl IntoIterator<Item = String>) -> Self {
        Self(
            tags.into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }

    /// Parse a JSON-encoded list such as `["rust","web"]`.
    pub fn from_encoded(encoded: &str) -> DomainResult<Self> {
        if encoded.trim().is_empty() {
            return Ok(Self::default());
        }
        let tags: Vec<String> = serde_json::from_str(encoded).map_err(|_| {
            DomainError::validation("tags must be a JSON-encoded list of strings")
        })?;
        Ok(Self::new(tags))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_required() {
        assert_eq!(ArticleTitle::new("  Hello  ").unwrap().as_str(), "Hello");
        assert!(ArticleTitle::new("   ").is_err());
    }

    #[test]
    fn content_keeps_whitespace() {
        let content = ArticleContent::new("  body\n").unwrap();
        assert_eq!(content.as_str(), "  body\n");
    }

    #[test]
    fn slug_rejects_uppercase_and_spaces() {
        assert!(ArticleSlug::new("hello-world").is_ok());
        assert!(ArticleSlug::new("Hello-World").is_err());
        assert!(ArticleSlug::new("hello world").is_err());
        assert!(ArticleSlug::new("").is_err());
    }

    #[test]
    fn cover_image_accepts_base64_data_url() {
        let image = CoverImage::new("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert!(image.as_str().starts_with("data:image/png"));
        assert!(CoverImage::new("data:image/svg+xml,<svg></svg>").is_ok());
    }

    #[test]
    fn cover_image_rejects_other_encodings() {
        assert!(CoverImage::new("https://example.com/cat.png").is_err());
        assert!(CoverImage::new("data:text/plain;base64,aGk=").is_err());
        assert!(CoverImage::new("data:image/png;base64,@@not base64@@").is_err());
        assert!(CoverImage::new("data:image/;base64,aGk=").is_err());
        assert!(CoverImage::new("data:image/png").is_err());
    }

    #[test]
    fn tags_parse_from_json_and_drop_blanks() {
        let tags = ArticleTags::from_encoded(r#"[" rust ", "", "web"]"#).unwrap();
        assert_eq!(tags.as_slice(), ["rust".to_string(), "web".to_string()]);
        assert!(ArticleTags::from_encoded("rust,web").is_err());
        assert!(ArticleTags::from_encoded("").unwrap().as_slice().is_empty());
    }
}
