//! Wire shapes of the image provider

use serde::Deserialize;
use wordlens_common::ImageResult;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
pub struct Photo {
    pub src: PhotoSrc,
    /// Absent or empty for photos the provider never captioned
    #[serde(default)]
    pub alt: Option<String>,
    pub photographer: String,
    pub photographer_url: String,
}

#[derive(Debug, Deserialize)]
pub struct PhotoSrc {
    pub medium: String,
    pub original: String,
}

impl Photo {
    /// Shape one provider item into a display record, substituting the
    /// search query when the provider supplies no caption.
    pub fn into_result(self, query: &str) -> ImageResult {
        let alt = match self.alt {
            Some(alt) if !alt.is_empty() => alt,
            _ => query.to_string(),
        };
        ImageResult {
            thumb: self.src.medium,
            full: self.src.original,
            alt,
            photographer: self.photographer,
            profile: self.photographer_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(alt: Option<&str>) -> Photo {
        Photo {
            src: PhotoSrc {
                medium: "https://images.pexels.com/1-medium.jpg".to_string(),
                original: "https://images.pexels.com/1.jpg".to_string(),
            },
            alt: alt.map(str::to_string),
            photographer: "Ana Luz".to_string(),
            photographer_url: "https://www.pexels.com/@analuz".to_string(),
        }
    }

    #[test]
    fn test_alt_preserved_when_present() {
        let result = photo(Some("A dog on a beach")).into_result("hello");
        assert_eq!(result.alt, "A dog on a beach");
        assert_eq!(result.thumb, "https://images.pexels.com/1-medium.jpg");
        assert_eq!(result.full, "https://images.pexels.com/1.jpg");
        assert_eq!(result.profile, "https://www.pexels.com/@analuz");
    }

    #[test]
    fn test_alt_falls_back_to_query() {
        assert_eq!(photo(None).into_result("hello").alt, "hello");
        // An empty caption counts as missing, not as a caption
        assert_eq!(photo(Some("")).into_result("hello").alt, "hello");
    }

    #[test]
    fn test_parse_search_response_without_alt() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"photos":[{"src":{"medium":"m.jpg","original":"o.jpg"},
                "photographer":"Ana Luz","photographer_url":"p"}],
                "page":1,"per_page":12,"total_results":1}"#,
        )
        .unwrap();
        assert_eq!(response.photos.len(), 1);
        assert!(response.photos[0].alt.is_none());
    }
}
