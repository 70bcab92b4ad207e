use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::Image;

/// DTO for a single image with its public URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ImageDto {
    pub url: String,
    pub id: String,
    pub name: String,
    pub date: String,
}

impl ImageDto {
    pub fn new(image: Image, url: String) -> Self {
        Self {
            url,
            id: image.id().to_string(),
            name: image.name().to_string(),
            date: image.date().to_string(),
        }
    }
}

/// DTO for the image listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ListImagesResponse {
    pub images: Vec<ImageDto>,
}

/// DTO for upload request
///
/// `content_type` is the type the client declared for the file part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadImageRequest {
    pub name: String,
    pub content_type: Option<String>,
}

/// DTO for upload response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UploadImageResponse {
    pub url: String,
    pub id: String,
}

/// DTO for delete response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteImageResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_names_are_pascal_case() {
        let dto = ImageDto {
            url: "https://cdn.test/abcd.png".to_string(),
            id: "abcd".to_string(),
            name: "cat".to_string(),
            date: "Mon Jan  2 15:04:05 UTC 2006".to_string(),
        };
        let list = ListImagesResponse { images: vec![dto] };

        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            json!({
                "Images": [{
                    "Url": "https://cdn.test/abcd.png",
                    "Id": "abcd",
                    "Name": "cat",
                    "Date": "Mon Jan  2 15:04:05 UTC 2006"
                }]
            })
        );
    }

    #[test]
    fn test_empty_listing_serializes_as_array() {
        let list = ListImagesResponse { images: vec![] };

        assert_eq!(serde_json::to_value(&list).unwrap(), json!({ "Images": [] }));
    }
}
