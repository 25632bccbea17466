//! Item gallery payload

use serde::{Deserialize, Serialize};

/// Item a gallery is scoped to: the clicked bar label and its category group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub item_name: String,
    pub top_category: String,
}

impl ItemRef {
    pub fn new(item_name: impl Into<String>, top_category: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            top_category: top_category.into(),
        }
    }

    /// Modal heading, e.g. `"Bag (Black) · Accessories"`
    pub fn heading(&self) -> String {
        format!("{} · {}", self.item_name, self.top_category)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub local_filename: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub likes_count: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub comments_count: i64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub caption: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub timestamp: String,
}

impl GalleryImage {
    /// Where the backend serves the downloaded image
    pub fn image_url(&self) -> String {
        format!("/images/{}", self.local_filename)
    }

    /// Uploader handle with a leading `@`
    pub fn handle(&self) -> String {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => format!("@{}", name),
            _ => "@unknown".to_string(),
        }
    }
}

/// `item-gallery` body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemGallery {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub item_name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub top_category: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<GalleryImage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Payload;
    use serde_json::json;

    #[test]
    fn test_image_url_and_handle() {
        let image = GalleryImage {
            local_filename: "abc123.jpg".to_string(),
            username: Some("linda.sza".to_string()),
            ..Default::default()
        };
        assert_eq!(image.image_url(), "/images/abc123.jpg");
        assert_eq!(image.handle(), "@linda.sza");

        let anonymous = GalleryImage::default();
        assert_eq!(anonymous.handle(), "@unknown");
    }

    #[test]
    fn test_item_heading() {
        let item = ItemRef::new("Bag (Black)", "Accessories");
        assert_eq!(item.heading(), "Bag (Black) · Accessories");
    }

    #[test]
    fn test_null_fields_keep_the_image() {
        let value = json!({
            "success": true,
            "item_name": "Bag (Black)",
            "count": 2,
            "images": [
                {"local_filename": "p1.jpg", "caption": null, "username": null,
                 "likes_count": null, "comments_count": 3, "timestamp": null},
                {"local_filename": "p2.jpg", "caption": "city walk", "likes_count": 40}
            ]
        });
        let gallery = Payload::<ItemGallery>::from_value(&value).ready().unwrap();
        assert_eq!(gallery.images.len(), 2);
        assert_eq!(gallery.images[0].caption, "");
        assert_eq!(gallery.images[0].likes_count, 0);
        assert_eq!(gallery.images[0].comments_count, 3);
        assert_eq!(gallery.images[0].handle(), "@unknown");
        assert_eq!(gallery.images[1].caption, "city walk");
    }
}
