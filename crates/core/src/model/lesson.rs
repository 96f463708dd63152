use serde::Deserialize;

use crate::error::Error;

/// A single mentor-led video lesson as delivered by the lessons endpoint.
///
/// The title doubles as the lookup key for navigation. Uniqueness within a
/// fetch is assumed by callers, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    #[serde(rename = "mentor_name")]
    mentor: String,
    #[serde(rename = "lesson_title")]
    title: String,
    #[serde(rename = "video_thumbnail_url")]
    thumbnail_url: String,
    #[serde(rename = "lesson_image_url")]
    image_url: String,
    video_url: String,
}

impl Lesson {
    #[must_use]
    pub fn new(
        mentor: impl Into<String>,
        title: impl Into<String>,
        thumbnail_url: impl Into<String>,
        image_url: impl Into<String>,
        video_url: impl Into<String>,
    ) -> Self {
        Self {
            mentor: mentor.into(),
            title: title.into(),
            thumbnail_url: thumbnail_url.into(),
            image_url: image_url.into(),
            video_url: video_url.into(),
        }
    }

    #[must_use]
    pub fn mentor(&self) -> &str {
        &self.mentor
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn video_url(&self) -> &str {
        &self.video_url
    }
}

/// Wire envelope returned by the lessons endpoint: `{ "lessons": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LessonsResponse {
    pub lessons: Vec<Lesson>,
}

impl LessonsResponse {
    /// Decode the endpoint body.
    ///
    /// # Errors
    ///
    /// Returns `Error::Decode` when the body is not a valid lessons document.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(body)?)
    }
}
