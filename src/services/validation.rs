use garde::Validate;

use crate::models::video::{FacePhoto, VideoRequest};

/// Validation failures surfaced verbatim to the client as 400s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Face photo must be an image file")]
    InvalidFileType,
}

/// Form fields as collected from the multipart body, before validation.
#[derive(Debug, Default)]
pub struct RawSubmission {
    pub face_photo: Option<FacePhoto>,
    pub spoken_text_topic: Option<String>,
    pub gender: Option<String>,
    pub scene_setting: Option<String>,
    pub character_style: Option<String>,
    pub famous_face_blend: Option<String>,
    pub email: Option<String>,
}

impl RawSubmission {
    /// Check the submission in the order the contract fixes:
    /// presence, then email format, then photo MIME type.
    pub fn into_request(self) -> Result<VideoRequest, SubmissionError> {
        let request = VideoRequest {
            face_photo: self.face_photo.ok_or(SubmissionError::MissingFields)?,
            spoken_text_topic: require(self.spoken_text_topic)?,
            gender: require(self.gender)?,
            scene_setting: require(self.scene_setting)?,
            character_style: require(self.character_style)?,
            famous_face_blend: require(self.famous_face_blend)?,
            email: require(self.email)?,
        };

        // Presence is already guaranteed above, so the only rule left to
        // trip here is the email pattern.
        request
            .validate()
            .map_err(|_| SubmissionError::InvalidEmail)?;

        if !request.face_photo.content_type.starts_with("image/") {
            return Err(SubmissionError::InvalidFileType);
        }

        Ok(request)
    }
}

fn require(field: Option<String>) -> Result<String, SubmissionError> {
    match field {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(SubmissionError::MissingFields),
    }
}
