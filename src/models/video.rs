use garde::Validate;
use serde::{Deserialize, Serialize};

/// Uploaded face photo as received from the multipart form.
#[derive(Debug, Clone)]
pub struct FacePhoto {
    pub file_name: String,
    /// Declared content type; empty when the part carried none.
    pub content_type: String,
    pub data: Vec<u8>,
}

/// A video creation request built from the form submission.
///
/// Field names mirror the multipart field names the n8n workflow expects
/// (`Face_Photo`, `Spoken_Text_Topic`, and so on).
#[derive(Debug, Clone, Validate)]
pub struct VideoRequest {
    #[garde(skip)]
    pub face_photo: FacePhoto,

    #[garde(length(min = 1))]
    pub spoken_text_topic: String,

    /// Male/Female/Other as offered by the form select; forwarded verbatim.
    #[garde(length(min = 1))]
    pub gender: String,

    #[garde(length(min = 1))]
    pub scene_setting: String,

    #[garde(length(min = 1))]
    pub character_style: String,

    #[garde(length(min = 1))]
    pub famous_face_blend: String,

    #[garde(pattern(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"))]
    pub email: String,
}

/// Success payload returned to the browser.
#[derive(Debug, Serialize)]
pub struct CreateVideoResponse {
    pub success: bool,
    pub message: String,
    /// Raw webhook JSON, `null` when the webhook body was not JSON.
    pub data: Option<serde_json::Value>,
    #[serde(rename = "imageGenerated")]
    pub image_generated: Option<String>,
}

/// Error payload for every non-2xx response from the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// The subset of the webhook reply this service understands.
#[derive(Debug, Deserialize)]
pub struct WebhookReply {
    #[serde(rename = "image-generated")]
    pub image_generated: Option<String>,
}

impl WebhookReply {
    /// Pull the optional generated preview out of an opaque webhook payload.
    pub fn generated_image(data: &serde_json::Value) -> Option<String> {
        serde_json::from_value::<WebhookReply>(data.clone())
            .ok()
            .and_then(|reply| reply.image_generated)
    }
}
