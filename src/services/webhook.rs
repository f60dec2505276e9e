use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::models::video::VideoRequest;

/// Client for the external n8n workflow webhook.
pub struct WebhookClient {
    http: Client,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }

    /// Re-emit the submission as a fresh multipart body and POST it to the
    /// destination. No explicit content type header is set; the client
    /// computes the multipart boundary itself.
    ///
    /// A 2xx reply whose body is not JSON yields `Ok(None)`; the caller
    /// treats the passthrough payload as null rather than failing the
    /// request.
    pub async fn forward(
        &self,
        url: &str,
        request: VideoRequest,
    ) -> Result<Option<Value>, WebhookError> {
        let VideoRequest {
            face_photo,
            spoken_text_topic,
            gender,
            scene_setting,
            character_style,
            famous_face_blend,
            email,
        } = request;

        let mut photo_part = Part::bytes(face_photo.data).file_name(face_photo.file_name);
        if !face_photo.content_type.is_empty() {
            photo_part = photo_part.mime_str(&face_photo.content_type)?;
        }

        let form = Form::new()
            .part("Face_Photo", photo_part)
            .text("Spoken_Text_Topic", spoken_text_topic)
            .text("Gender", gender)
            .text("Scene_Setting", scene_setting)
            .text("Character_Style", character_style)
            .text("Famous_Face_Blend", famous_face_blend)
            .text("Email", email);

        let response = self.http.post(url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WebhookError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body).ok())
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("webhook returned {status}")]
    Status { status: StatusCode, body: String },
}
