use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::Engine;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::models::video::{CreateVideoResponse, ErrorResponse, FacePhoto, WebhookReply};
use crate::services::validation::{RawSubmission, SubmissionError};
use crate::services::webhook::WebhookError;

/// POST /api/create-video — validate the form submission and relay it to
/// the n8n workflow webhook.
///
/// Stateless single pass: validate, forward, translate the response.
/// Nothing is retried.
pub async fn create_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CreateVideoResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    metrics::counter!("video_requests_total").increment(1);

    let submission = read_submission(multipart).await.map_err(|e| {
        tracing::error!(%request_id, error = %e, "failed to read multipart submission");
        ApiError::Internal
    })?;

    let request = submission.into_request()?;

    let Some(url) = state.webhook_url.as_deref() else {
        tracing::error!(%request_id, "submission rejected: no n8n webhook URL configured");
        return Err(ApiError::NotConfigured);
    };

    tracing::info!(%request_id, email = %request.email, "forwarding video request to n8n");

    let started = std::time::Instant::now();
    let data = state.webhook.forward(url, request).await.map_err(|e| {
        match e {
            WebhookError::Status { status, body } => {
                tracing::error!(%request_id, %status, %body, "n8n webhook returned an error");
            }
            WebhookError::Http(e) => {
                tracing::error!(%request_id, error = %e, "n8n webhook request failed");
            }
        }
        ApiError::WebhookFailed
    })?;
    metrics::histogram!("webhook_forward_seconds").record(started.elapsed().as_secs_f64());

    let image_generated = data.as_ref().and_then(WebhookReply::generated_image);
    if let Some(preview) = &image_generated {
        match base64::engine::general_purpose::STANDARD.decode(preview) {
            Ok(bytes) => {
                tracing::info!(%request_id, preview_bytes = bytes.len(), "webhook returned a generated preview");
            }
            Err(_) => {
                tracing::warn!(%request_id, "generated preview is not valid base64, passing it through unchanged");
            }
        }
    }

    metrics::counter!("video_requests_completed").increment(1);

    Ok(Json(CreateVideoResponse {
        success: true,
        message: "Video creation request submitted successfully".to_string(),
        data,
        image_generated,
    }))
}

/// OPTIONS /api/create-video — CORS preflight.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
    )
}

/// Collect the named form fields from the multipart body. Unknown fields are
/// ignored; presence is checked afterwards so the validation order stays
/// fixed.
async fn read_submission(mut multipart: Multipart) -> Result<RawSubmission, MultipartError> {
    let mut submission = RawSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "Face_Photo" => {
                let file_name = field.file_name().unwrap_or("face-photo").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = field.bytes().await?.to_vec();
                submission.face_photo = Some(FacePhoto {
                    file_name,
                    content_type,
                    data,
                });
            }
            "Spoken_Text_Topic" => submission.spoken_text_topic = Some(field.text().await?),
            "Gender" => submission.gender = Some(field.text().await?),
            "Scene_Setting" => submission.scene_setting = Some(field.text().await?),
            "Character_Style" => submission.character_style = Some(field.text().await?),
            "Famous_Face_Blend" => submission.famous_face_blend = Some(field.text().await?),
            "Email" => submission.email = Some(field.text().await?),
            _ => {}
        }
    }

    Ok(submission)
}

/// Errors surfaced by the submission proxy, rendered as the `{"error": ...}`
/// JSON contract. Upstream detail is logged where the failure happens and
/// never echoed back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] SubmissionError),

    #[error("N8N webhook URL not configured")]
    NotConfigured,

    #[error("Failed to process video creation request")]
    WebhookFailed,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::NotConfigured | ApiError::WebhookFailed | ApiError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        metrics::counter!("video_requests_failed").increment(1);

        let status = self.status();
        if status == StatusCode::BAD_REQUEST {
            tracing::warn!(error = %self, "rejecting submission");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
