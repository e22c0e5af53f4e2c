//! HTTP handlers for generation endpoints.
//!
//! These handlers connect Axum routes to the generation command handler.

use axum::extract::multipart::{Field, MultipartError, MultipartRejection};
use axum::extract::{Json, Multipart, State};
use axum::http::StatusCode;
use axum_extra::extract::cookie::SignedCookieJar;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::OptionalIdentity;
use crate::adapters::http::state::AppState;
use crate::application::GenerateImageCommand;
use crate::domain::generation::{GenerationResult, ImageUpload, UploadError, UploadPolicy};

use super::dto::{UploadPolicyResponse, FILE_FIELD, PROMPT_FIELD, STYLE_FIELD};

/// Raw multipart fields before validation.
#[derive(Debug, Default)]
pub(crate) struct GenerateForm {
    pub image: Option<ImageUpload>,
    pub style: Option<String>,
    pub prompt: Option<String>,
}

/// Reads the generate form. Unknown fields are skipped; the first `file` wins.
pub(crate) async fn read_generate_form(
    mut multipart: Multipart,
    policy: &UploadPolicy,
) -> Result<GenerateForm, UploadError> {
    let mut form = GenerateForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(transport_error(e, policy, None)),
        };

        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) if form.image.is_none() => {
                let mime_type = field.content_type().unwrap_or_default().to_string();
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| transport_error(e, policy, Some(&mime_type)))?;

                let mut upload = ImageUpload::new(bytes.to_vec(), mime_type);
                if let Some(name) = file_name {
                    upload = upload.with_file_name(name);
                }
                form.image = Some(upload);
            }
            Some(STYLE_FIELD) => {
                form.style = Some(field.text().await.map_err(|e| transport_error(e, policy, None))?);
            }
            Some(PROMPT_FIELD) => {
                form.prompt = Some(read_prompt(field, policy, form.image.as_ref()).await?);
            }
            _ => {}
        }
    }

    Ok(form)
}

/// Reads the prompt override chunk by chunk. A prompt that runs into the
/// body limit is reported as too long once the image checks pass.
async fn read_prompt(
    mut field: Field<'_>,
    policy: &UploadPolicy,
    image: Option<&ImageUpload>,
) -> Result<String, UploadError> {
    let mut bytes = Vec::new();
    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => bytes.extend_from_slice(&chunk),
            Ok(None) => break,
            Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                let received = String::from_utf8_lossy(&bytes).chars().count();
                return Err(policy.reject_oversized_prompt(image, received));
            }
            Err(e) => return Err(UploadError::MalformedForm(e.body_text())),
        }
    }

    String::from_utf8(bytes).map_err(|e| UploadError::MalformedForm(e.to_string()))
}

/// Maps a multipart stream failure. A body over the limit is a size error
/// unless the file's MIME type already disqualifies it.
fn transport_error(err: MultipartError, policy: &UploadPolicy, mime_type: Option<&str>) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return match mime_type {
            Some(mime_type) => policy.reject_oversized(mime_type),
            None => UploadError::FileTooLarge {
                max_bytes: policy.max_image_bytes(),
            },
        };
    }
    UploadError::MalformedForm(err.body_text())
}

/// POST /api/generate - Stylize an uploaded photo
///
/// Validation runs before the entitlement check, so a bad upload is a 400
/// even for callers who could not generate anyway. The trial cookie is set
/// only on a successful response.
pub async fn generate(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    jar: SignedCookieJar,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(SignedCookieJar, Json<GenerationResult>), ApiError> {
    let multipart = multipart.map_err(|e| UploadError::MalformedForm(e.body_text()))?;
    let form = read_generate_form(multipart, &state.upload_policy).await?;

    let request = state
        .upload_policy
        .validate(form.image, form.style.as_deref(), form.prompt)?;

    let entitlement = state.cookies.state(&jar, identity.is_some());
    tracing::info!(
        style = %request.style(),
        image_bytes = request.image().len(),
        logged_in = entitlement.logged_in,
        subscription_active = entitlement.subscription_active,
        trial_used = entitlement.trial_used,
        "Generation requested"
    );

    let result = state
        .generate_image_handler()
        .handle(GenerateImageCommand {
            request,
            entitlement,
        })
        .await?;

    let jar = if result.mark_trial_used {
        state.cookies.mark_trial_used(jar)
    } else {
        jar
    };

    Ok((jar, Json(result.generation)))
}

/// GET /api/upload-policy - Upload limits for client-side pre-checks
pub async fn get_upload_policy(State(state): State<AppState>) -> Json<UploadPolicyResponse> {
    Json(UploadPolicyResponse::from(state.upload_policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;

    const BOUNDARY: &str = "test-boundary";

    enum Part<'a> {
        File { mime: &'a str, bytes: &'a [u8] },
        Text { name: &'a str, value: &'a str },
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
            match part {
                Part::File { mime, bytes } => {
                    body.extend_from_slice(
                        b"Content-Disposition: form-data; name=\"file\"; filename=\"photo\"\r\n",
                    );
                    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", mime).as_bytes());
                    body.extend_from_slice(bytes);
                }
                Part::Text { name, value } => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                            .as_bytes(),
                    );
                    body.extend_from_slice(value.as_bytes());
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    async fn multipart(parts: &[Part<'_>]) -> Multipart {
        let request = Request::builder()
            .method("POST")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap();
        Multipart::from_request(request, &()).await.unwrap()
    }

    #[tokio::test]
    async fn reads_all_fields() {
        let form = read_generate_form(
            multipart(&[
                Part::File {
                    mime: "image/png",
                    bytes: b"\x89PNG",
                },
                Part::Text {
                    name: "style",
                    value: "ghibli-soft",
                },
                Part::Text {
                    name: "prompt",
                    value: "a quiet harbor",
                },
            ])
            .await,
            &UploadPolicy::default(),
        )
        .await
        .unwrap();

        let image = form.image.unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, b"\x89PNG");
        assert_eq!(image.file_name.as_deref(), Some("photo"));
        assert_eq!(form.style.as_deref(), Some("ghibli-soft"));
        assert_eq!(form.prompt.as_deref(), Some("a quiet harbor"));
    }

    #[tokio::test]
    async fn missing_file_leaves_image_empty() {
        let form = read_generate_form(
            multipart(&[Part::Text {
                name: "style",
                value: "ghibli-filmic",
            }])
            .await,
            &UploadPolicy::default(),
        )
        .await
        .unwrap();

        assert!(form.image.is_none());
    }

    #[tokio::test]
    async fn unknown_fields_are_skipped() {
        let form = read_generate_form(
            multipart(&[
                Part::Text {
                    name: "extra",
                    value: "ignored",
                },
                Part::File {
                    mime: "image/jpeg",
                    bytes: b"jpeg",
                },
            ])
            .await,
            &UploadPolicy::default(),
        )
        .await
        .unwrap();

        assert!(form.image.is_some());
        assert!(form.style.is_none());
    }
}
