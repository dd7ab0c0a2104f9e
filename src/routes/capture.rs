use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use pantrycam_capture::{CaptureView, Image};

use crate::routes::AppState;
use crate::template::Template;

#[derive(askama::Template)]
#[template(path = "capture.html")]
pub struct CaptureTemplate {
    pub file_name: Option<String>,
    pub preview: Option<String>,
    pub ingredients: Vec<String>,
    pub planning_href: String,
}

impl CaptureTemplate {
    fn from_view(view: &CaptureView) -> pantrycam_shared::Result<Self> {
        Ok(Self {
            file_name: view.image().map(|image| image.file_name.to_owned()),
            preview: view.preview(),
            ingredients: view.ingredients().to_vec(),
            planning_href: view.planning_href()?,
        })
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    let page = crate::try_page_response!(sync: CaptureTemplate::from_view(&CaptureView::new()), template);

    template.render(page)
}

#[tracing::instrument(skip_all)]
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    let mut view = CaptureView::new();

    let status = match read_image(multipart).await {
        Ok(Some(image)) => {
            view.select_image(image);

            view.analyze(app.analyzer.clone()).await.ok();

            StatusCode::OK
        }
        Ok(_) => StatusCode::OK,
        Err(err) => {
            tracing::error!(err = %err, "failed to read uploaded image");

            StatusCode::BAD_REQUEST
        }
    };

    let page = crate::try_page_response!(sync: CaptureTemplate::from_view(&view), template);

    template.render_status(status, page)
}

/// Reads the `image` field. A missing or empty file yields `None`.
async fn read_image(mut multipart: Multipart) -> anyhow::Result<Option<Image>> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let image = Image::new(file_name, content_type, field.bytes().await?.to_vec());

        if image.is_empty() {
            return Ok(None);
        }

        tracing::info!(
            file = %image.file_name,
            content_type = %image.content_type,
            bytes = image.data.len(),
            "image selected"
        );

        return Ok(Some(image));
    }

    Ok(None)
}
