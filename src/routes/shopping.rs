use axum::{
    extract::{Path, Query, rejection::QueryRejection},
    response::IntoResponse,
};
use axum_extra::extract::Form;
use pantrycam_shopping::{ShoppingItem, ShoppingView};
use serde::Deserialize;

use crate::template::Template;

#[derive(Debug, Deserialize)]
pub struct ShoppingQuery {
    shopping: Option<String>,
}

/// Posted by the page itself: the list it was rendered from and the
/// positions currently checked.
#[derive(Debug, Deserialize)]
pub struct ShoppingForm {
    shopping: Option<String>,
    #[serde(default)]
    checked: Vec<usize>,
}

#[derive(askama::Template)]
#[template(path = "shopping.html")]
pub struct ShoppingTemplate {
    pub items: Vec<ShoppingItem>,
    pub checked_count: usize,
    pub total: usize,
    pub payload: String,
}

impl ShoppingTemplate {
    fn from_view(view: &ShoppingView) -> pantrycam_shared::Result<Self> {
        Ok(Self {
            items: view.list.items().to_vec(),
            checked_count: view.list.checked_count(),
            total: view.list.len(),
            payload: view.payload()?,
        })
    }
}

/// GET /lista?shopping=<json array>
#[tracing::instrument(skip_all)]
pub async fn page(
    template: Template,
    query: Result<Query<ShoppingQuery>, QueryRejection>,
) -> impl IntoResponse {
    let param = match query {
        Ok(Query(query)) => query.shopping,
        Err(err) => {
            tracing::error!(err = %err, "failed to parse shopping query");
            None
        }
    };

    let view = ShoppingView::load(param.as_deref());
    let page = crate::try_page_response!(sync: ShoppingTemplate::from_view(&view), template);

    template.render(page)
}

/// POST /lista/toggle/{index}
#[tracing::instrument(skip_all)]
pub async fn toggle(
    template: Template,
    Path(index): Path<usize>,
    Form(form): Form<ShoppingForm>,
) -> impl IntoResponse {
    let mut view = ShoppingView::restore(form.shopping.as_deref(), &form.checked);

    if let Err(err) = view.toggle(index) {
        tracing::warn!(index = index, err = %err, "failed to toggle shopping item");
    }

    let page = crate::try_page_response!(sync: ShoppingTemplate::from_view(&view), template);

    template.render(page)
}

/// POST /lista/reset
#[tracing::instrument(skip_all)]
pub async fn reset(template: Template, Form(form): Form<ShoppingForm>) -> impl IntoResponse {
    let mut view = ShoppingView::restore(form.shopping.as_deref(), &form.checked);
    view.reset();

    let page = crate::try_page_response!(sync: ShoppingTemplate::from_view(&view), template);

    template.render(page)
}
