use axum::{
    extract::{Query, rejection::QueryRejection},
    response::IntoResponse,
};
use pantrycam_mealplan::{MealDay, PlanningView};
use serde::Deserialize;

use crate::template::Template;

#[derive(Debug, Deserialize)]
pub struct PlanningQuery {
    ingredients: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "planning.html")]
pub struct PlanningTemplate {
    pub ingredients: Vec<String>,
    pub meals: Vec<MealDay>,
    pub shopping_href: String,
}

/// GET /cardapio?ingredients=<json array>
#[tracing::instrument(skip_all)]
pub async fn page(
    template: Template,
    query: Result<Query<PlanningQuery>, QueryRejection>,
) -> impl IntoResponse {
    let param = match query {
        Ok(Query(query)) => query.ingredients,
        Err(err) => {
            tracing::error!(err = %err, "failed to parse planning query");
            None
        }
    };

    let view = PlanningView::load(param.as_deref());
    let shopping_href = crate::try_page_response!(sync: view.shopping_href(), template);

    template.render(PlanningTemplate {
        ingredients: view.ingredients,
        meals: view.meals,
        shopping_href,
    })
}
