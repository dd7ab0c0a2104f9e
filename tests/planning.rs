use axum::http::StatusCode;
use pantrycam_mealplan::{
    DEFAULT_BREAKFAST, DEFAULT_DINNER, DEFAULT_LUNCH, RICE_AND_BEANS, TOMATO_ONION_SALAD,
};
use pantrycam_shared::handoff;

mod common;
use common::{body_string, create_test_app, get};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

async fn planning_page(uri: &str) -> String {
    let response = get(create_test_app(), uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    body_string(response).await
}

#[tokio::test]
async fn test_full_pantry_plan() -> anyhow::Result<()> {
    let uri = handoff::href(
        handoff::PLANNING_ROUTE,
        handoff::INGREDIENTS_PARAM,
        &["tomato", "onion", "egg", "rice", "beans"],
    )?;
    let html = planning_page(&uri).await;

    for day in WEEKDAYS {
        assert!(html.contains(&format!("<h3>{day}</h3>")), "{day}");
    }
    assert_eq!(html.matches(DEFAULT_BREAKFAST).count(), 7);
    assert_eq!(html.matches(TOMATO_ONION_SALAD).count(), 7);
    assert_eq!(html.matches(RICE_AND_BEANS).count(), 7);
    assert!(html.contains("Based on:"));

    Ok(())
}

#[tokio::test]
async fn test_empty_ingredient_list_gives_default_week() -> anyhow::Result<()> {
    let uri = handoff::href::<&str>(handoff::PLANNING_ROUTE, handoff::INGREDIENTS_PARAM, &[])?;
    let html = planning_page(&uri).await;

    assert_eq!(html.matches("<article class=\"day\">").count(), 7);
    assert_eq!(html.matches(DEFAULT_LUNCH).count(), 7);
    assert_eq!(html.matches(DEFAULT_DINNER).count(), 7);
    assert!(!html.contains("Based on:"));

    Ok(())
}

#[tokio::test]
async fn test_missing_param_gives_empty_plan() {
    let html = planning_page("/cardapio").await;

    assert!(!html.contains("<article class=\"day\">"));
    assert!(html.contains("/lista?shopping=%5B%5D"));
}

#[tokio::test]
async fn test_malformed_param_gives_empty_plan() {
    for uri in [
        "/cardapio?ingredients=oops",
        "/cardapio?ingredients=%5B%22tomato%22",
        "/cardapio?ingredients=%7B%7D",
        "/cardapio?ingredients=%5B1%2C2%5D",
        "/cardapio?ingredients=a&ingredients=b",
    ] {
        let html = planning_page(uri).await;

        assert!(!html.contains("<article class=\"day\">"), "{uri}");
    }
}

#[tokio::test]
async fn test_plan_links_to_eight_item_shopping_list() -> anyhow::Result<()> {
    let html = planning_page("/cardapio?ingredients=%5B%5D").await;

    let expected = handoff::href(
        handoff::SHOPPING_ROUTE,
        handoff::SHOPPING_PARAM,
        &pantrycam_mealplan::SHOPPING_CATEGORIES,
    )?;
    assert!(html.contains(&expected));

    Ok(())
}
