/// Rendering every layout from defaults, directly and through the HTTP API.

use actix_web::http::{StatusCode, header};
use actix_web::test;
use regex::Regex;
use serde_json::{Value, json};

use presentation_layouts::layouts::LayoutRegistry;

#[macro_use]
mod common;
use common::setup_dirs;

/// Text that askama emits unchanged.
fn survives_escaping(s: &str) -> bool {
    !s.chars().any(|c| matches!(c, '&' | '<' | '>' | '"' | '\''))
}

// ---------------------------------------------------------------------------
// Direct rendering
// ---------------------------------------------------------------------------

#[::core::prelude::v1::test]
fn test_every_layout_renders_without_data() {
    let registry = LayoutRegistry::builtin();
    let layout_ids = Regex::new(r#"data-layout-id="([^"]+)""#).unwrap();
    let leftover_tags = Regex::new(r"\{[{%#]").unwrap();

    for layout in registry.layouts() {
        let html = layout
            .render(None)
            .unwrap_or_else(|e| panic!("{} failed to render: {e}", layout.id));
        let ids: Vec<&str> = layout_ids
            .captures_iter(&html)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
            .collect();
        assert_eq!(ids, vec![layout.id], "{}", layout.id);
        assert!(!leftover_tags.is_match(&html), "{} has unrendered template tags", layout.id);
    }
}

#[::core::prelude::v1::test]
fn test_default_text_is_visible_in_output() {
    let registry = LayoutRegistry::builtin();
    for layout in registry.layouts() {
        let html = layout.render(None).unwrap();
        let resolved = layout.resolve(None).unwrap();

        let properties = layout.schema()["properties"].as_object().unwrap();
        for (name, property) in properties {
            // Plain required-with-default strings only; enums and nullable fields are skipped.
            if property["type"] != "string" || property.get("enum").is_some() {
                continue;
            }
            let Some(text) = resolved[name].as_str() else { continue };
            if survives_escaping(text) {
                assert!(html.contains(text), "{}: {name} not rendered", layout.id);
            }
        }
    }
}

#[::core::prelude::v1::test]
fn test_array_items_are_all_rendered() {
    let registry = LayoutRegistry::builtin();

    let layout = registry.find("06-process-flow-slide").unwrap();
    let html = layout.render(None).unwrap();
    let resolved = layout.resolve(None).unwrap();
    let steps = resolved["steps"].as_array().unwrap();
    assert_eq!(html.matches("class=\"process-step\"").count(), steps.len());

    let layout = registry.find("03-agenda-timeline-slide").unwrap();
    let html = layout.render(None).unwrap();
    let resolved = layout.resolve(None).unwrap();
    let sections = resolved["sections"].as_array().unwrap();
    assert_eq!(html.matches("class=\"agenda-item").count(), sections.len());
}

#[::core::prelude::v1::test]
fn test_user_text_is_escaped() {
    let registry = LayoutRegistry::builtin();
    let layout = registry.find("04-section-header-slide").unwrap();
    let html = layout
        .render(Some(&json!({ "sectionTitle": "<script>alert(1)</script>" })))
        .unwrap();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[::core::prelude::v1::test]
fn test_optional_section_hidden_when_absent() {
    let registry = LayoutRegistry::builtin();
    let layout = registry.find("ab4c-new-dual-quote").unwrap();
    let mut data = layout.resolve(None).unwrap();
    let learning = data["leftBox"]["learningText"].as_str().unwrap().to_string();

    data["leftBox"]["keyLearning"] = Value::Null;
    data["leftBox"]["learningText"] = Value::Null;
    let html = layout.render(Some(&data)).unwrap();
    assert!(!html.contains(&learning));
}

// ---------------------------------------------------------------------------
// HTTP API
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn test_api_lists_every_layout() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::get().uri("/api/layouts").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 26);
    assert_eq!(items[0]["id"], "01-title-slide");
    assert_eq!(items[0]["group"], "ab4c");
    assert!(items.iter().any(|i| i["isTerminal"] == true));

    let groups: Vec<&str> = items.iter().filter_map(|i| i["group"].as_str()).collect();
    for group in ["ab4c", "ab4c-new", "ab4c-a4", "gamma", "trade-compliance"] {
        assert!(groups.contains(&group), "{group}");
    }
}

#[actix_web::test]
async fn test_api_schema_and_unknown_layout() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::get().uri("/api/layouts/06-process-flow-slide/schema").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["type"], "object");
    assert_eq!(body["properties"]["steps"]["minItems"], 3);
    assert_eq!(body["properties"]["steps"]["maxItems"], 6);

    let req = test::TestRequest::get().uri("/api/layouts/no-such-layout/schema").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unknown layout: no-such-layout");
}

#[actix_web::test]
async fn test_api_resolve_fills_defaults() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::post()
        .uri("/api/layouts/01-title-slide/resolve")
        .set_json(json!({ "title": "Quarterly Review" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Quarterly Review");
    assert!(body["subtitle"].as_str().is_some_and(|s| !s.is_empty()));
}

#[actix_web::test]
async fn test_api_resolve_reports_issues() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::post()
        .uri("/api/layouts/06-process-flow-slide/resolve")
        .set_json(json!({ "steps": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["issues"][0]["path"], "steps");
}

#[actix_web::test]
async fn test_api_post_requires_json_content_type() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::post()
        .uri("/api/layouts/01-title-slide/render")
        .insert_header((header::CONTENT_TYPE, "text/plain"))
        .set_payload("{}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/layouts/01-title-slide/resolve")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_api_render_returns_fragment() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::post()
        .uri("/api/layouts/16-thank-you-closing/render")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("data-layout-id=\"16-thank-you-closing\""));
}

#[actix_web::test]
async fn test_closing_links_only_accept_http() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    for url in ["javascript:alert(document.cookie)", "data:text/html,<b>x</b>", "JaVaScRiPt:alert(1)"] {
        let req = test::TestRequest::post()
            .uri("/api/layouts/16-thank-you-closing/render")
            .set_json(json!({ "websiteUrl": url }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY, "{url}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["issues"][0]["path"], "websiteUrl");
    }

    let req = test::TestRequest::post()
        .uri("/api/layouts/16-thank-you-closing/render")
        .set_json(json!({ "websiteUrl": "https://ab4c.example.com", "feedbackUrl": "http://ab4c.example.com/feedback" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("href=\"https://ab4c.example.com\""));
    assert!(!html.contains("href=\"javascript:"));
}

#[::core::prelude::v1::test]
fn test_title_override_reaches_new_layouts() {
    let registry = LayoutRegistry::builtin();
    for id in ["ab4c-a4-one-pager", "gamma-title-with-image", "gamma-two-column-boxes", "gamma-case-study-simple"] {
        let layout = registry.find(id).unwrap();
        let title_key = if id == "ab4c-a4-one-pager" { "tipTitle" } else { "title" };
        let html = layout.render(Some(&json!({ title_key: "Rendered Heading Text" }))).unwrap();
        assert!(html.contains("Rendered Heading Text"), "{id}");
    }
}

#[actix_web::test]
async fn test_template_group_catalog() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::get().uri("/api/template?group=ab4c-new").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["name"], "ab4c-new");
    assert_eq!(body["ordered"], false);
    let slides = body["slides"].as_array().unwrap();
    assert_eq!(slides.len(), 6);
    assert_eq!(slides[0]["id"], "ab4c-new-statistics-highlight");
    assert_eq!(slides[5]["id"], "ab4c-new-circular-process");
    assert_eq!(slides[0]["json_schema"]["type"], "object");

    let req = test::TestRequest::get().uri("/api/template").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Missing group name");

    let req = test::TestRequest::get().uri("/api/template?group=unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_catalog_and_preview_pages() {
    let (_dir, config) = setup_dirs();
    let app = init_app!(config);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = std::str::from_utf8(&body).unwrap();
    for layout in LayoutRegistry::builtin().layouts() {
        assert!(html.contains(&format!("/layouts/{}/preview", layout.id)), "{}", layout.id);
    }

    let req = test::TestRequest::get().uri("/layouts/10-key-takeaways/preview").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("data-layout-id=\"10-key-takeaways\""));

    let req = test::TestRequest::get().uri("/layouts/nope/preview").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/no/such/page").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
