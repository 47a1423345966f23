mod common;

use common::{count_rows, spawn_sample_app};

#[tokio::test]
async fn test_categories_table() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/categories", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 2);
    assert!(body.contains("app-foo"));
    assert!(body.contains("sys-apps"));
}

#[tokio::test]
async fn test_category_lists_its_packages() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/category?category=app-foo", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 2);
    assert!(body.contains("app-foo/bar"));
    assert!(body.contains("app-foo/baz"));
    assert!(!body.contains("sys-apps/qux"));
}

#[tokio::test]
async fn test_unknown_category_is_404() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/category?category=no-such", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_herds_table_includes_declared_empty_herd() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/herds", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    // web, desktop, and the declared-but-empty science herd
    assert_eq!(count_rows(&body), 3);
    assert!(body.contains("web"));
    assert!(body.contains("desktop"));
    assert!(body.contains("science"));
}

#[tokio::test]
async fn test_herd_membership_is_exact() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/herd?herd=web", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 2);
    assert!(body.contains("app-foo/bar"));
    assert!(body.contains("app-foo/baz"));
    assert!(!body.contains("qux"));
}

#[tokio::test]
async fn test_empty_herd_renders_empty_table() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/herd?herd=science", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 0);
}

#[tokio::test]
async fn test_unknown_herd_is_404() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/herd?herd=no-such", base)).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_maintainers_table() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/maintainers", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 2);
    assert!(body.contains("Alice"));
    assert!(body.contains("Bob"));
}

#[tokio::test]
async fn test_maintainer_membership_is_exact() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/maintainer?maintainer_id=1", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 2);
    assert!(body.contains("app-foo/bar"));
    assert!(body.contains("app-foo/baz"));
}

#[tokio::test]
async fn test_unknown_maintainer_is_404() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/maintainer?maintainer_id=99", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_non_numeric_maintainer_id_is_400() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/maintainer?maintainer_id=abc", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_overlays_table() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/overlays", base)).await.unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 2);
    assert!(body.contains("gentoo"));
    assert!(body.contains("sunrise"));
}

#[tokio::test]
async fn test_overlay_lists_packages_with_a_version_in_it() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/overlay?overlay=gentoo", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 2);
    assert!(body.contains("app-foo/bar"));
    assert!(body.contains("sys-apps/qux"));
    assert!(!body.contains("app-foo/baz"));
}

#[tokio::test]
async fn test_unknown_overlay_is_404() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/overlay?overlay=no-such", base))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_listing_pagination() {
    let base = spawn_sample_app().await;
    let response = reqwest::get(format!("{}/categories?limit=1&offset=1", base))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body = response.text().await.unwrap();
    assert_eq!(count_rows(&body), 1);
    assert!(body.contains("sys-apps"));
}
