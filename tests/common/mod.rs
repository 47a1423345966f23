use pkgscan::domain::model::{Herd, Maintainer, Package, Version};
use pkgscan::{AppState, InMemoryCatalog};
use std::sync::Arc;

/// Catalog used across the integration suites:
///
/// - categories `app-foo` (bar, baz) and `sys-apps` (qux, bar)
/// - herds `web` (bar, baz) and `desktop` (qux); `science` declared empty
/// - maintainer 1 (Alice: bar, baz), maintainer 2 (Bob: qux)
/// - overlays `gentoo` (bar, qux) and `sunrise` (baz)
pub fn sample_catalog() -> InMemoryCatalog {
    let mut bar = Package::new("app-foo", "bar");
    bar.herds = vec!["web".to_string()];
    bar.maintainers = vec![1];
    bar.versions = vec![Version {
        version: "1.0".to_string(),
        overlay: "gentoo".to_string(),
    }];

    let mut baz = Package::new("app-foo", "baz");
    baz.herds = vec!["web".to_string()];
    baz.maintainers = vec![1];
    baz.versions = vec![Version {
        version: "0.3".to_string(),
        overlay: "sunrise".to_string(),
    }];

    let mut qux = Package::new("sys-apps", "qux");
    qux.herds = vec!["desktop".to_string()];
    qux.maintainers = vec![2];
    qux.versions = vec![Version {
        version: "2.1".to_string(),
        overlay: "gentoo".to_string(),
    }];

    // Bare name "bar" exists in two categories
    let sys_bar = Package::new("sys-apps", "bar");

    InMemoryCatalog::build(
        vec![bar, baz, qux, sys_bar],
        vec![Herd {
            name: "science".to_string(),
            email: None,
        }],
        vec![
            Maintainer {
                id: 1,
                name: "Alice".to_string(),
                email: Some("alice@example.org".to_string()),
            },
            Maintainer {
                id: 2,
                name: "Bob".to_string(),
                email: None,
            },
        ],
    )
    .unwrap()
}

/// Binds the service to an ephemeral port and returns its base URL.
pub async fn spawn_app(catalog: InMemoryCatalog, max_world_entries: usize) -> String {
    let state = Arc::new(AppState::new(Arc::new(catalog), max_world_entries));
    let app = pkgscan::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub async fn spawn_sample_app() -> String {
    spawn_app(sample_catalog(), 1000).await
}

/// Row count of the rendered document: one `<tr>` per listed item.
pub fn count_rows(body: &str) -> usize {
    body.matches("<tr>").count()
}

/// The `<table>...</table>` slice of a response body, for comparing two
/// responses without their surrounding page chrome.
pub fn table_of(body: &str) -> &str {
    let start = body.find("<table>").expect("response has no table");
    let end = body.find("</table>").expect("response table is unterminated");
    &body[start..end]
}
