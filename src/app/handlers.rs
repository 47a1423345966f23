use crate::app::render::{self, Table};
use crate::app::server::AppState;
use crate::core::world::WorldList;
use crate::domain::model::Package;
use crate::utils::error::PkgscanError;
use axum::extract::multipart::MultipartError;
use axum::extract::{FromRequest, Multipart, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;

/// HTTP-facing error. Everything renders as a small HTML page with the
/// matching status code.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(m) | ApiError::NotFound(m) | ApiError::Internal(m) => m,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self.message());
        } else {
            tracing::debug!("request rejected ({}): {}", status, self.message());
        }
        let body = render::page(
            &format!("Error {}", status.as_u16()),
            &format!("<p>{}</p>", render::escape(self.message())),
        );
        (status, Html(body)).into_response()
    }
}

impl From<PkgscanError> for ApiError {
    fn from(err: PkgscanError) -> Self {
        match err {
            PkgscanError::InputError { message } => ApiError::BadRequest(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::BadRequest(format!("malformed multipart body: {}", err))
    }
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct HerdQuery {
    pub herd: String,
}

#[derive(Debug, Deserialize)]
pub struct MaintainerQuery {
    pub maintainer_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct OverlayQuery {
    pub overlay: String,
}

#[derive(Debug, Deserialize)]
pub struct PackageQuery {
    pub category: String,
    pub package: String,
}

#[derive(Debug, Deserialize)]
struct WorldScanForm {
    packages: Option<String>,
}

fn paginate<T>(items: Vec<T>, query: &ListQuery) -> Vec<T> {
    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(usize::MAX);
    items.into_iter().skip(offset).take(limit).collect()
}

fn package_table(packages: &[Package]) -> Table {
    let mut table = Table::new();
    for package in packages {
        table.push_row(vec![
            package.qualified_name(),
            package.versions.len().to_string(),
        ]);
    }
    table
}

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let catalog = &state.catalog;
    let body = format!(
        "<p>{} packages in {} categories, {} herds, {} maintainers, {} overlays.</p>\n\
         <p><a href=\"/categories\">categories</a> | <a href=\"/herds\">herds</a> | \
         <a href=\"/maintainers\">maintainers</a> | <a href=\"/overlays\">overlays</a> | \
         <a href=\"/world\">world scan</a> | <a href=\"/about\">about</a></p>",
        catalog.package_count(),
        catalog.categories().len(),
        catalog.herds().len(),
        catalog.maintainers().len(),
        catalog.overlays().len(),
    );
    Html(render::page("pkgscan", &body))
}

pub async fn about() -> Html<String> {
    let body = "<p>pkgscan serves a package catalog and scans user-submitted \
                world lists for packages it knows about.</p>";
    Html(render::page("About", body))
}

pub async fn world_page() -> Html<String> {
    let body = "<p>Submit a world list: one package name per line, either \
                pasted below or uploaded as a file.</p>\n\
                <form method=\"post\" action=\"/world/scan\">\n\
                <textarea name=\"packages\" rows=\"10\" cols=\"40\"></textarea>\n\
                <button type=\"submit\">Scan</button>\n</form>\n\
                <form method=\"post\" action=\"/world/scan\" \
                enctype=\"multipart/form-data\">\n\
                <input type=\"file\" name=\"world\">\n\
                <button type=\"submit\">Upload and scan</button>\n</form>";
    Html(render::page("World scan", body))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such page".to_string())
}

// ---------------------------------------------------------------------------
// Listing projections
// ---------------------------------------------------------------------------

pub async fn categories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Html<String> {
    let mut table = Table::new();
    for group in paginate(state.catalog.categories(), &query) {
        table.push_row(vec![group.name, group.package_count.to_string()]);
    }
    Html(render::page("Categories", &table.to_html()))
}

pub async fn category(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CategoryQuery>,
) -> Result<Html<String>, ApiError> {
    let packages = state
        .catalog
        .packages_in_category(&query.category)
        .ok_or_else(|| ApiError::NotFound(format!("unknown category: {}", query.category)))?;
    let title = format!("Category {}", query.category);
    Ok(Html(render::page(&title, &package_table(&packages).to_html())))
}

pub async fn herds(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Html<String> {
    let mut table = Table::new();
    for herd in paginate(state.catalog.herds(), &query) {
        table.push_row(vec![herd.name, herd.email.unwrap_or_default()]);
    }
    Html(render::page("Herds", &table.to_html()))
}

pub async fn herd(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HerdQuery>,
) -> Result<Html<String>, ApiError> {
    let packages = state
        .catalog
        .packages_in_herd(&query.herd)
        .ok_or_else(|| ApiError::NotFound(format!("unknown herd: {}", query.herd)))?;
    let title = format!("Herd {}", query.herd);
    Ok(Html(render::page(&title, &package_table(&packages).to_html())))
}

pub async fn maintainers(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Html<String> {
    let mut table = Table::new();
    for maintainer in paginate(state.catalog.maintainers(), &query) {
        table.push_row(vec![
            maintainer.id.to_string(),
            maintainer.name,
            maintainer.email.unwrap_or_default(),
        ]);
    }
    Html(render::page("Maintainers", &table.to_html()))
}

pub async fn maintainer(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MaintainerQuery>,
) -> Result<Html<String>, ApiError> {
    let found = state.catalog.maintainer(query.maintainer_id).ok_or_else(|| {
        ApiError::NotFound(format!("unknown maintainer id: {}", query.maintainer_id))
    })?;
    let packages = state
        .catalog
        .packages_for_maintainer(query.maintainer_id)
        .unwrap_or_default();
    let title = format!("Maintainer {}", found.name);
    Ok(Html(render::page(&title, &package_table(&packages).to_html())))
}

pub async fn overlays(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Html<String> {
    let mut table = Table::new();
    for group in paginate(state.catalog.overlays(), &query) {
        table.push_row(vec![group.name, group.package_count.to_string()]);
    }
    Html(render::page("Overlays", &table.to_html()))
}

pub async fn overlay(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OverlayQuery>,
) -> Result<Html<String>, ApiError> {
    let packages = state
        .catalog
        .packages_in_overlay(&query.overlay)
        .ok_or_else(|| ApiError::NotFound(format!("unknown overlay: {}", query.overlay)))?;
    let title = format!("Overlay {}", query.overlay);
    Ok(Html(render::page(&title, &package_table(&packages).to_html())))
}

pub async fn package(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PackageQuery>,
) -> Result<Html<String>, ApiError> {
    let package = state
        .catalog
        .find_package(&query.category, &query.package)
        .ok_or_else(|| {
            ApiError::NotFound(format!("unknown package: {}/{}", query.category, query.package))
        })?;

    let mut table = Table::new();
    for version in &package.versions {
        table.push_row(vec![version.version.clone(), version.overlay.clone()]);
    }

    let mut body = String::new();
    if !package.herds.is_empty() {
        body.push_str(&format!(
            "<p>Herds: {}</p>\n",
            render::escape(&package.herds.join(", "))
        ));
    }
    if !package.maintainers.is_empty() {
        let ids: Vec<String> = package.maintainers.iter().map(u64::to_string).collect();
        body.push_str(&format!("<p>Maintainer ids: {}</p>\n", ids.join(", ")));
    }
    body.push_str(&table.to_html());

    Ok(Html(render::page(&package.qualified_name(), &body)))
}

// ---------------------------------------------------------------------------
// World scan
// ---------------------------------------------------------------------------

/// Accepts either an urlencoded form with a `packages` text field or a
/// multipart body with a `world` file (a `packages` text part also works).
/// Both paths reduce to the same normalized [`WorldList`].
pub async fn world_scan(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Html<String>, ApiError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let world = if content_type.starts_with("multipart/form-data") {
        world_from_multipart(request).await?
    } else {
        world_from_form(request).await?
    };

    if world.len() > state.max_world_entries {
        return Err(ApiError::BadRequest(format!(
            "world list has {} entries, limit is {}",
            world.len(),
            state.max_world_entries
        )));
    }

    let report = state.scanner.scan(world.tokens()).await?;

    let mut body = package_table(&report.matched).to_html();
    let unknown = render::unknown_list(&report.unknown);
    if !unknown.is_empty() {
        body.push('\n');
        body.push_str(&unknown);
    }
    body.push_str(&format!(
        "\n<p>Scanned at {}</p>",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    Ok(Html(render::page("World scan results", &body)))
}

async fn world_from_form(request: Request) -> Result<WorldList, ApiError> {
    let Form(form) = Form::<WorldScanForm>::from_request(request, &())
        .await
        .map_err(|err| ApiError::BadRequest(format!("malformed form body: {}", err)))?;

    match form.packages {
        Some(text) => Ok(WorldList::from_text(&text)),
        None => Err(ApiError::BadRequest(
            "either a 'packages' field or a 'world' file is required".to_string(),
        )),
    }
}

async fn world_from_multipart(request: Request) -> Result<WorldList, ApiError> {
    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|err| ApiError::BadRequest(format!("malformed multipart body: {}", err)))?;

    let mut world: Option<WorldList> = None;
    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("world") => {
                let bytes = field.bytes().await?;
                world = Some(WorldList::from_bytes(&bytes)?);
            }
            Some("packages") => {
                let text = field.text().await?;
                world = Some(WorldList::from_text(&text));
            }
            _ => {}
        }
    }

    world.ok_or_else(|| {
        ApiError::BadRequest(
            "either a 'packages' field or a 'world' file is required".to_string(),
        )
    })
}
