//! HTTP surface: page routes, JSON API, contact form, error pages
//!
//! Handlers are thin glue: each one re-reads the flat data files through
//! the repository or data store and renders a view. Nothing is cached, so
//! concurrent requests need no coordination.

use anyhow::Result;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tera::Context;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::PostRepository;
use crate::data::{self, DataStore};
use crate::mail::ContactMailer;
use crate::templates::{TemplateRenderer, ERROR_PAGE};
use crate::Folio;

/// Shared application state
pub struct AppState {
    folio: Folio,
    repository: PostRepository,
    data: DataStore,
    mailer: ContactMailer,
    templates: TemplateRenderer,
}

impl AppState {
    fn new(folio: Folio) -> Result<Self> {
        let repository = PostRepository::new(folio.config.excerpt_length);
        let data = DataStore::new(&folio.data_dir);
        let mailer = ContactMailer::new(folio.config.mail.clone());
        let templates = TemplateRenderer::new(&folio.config)?;
        Ok(Self {
            folio,
            repository,
            data,
            mailer,
            templates,
        })
    }
}

/// Error wrapper that renders the 500 page
struct AppError(anyhow::Error);

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Handler error: {:#}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE.to_string())).into_response()
    }
}

type PageResult = std::result::Result<Response, AppError>;

/// Start the portfolio server
pub async fn start(folio: &Folio, host: &str, port: u16) -> Result<()> {
    let static_dir = folio.static_dir.clone();
    let state = Arc::new(AppState::new(folio.clone())?);

    let app = Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/projects", get(projects_index))
        .route("/projects/:slug", get(project_detail))
        .route("/blog", get(blog_index))
        .route("/blog/:slug", get(blog_detail))
        .route("/contact", get(contact_form).post(contact_submit))
        .route("/api/projects", get(api_projects))
        .route("/api/skills", get(api_skills))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let bind_ip = if host == "localhost" { "127.0.0.1" } else { host };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", host, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home(State(state): State<Arc<AppState>>) -> PageResult {
    let (featured, _) = data::partition_featured(state.data.projects());

    let mut context = Context::new();
    context.insert("page_title", "Home");
    context.insert("featured_projects", &featured[..featured.len().min(2)]);

    render(&state, "index.html", context)
}

async fn about(State(state): State<Arc<AppState>>) -> PageResult {
    let education = state.data.education();
    let skills = state.data.skills();

    let mut context = Context::new();
    context.insert("page_title", "About");
    context.insert("education", &education.education);
    context.insert("certifications", &education.certifications);
    context.insert("objectives", &education.objectives);
    context.insert("skills", &skills);

    render(&state, "about.html", context)
}

async fn projects_index(State(state): State<Arc<AppState>>) -> PageResult {
    let projects = state.data.projects();
    let all_tags = data::unique_tags(projects.iter().map(|p| &p.tags));
    let (featured, other) = data::partition_featured(projects);

    let mut context = Context::new();
    context.insert("page_title", "Projects");
    context.insert("featured_projects", &featured);
    context.insert("other_projects", &other);
    context.insert("all_tags", &all_tags);

    render(&state, "projects.html", context)
}

async fn project_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> PageResult {
    let projects = state.data.projects();
    let Some(project) = data::find_by_slug(&projects, &slug) else {
        return not_found(State(state)).await;
    };

    let related = data::related_projects(&projects, project, 3);

    let mut context = Context::new();
    context.insert("page_title", &project.title);
    context.insert("project", project);
    context.insert("related_projects", &related);

    render(&state, "project_detail.html", context)
}

async fn blog_index(State(state): State<Arc<AppState>>) -> PageResult {
    let posts = state.repository.list_all(&state.folio.blog_dir);
    let all_tags = data::unique_tags(posts.iter().map(|p| &p.tags));

    let mut context = Context::new();
    context.insert("page_title", "Blog");
    context.insert("posts", &posts);
    context.insert("all_tags", &all_tags);

    render(&state, "blog.html", context)
}

async fn blog_detail(State(state): State<Arc<AppState>>, Path(slug): Path<String>) -> PageResult {
    let Some(post) = state.repository.get_by_slug(&state.folio.blog_dir, &slug) else {
        return not_found(State(state)).await;
    };

    let recent: Vec<_> = state
        .repository
        .list_all(&state.folio.blog_dir)
        .into_iter()
        .filter(|p| p.slug != slug)
        .take(5)
        .collect();

    let mut context = Context::new();
    context.insert("page_title", &post.title);
    context.insert("post", &post);
    context.insert("recent_posts", &recent);

    render(&state, "blog_post.html", context)
}

/// Contact form submission
#[derive(Debug, Deserialize)]
struct ContactSubmission {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    message: String,
}

async fn contact_form(State(state): State<Arc<AppState>>) -> PageResult {
    let mut context = Context::new();
    context.insert("page_title", "Contact");
    render(&state, "contact.html", context)
}

async fn contact_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContactSubmission>,
) -> PageResult {
    let name = form.name.trim();
    let email = form.email.trim();
    let subject = form.subject.trim();
    let message = form.message.trim();

    let mut context = Context::new();
    context.insert("page_title", "Contact");

    if [name, email, subject, message].iter().any(|f| f.is_empty()) {
        context.insert("notice", "Please fill in all fields.");
        context.insert("notice_kind", "error");
        context.insert("name", name);
        context.insert("email", email);
        context.insert("subject", subject);
        context.insert("message", message);
        return render(&state, "contact.html", context);
    }

    if state.mailer.send(name, email, subject, message).await {
        context.insert(
            "notice",
            "Message sent successfully! I will get back to you soon.",
        );
        context.insert("notice_kind", "success");
    } else {
        context.insert(
            "notice",
            "Error sending message. Please try again or contact me directly via email.",
        );
        context.insert("notice_kind", "error");
        context.insert("name", name);
        context.insert("email", email);
        context.insert("subject", subject);
        context.insert("message", message);
    }

    render(&state, "contact.html", context)
}

async fn api_projects(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.data.raw("projects.json"))
}

async fn api_skills(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(state.data.raw("skills.json"))
}

async fn not_found(State(state): State<Arc<AppState>>) -> PageResult {
    let mut context = Context::new();
    context.insert("page_title", "Page Not Found");
    let html = state.templates.render("404.html", context)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

fn render(state: &AppState, template: &str, context: Context) -> PageResult {
    let html = state.templates.render(template, context)?;
    Ok(Html(html).into_response())
}
