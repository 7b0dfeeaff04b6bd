use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::error::ShellError;
use crate::filter::{self, CatalogFilter, ALL};
use crate::layout::ViewportSignal;
use crate::shell::Shell;
use crate::views::ViewAction;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ShellError {
    fn status_code(&self) -> StatusCode {
        match self {
            ShellError::UnknownView(_) => StatusCode::NOT_FOUND,
            ShellError::ActionMismatch { .. } => StatusCode::BAD_REQUEST,
            ShellError::Fixture(_) | ShellError::Schedule(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

fn bad_request(err: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorBody {
        error: err.to_string(),
    })
}

#[derive(Deserialize)]
pub struct CatalogQuery {
    search: Option<String>,
    category: Option<String>,
    difficulty: Option<String>,
}

impl From<CatalogQuery> for CatalogFilter {
    fn from(query: CatalogQuery) -> Self {
        CatalogFilter {
            search_text: query.search.unwrap_or_default(),
            category: query.category.unwrap_or_else(|| ALL.to_string()),
            difficulty: query.difficulty.unwrap_or_else(|| ALL.to_string()),
        }
    }
}

#[derive(Deserialize)]
pub struct ViewportUpdate {
    width: u32,
    signal: ViewportSignal,
}

#[derive(Serialize)]
struct ViewportAccepted {
    width: u32,
}

// Current frame
async fn get_frame(shell: web::Data<Shell>) -> HttpResponse {
    HttpResponse::Ok().json(shell.frame())
}

async fn select_view(
    path: web::Path<String>,
    shell: web::Data<Shell>,
) -> Result<HttpResponse, ShellError> {
    shell.select_view_str(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(shell.frame()))
}

async fn apply_action(
    web::Json(action): web::Json<ViewAction>,
    shell: web::Data<Shell>,
) -> Result<HttpResponse, ShellError> {
    shell.apply(action)?;
    Ok(HttpResponse::Ok().json(shell.frame()))
}

// Stateless catalog search; never touches the shell's catalog view
async fn search_catalog(
    query: web::Query<CatalogQuery>,
    shell: web::Data<Shell>,
) -> HttpResponse {
    let filter = CatalogFilter::from(query.into_inner());
    let fixtures = shell.fixtures();
    let courses: Vec<_> = filter::apply(&fixtures.catalog, &filter);
    HttpResponse::Ok().json(courses)
}

async fn update_viewport(
    web::Json(update): web::Json<ViewportUpdate>,
    shell: web::Data<Shell>,
) -> HttpResponse {
    shell.viewport().emit(update.signal, update.width);
    HttpResponse::Accepted().json(ViewportAccepted {
        width: update.width,
    })
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("EduCore dashboard is running!")
}

async fn serve_homepage(shell: web::Data<Shell>) -> HttpResponse {
    let html = HOMEPAGE.replace("{{META}}", &shell.head().to_html());
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

/// Registers every route of the dashboard on an app that already carries
/// `web::Data<Shell>`.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default().error_handler(|err, _| {
            InternalError::from_response(err.to_string(), bad_request(&err)).into()
        }),
    )
    .app_data(
        web::QueryConfig::default().error_handler(|err, _| {
            InternalError::from_response(err.to_string(), bad_request(&err)).into()
        }),
    )
    .route("/", web::get().to(serve_homepage))
    .route("/health", web::get().to(health_check))
    .route("/api/frame", web::get().to(get_frame))
    .route("/api/views/{id}", web::post().to(select_view))
    .route("/api/actions", web::post().to(apply_action))
    .route("/api/catalog", web::get().to(search_catalog))
    .route("/api/viewport", web::post().to(update_viewport));
}

const HOMEPAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    {{META}}
    <title>EduCore LMS</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 0; display: flex; min-height: 100vh; background: #f5f5f5; }
        nav { width: 260px; background: #1e293b; color: #e2e8f0; padding: 20px; }
        nav.compact { width: 64px; padding: 12px 8px; }
        nav h3 { font-size: 12px; text-transform: uppercase; color: #94a3b8; margin: 18px 0 6px; }
        nav button { display: block; width: 100%; text-align: left; background: none; border: none; color: inherit; padding: 8px 10px; border-radius: 6px; cursor: pointer; }
        nav button.active { background: #2563eb; color: white; }
        main { flex: 1; padding: 25px; }
        header { display: flex; justify-content: space-between; align-items: center; }
        .badge { background: #e2e8f0; padding: 6px 12px; border-radius: 999px; font-size: 13px; }
        .badge.refreshed { background: #d4edda; color: #155724; }
        .skeleton { background: #e5e7eb; border-radius: 8px; height: 80px; margin: 10px 0; }
        pre { background: white; padding: 20px; border-radius: 10px; overflow: auto; }
    </style>
</head>
<body>
    <nav id="nav"></nav>
    <main>
        <header>
            <h1 id="title">EduCore LMS</h1>
            <span id="badge" class="badge"></span>
        </header>
        <section id="content"></section>
    </main>
    <script>
        async function selectView(id) {
            await fetch('/api/views/' + id, { method: 'POST' });
            await draw();
        }

        async function reportViewport(signal) {
            await fetch('/api/viewport', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ width: window.innerWidth, signal: signal })
            });
        }

        function drawNav(frame) {
            const nav = document.getElementById('nav');
            nav.className = frame.compact ? 'compact' : '';
            nav.innerHTML = '';
            for (const group of frame.navigation) {
                if (group.label) {
                    const h = document.createElement('h3');
                    h.textContent = group.label;
                    nav.appendChild(h);
                }
                for (const item of group.items) {
                    const b = document.createElement('button');
                    b.textContent = item.label || item.view.charAt(0).toUpperCase();
                    if (item.hover_title) { b.title = item.hover_title; }
                    if (item.active) { b.className = 'active'; }
                    b.onclick = () => selectView(item.view);
                    nav.appendChild(b);
                }
            }
        }

        function drawBody(frame) {
            const content = document.getElementById('content');
            if (frame.body.state === 'loading') {
                const s = frame.body.skeleton;
                const blocks = s.header_lines + s.metric_cards + s.chart_cards + s.list_rows;
                content.innerHTML = '<div class="skeleton"></div>'.repeat(blocks);
            } else {
                content.innerHTML = '<pre></pre>';
                content.firstChild.textContent = JSON.stringify(frame.body.content, null, 2);
            }
        }

        async function draw() {
            const response = await fetch('/api/frame');
            const frame = await response.json();
            document.getElementById('title').textContent = frame.view;
            const badge = document.getElementById('badge');
            badge.textContent = frame.refresh.label;
            badge.className = frame.refresh.just_refreshed ? 'badge refreshed' : 'badge';
            drawNav(frame);
            drawBody(frame);
        }

        window.addEventListener('resize', () => reportViewport('resize'));
        window.addEventListener('orientationchange', () => reportViewport('orientationchange'));
        reportViewport('resize').then(draw);
        setInterval(draw, 1000);
    </script>
</body>
</html>
"#;
