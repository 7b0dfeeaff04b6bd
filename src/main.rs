use actix_web::{web, App, HttpServer};
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use educore_dashboard::clock::MonotonicClock;
use educore_dashboard::layout::Viewport;
use educore_dashboard::{server, AppConfig, Fixtures, Shell};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_json);

    let fixtures = match &config.data_dir {
        Some(dir) => Fixtures::load_dir(dir)?,
        None => Fixtures::embedded()?,
    };
    info!(
        courses = fixtures.catalog.len(),
        institutions = fixtures.admin.institutions.len(),
        "fixtures ready"
    );

    let viewport = Viewport::new(config.viewport_width);
    let shell = web::Data::new(Shell::start(
        config.shell.clone(),
        Arc::new(fixtures),
        viewport,
        Arc::new(MonotonicClock::new()),
    )?);

    info!(addr = %config.bind_addr, "starting EduCore dashboard");

    let app_shell = shell.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(app_shell.clone())
            .configure(server::routes)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await?;

    match Arc::try_unwrap(shell.into_inner()) {
        Ok(shell) => shell.shutdown().await,
        Err(shared) => warn!(
            references = Arc::strong_count(&shared),
            "shell still shared at exit, timers left to drop"
        ),
    }
    Ok(())
}
