use actix_web::{App, HttpServer, middleware, web};

use presentation_layouts::config::AppConfig;
use presentation_layouts::handlers;
use presentation_layouts::layouts::LayoutRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let registry = web::Data::new(LayoutRegistry::builtin());

    log::info!(
        "Serving {} layouts in {} groups",
        registry.layouts().count(),
        registry.groups().len()
    );
    for root in config.image_roots() {
        log::debug!("Image root: {}", root.display());
    }

    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(registry.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            .default_service(web::to(handlers::default_not_found))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
