use crate::{context::Context, routes};
use actix_web::{
    dev::Server,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use std::net::Ipv4Addr;
use tracing_actix_web::TracingLogger;

pub fn make_server(ctx: Context) -> anyhow::Result<Server> {
    let port = ctx.config.port;
    let data = Data::new(ctx);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind((Ipv4Addr::UNSPECIFIED, port))?
    .run();

    Ok(server)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(routes::json_error))
        .app_data(web::PathConfig::default().error_handler(routes::path_error))
        .service(
            web::resource("/clients")
                .route(web::get().to(routes::list_clients))
                .route(web::post().to(routes::save_client)),
        )
        .service(
            web::resource("/clients/{client_id}")
                .route(web::get().to(routes::get_client))
                .route(web::put().to(routes::replace_client))
                .route(web::delete().to(routes::delete_client)),
        )
        .default_service(web::to(|| async {
            tracing::error!("Route not found");
            HttpResponse::NotFound()
        }));
}
