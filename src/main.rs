#[cfg(feature = "ssr")]
mod web;

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::middleware::Logger;
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};
    use leptos::config::get_configuration;
    use leptos::prelude::*;
    use leptos_actix::{LeptosRoutes, generate_route_list, handle_server_fns_with_context};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    use savory_bistro::common::SiteConfig;
    use savory_bistro::frontend::{App as SiteApp, shell};
    use web::middleware::SecurityHeaders;

    let config = SiteConfig::from_env().map_err(std::io::Error::other)?;

    // `log` records from the app and actix are bridged into tracing.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "savory_bistro=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let conf = get_configuration(None).map_err(std::io::Error::other)?;
    let addr = conf.leptos_options.site_addr;
    let routes = generate_route_list(SiteApp);

    log::info!(
        "Serving {} theme at http://{} (submit delay {:?})",
        config.theme,
        addr,
        config.submit_delay
    );

    HttpServer::new(move || {
        let leptos_options = conf.leptos_options.clone();
        let site_root = leptos_options.site_root.clone().to_string();
        let server_config = config.clone();
        let route_config = config.clone();

        App::new()
            .wrap(Logger::default())
            .wrap(SecurityHeaders)
            .app_data(Data::new(config.clone()))
            .route(
                "/api/{tail:.*}",
                handle_server_fns_with_context(move || provide_context(server_config.clone())),
            )
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/static", &site_root))
            .configure(web::handlers::configure)
            .leptos_routes_with_context(
                routes.clone(),
                move || provide_context(route_config.clone()),
                {
                    let leptos_options = leptos_options.clone();
                    move || shell(leptos_options.clone())
                },
            )
            .app_data(Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client code is started by `hydrate()` in the wasm bundle.
}
