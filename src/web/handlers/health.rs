use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use savory_bistro::common::SiteConfig;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    theme: &'static str,
    version: &'static str,
}

#[get("/healthz")]
pub async fn healthz(config: web::Data<SiteConfig>) -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "ok",
        theme: config.theme.as_str(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use savory_bistro::models::ThemeVariant;

    #[actix_web::test]
    async fn reports_ok_and_active_theme() {
        let config = SiteConfig {
            theme: ThemeVariant::Noctora,
            ..Default::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/healthz").to_request();
        let res = test::call_service(&app, req).await;
        assert!(res.status().is_success());

        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains("\"status\":\"ok\""));
        assert!(body.contains("\"theme\":\"noctora\""));
    }
}
