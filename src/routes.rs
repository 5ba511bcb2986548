use actix_web::{HttpResponse, middleware::from_fn, web};

use crate::auth::middleware::{require_auth, require_json_content_type};
use crate::handlers::{auth_handlers, category_handlers};

/// Register every route. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(auth_handlers::login_page))
        .route("/login", web::post().to(auth_handlers::login_submit))
        .route("/logout", web::post().to(auth_handlers::logout))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", auth_handlers::AFTER_LOGIN_REDIRECT))
                .finish()
        }))
        .service(categories_scope());
}

fn categories_scope() -> actix_web::Scope {
    // Literal paths before /{id} so "create" and "api" are never taken as ids
    web::scope("/categories")
        .service(
            web::scope("/api")
                .wrap(from_fn(require_json_content_type))
                .wrap(from_fn(require_auth))
                .route("/create", web::post().to(category_handlers::api_create))
                .route("/get", web::get().to(category_handlers::list_mine)),
        )
        .route("/create", web::get().to(category_handlers::new_form))
        .service(
            web::resource(vec!["", "/"])
                .route(web::get().to(category_handlers::list_all))
                .route(web::post().to(category_handlers::create)),
        )
        .service(
            // PUT checks its own content type after the id lookup
            web::resource("/{id}")
                .route(web::get().to(category_handlers::read))
                .route(web::put().to(category_handlers::update))
                .route(web::delete().to(category_handlers::delete)),
        )
}

/// Fallback for unknown paths (register last).
pub async fn not_found() -> HttpResponse {
    let html = include_str!("../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
