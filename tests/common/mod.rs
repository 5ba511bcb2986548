//! Shared test infrastructure for route-level tests.
//!
//! - `seeded_stores()` - in-memory stores with two users, alice and bob
//! - `init_app()` - the fully routed app with a cookie session
//! - `Browser` - carries the session cookie from one response to the next
#![allow(dead_code)]

use actix_http::Request;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, Error, test, web};
use regex::Regex;

use task_categories::auth::password;
use task_categories::config::{SESSION_COOKIE, session_middleware};
use task_categories::db::Stores;
use task_categories::models::user::{NewUser, User};
use task_categories::routes;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const PASSWORD: &str = "password123";

// ============================================================================
// SETUP
// ============================================================================

/// In-memory stores holding two users that share `PASSWORD`.
pub async fn seeded_stores() -> (Stores, User, User) {
    let stores = Stores::in_memory();
    let hash = password::hash_password(PASSWORD).expect("Failed to hash password");

    let alice = stores
        .users
        .create(NewUser { username: ALICE.to_string(), password_hash: hash.clone() })
        .await
        .expect("Failed to create alice");
    let bob = stores
        .users
        .create(NewUser { username: BOB.to_string(), password_hash: hash })
        .await
        .expect("Failed to create bob");

    (stores, alice, bob)
}

pub async fn init_app(
    stores: &Stores,
) -> impl Service<Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .wrap(session_middleware(Key::generate(), false))
            .app_data(web::Data::from(stores.categories.clone()))
            .app_data(web::Data::from(stores.users.clone()))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found)),
    )
    .await
}

// ============================================================================
// SESSION HANDLING
// ============================================================================

/// Minimal cookie jar: remembers the latest session cookie the app set.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn send<S>(&mut self, app: &S, req: test::TestRequest) -> ServiceResponse
    where
        S: Service<Request, Response = ServiceResponse, Error = Error>,
    {
        let req = match &self.cookie {
            Some(cookie) => req.cookie(cookie.clone()),
            None => req,
        };
        let resp = test::call_service(app, req.to_request()).await;
        if let Some(cookie) = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
        {
            self.cookie = Some(cookie.into_owned());
        }
        resp
    }

    /// GET a page and return its CSRF token.
    pub async fn csrf_from<S>(&mut self, app: &S, uri: &str) -> String
    where
        S: Service<Request, Response = ServiceResponse, Error = Error>,
    {
        let resp = self.send(app, test::TestRequest::get().uri(uri)).await;
        assert!(resp.status().is_success(), "GET {uri} returned {}", resp.status());
        csrf_token(&body_string(resp).await)
    }

    /// Log in through the real form.
    pub async fn login<S>(&mut self, app: &S, username: &str, password: &str) -> ServiceResponse
    where
        S: Service<Request, Response = ServiceResponse, Error = Error>,
    {
        let token = self.csrf_from(app, "/login").await;
        let req = test::TestRequest::post().uri("/login").set_form(vec![
            ("username", username),
            ("password", password),
            ("csrf_token", token.as_str()),
        ]);
        self.send(app, req).await
    }
}

// ============================================================================
// RESPONSE HELPERS
// ============================================================================

/// Pull the hidden `csrf_token` value out of a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page has no csrf_token field")
}

pub async fn body_string(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body is not UTF-8")
}

pub async fn body_json(resp: ServiceResponse) -> serde_json::Value {
    let bytes = test::read_body(resp).await;
    serde_json::from_slice(&bytes).expect("body is not JSON")
}

pub fn location(resp: &ServiceResponse) -> Option<String> {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
