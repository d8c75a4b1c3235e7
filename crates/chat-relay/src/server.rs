use std::io::Write;

use actix_web::http::Method;
use actix_web::{HttpResponse, HttpServer, middleware, web};
use anthropic_api::{ChatRequest, message::Messages};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::config::RelayConfig;
use crate::state::RelayState;

/// Body returned by echo mode, regardless of the request content.
const ECHO_BODY: &str = "CONNECTION SUCCESSFUL. The pipeline is working.";

#[derive(Debug, Deserialize)]
struct ChatBody {
    messages: Messages,
}

/// Failures surfaced to the caller as `500 {"error": <message>}`. Both
/// variants are transparent so the body carries the underlying message text
/// verbatim, with no caller-vs-service distinction.
#[derive(Debug, Error)]
enum RelayError {
    #[error(transparent)]
    Body(#[from] serde_json::Error),
    #[error(transparent)]
    Upstream(#[from] anthropic_api::AnthropicRequestError),
}

/// CORS contract: the four fixed headers go out on every response,
/// including errors and pre-flight answers.
pub fn cors_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Access-Control-Allow-Credentials", "true"))
        .add((
            "Access-Control-Allow-Methods",
            "GET,OPTIONS,PATCH,DELETE,POST,PUT",
        ))
        .add((
            "Access-Control-Allow-Headers",
            "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, \
             Content-MD5, Content-Type, Date, X-Api-Version",
        ))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("Ok")
}

/// Browser pre-flight: empty 200, no external call.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(json!({"error": "method not allowed"}))
}

async fn chat(state: web::Data<RelayState>, body: web::Bytes) -> HttpResponse {
    match relay(&state, &body).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

async fn relay(state: &RelayState, body: &[u8]) -> Result<serde_json::Value, RelayError> {
    if state.echo {
        return Ok(json!({"content": [{"text": ECHO_BODY}]}));
    }

    let body: ChatBody = serde_json::from_slice(body)?;

    let preview: String = state.system_prompt.chars().take(50).collect();
    log::debug!(
        "system prompt: len={} preview={:?}",
        state.system_prompt.len(),
        preview
    );

    let request = ChatRequest::builder()
        .model(state.model.clone())
        .max_tokens(state.max_tokens)
        .maybe_temperature(state.temperature)
        .system(state.system_prompt.clone())
        .messages(body.messages)
        .build();

    let response = state.client.send(&request).await?;
    Ok(serde_json::to_value(response)?)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health)).service(
        web::resource("/api/chat")
            .route(web::post().to(chat))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::route().to(method_not_allowed)),
    );
}

pub async fn startup(config: RelayConfig, state: RelayState) -> std::io::Result<()> {
    let app_state = web::Data::new(state);

    // default level is info
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!(
        "starting chat-relay at {}:{} (echo={})",
        config.host,
        config.port,
        config.echo
    );

    HttpServer::new(move || {
        actix_web::App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors_headers())
            .app_data(app_state.clone())
            .configure(configure)
    })
    .bind((config.host, config.port))?
    .run()
    .await
}
