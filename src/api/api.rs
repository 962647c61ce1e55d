use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{http, web, App, HttpRequest, HttpResponse, HttpResponseBuilder, HttpServer};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info, warn};
use serde_json::json;
use crate::api::api_cache::{api_service_cache_key_delete, api_service_cache_tag_delete};
use crate::api::api_pool::api_service_pool_get;
use crate::api::api_stats::{api_service_prom_get, api_service_stats_get};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::config::structs::api_config::ApiConfig;
use crate::pool::traits::connection_factory::ConnectionFactory;
use crate::ratelimit::errors::RateLimitError;
use crate::ratelimit::structs::rate_limit_decision::RateLimitDecision;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "DELETE"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes<F: ConnectionFactory>(data: Arc<ApiServiceData<F>>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found::<F>));
        cfg.service(web::resource("api/stats").route(web::get().to(api_service_stats_get::<F>)));
        cfg.service(web::resource("api/metrics").route(web::get().to(api_service_prom_get::<F>)));
        cfg.service(web::resource("api/cache/key/{key}").route(web::delete().to(api_service_cache_key_delete::<F>)));
        cfg.service(web::resource("api/cache/tag/{tag}").route(web::delete().to(api_service_cache_tag_delete::<F>)));
        cfg.service(web::resource("api/pool").route(web::get().to(api_service_pool_get::<F>)));
    })
}

/// Binds the admin listener; the caller drives the returned server future.
pub fn api_service<F: ConnectionFactory>(
    addr: SocketAddr,
    data: Arc<ApiServiceData<F>>,
) -> std::io::Result<(ServerHandle, Server)>
{
    let config = Arc::clone(&data.api_config);

    info!("[API] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub fn api_service_token(request: &HttpRequest, config: &ApiConfig) -> Option<HttpResponse>
{
    let token = web::Query::<QueryToken>::from_query(request.query_string())
        .ok()
        .and_then(|params| params.into_inner().token);
    match token {
        None => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if token_code != config.api_key {
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}

/// The `real_ip` header wins over the peer address when present.
pub fn api_service_retrieve_remote_ip(request: &HttpRequest, config: &ApiConfig) -> Result<IpAddr, ()>
{
    if let Some(header) = request.headers().get(config.real_ip.as_str()) {
        let value = header.to_str().map_err(|_| ())?;
        return IpAddr::from_str(value.trim()).map_err(|_| ());
    }
    request.peer_addr().map(|addr| addr.ip()).ok_or(())
}

/// Resolves the caller and admits the request through the `rate_limit_action`
/// policy. `Ok(None)` means the request is admitted without a decision to
/// report (no such policy, or the limiter backend failed).
pub async fn api_validation<F: ConnectionFactory>(request: &HttpRequest, data: &Data<Arc<ApiServiceData<F>>>) -> Result<Option<RateLimitDecision>, HttpResponse>
{
    let ip = match api_service_retrieve_remote_ip(request, &data.api_config) {
        Ok(ip) => ip,
        Err(_) => {
            return Err(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid ip"
            })));
        }
    };

    match data.layer.check_policy(&ip.to_string(), &data.api_config.rate_limit_action).await {
        Ok(decision) if decision.allowed => Ok(Some(decision)),
        Ok(decision) => {
            debug!("[API] Rejected {ip}, retry after {}s", decision.retry_after_secs());
            Err(api_service_builder(StatusCode::TOO_MANY_REQUESTS, Some(&decision))
                .content_type(ContentType::json())
                .json(json!({
                    "status": "rate limited",
                    "retry_after": decision.retry_after_secs()
                })))
        }
        Err(RateLimitError::UnknownPolicy(_)) => Ok(None),
        Err(e) => {
            warn!("[API] Rate limiter unavailable, admitting {ip}: {e}");
            Ok(None)
        }
    }
}

/// Response builder carrying the `X-RateLimit-*` headers of `decision`.
pub fn api_service_builder(status: StatusCode, decision: Option<&RateLimitDecision>) -> HttpResponseBuilder
{
    let mut builder = HttpResponseBuilder::new(status);
    if let Some(decision) = decision {
        for header in decision.headers() {
            builder.insert_header(header);
        }
    }
    builder
}

pub async fn api_service_not_found<F: ConnectionFactory>(request: HttpRequest, data: Data<Arc<ApiServiceData<F>>>) -> HttpResponse
{
    let decision = match api_validation(&request, &data).await {
        Ok(decision) => decision,
        Err(response) => return response,
    };

    api_service_builder(StatusCode::NOT_FOUND, decision.as_ref())
        .content_type(ContentType::json())
        .json(json!({
            "status": "not found"
        }))
}
