use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use log::info;
use serde_json::json;
use crate::api::api::{api_service_builder, api_service_token, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::pool::traits::connection_factory::ConnectionFactory;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_key_delete<F: ConnectionFactory>(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData<F>>>) -> HttpResponse
{
    let decision = match api_validation(&request, &data).await {
        Ok(decision) => decision,
        Err(response) => return response,
    };
    if let Some(response) = api_service_token(&request, &data.api_config) { return response; }

    let key = path.into_inner();
    if key.is_empty() {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad key"}));
    }

    let removed = data.layer.delete(&key).await;
    info!("[API] Deleted cache key {key} (present: {removed})");
    api_service_builder(StatusCode::OK, decision.as_ref())
        .content_type(ContentType::json())
        .json(json!({
            "status": "ok",
            "key": key,
            "removed": removed
        }))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_tag_delete<F: ConnectionFactory>(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData<F>>>) -> HttpResponse
{
    let decision = match api_validation(&request, &data).await {
        Ok(decision) => decision,
        Err(response) => return response,
    };
    if let Some(response) = api_service_token(&request, &data.api_config) { return response; }

    let tag = path.into_inner();
    if tag.is_empty() {
        return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": "bad tag"}));
    }

    let invalidated = data.layer.invalidate_tag(&tag).await;
    info!("[API] Invalidated tag {tag}: {invalidated} keys");
    api_service_builder(StatusCode::OK, decision.as_ref())
        .content_type(ContentType::json())
        .json(json!({
            "status": "ok",
            "tag": tag,
            "invalidated": invalidated
        }))
}
