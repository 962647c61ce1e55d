use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::{api_service_builder, api_service_token, api_validation};
use crate::api::structs::api_service_data::ApiServiceData;
use crate::pool::traits::connection_factory::ConnectionFactory;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_pool_get<F: ConnectionFactory>(request: HttpRequest, data: Data<Arc<ApiServiceData<F>>>) -> HttpResponse
{
    let decision = match api_validation(&request, &data).await {
        Ok(decision) => decision,
        Err(response) => return response,
    };
    if let Some(response) = api_service_token(&request, &data.api_config) { return response; }

    api_service_builder(StatusCode::OK, decision.as_ref())
        .content_type(ContentType::json())
        .json(json!({
            "stats": data.layer.pool.stats(),
            "handles": data.layer.pool.handles()
        }))
}
