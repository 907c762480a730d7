use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{
    get,
    http::{header, StatusCode},
    middleware, post,
    web::{self, Data},
    App, HttpRequest, HttpResponse, HttpServer, Responder, ResponseError,
};
use chrono::Local;
use common::req::{HealthResponse, StatusResponse, API_KEY_HEADER, SERVICE_NAME};
use log::info;

use crate::{
    config::Config,
    gateway::{too_large, IngestError, IngestGateway},
    query::QueryService,
    store::SnapshotStore,
    utils::iso_timestamp,
};

const DASHBOARD: &str = include_str!("../static/index.html");

impl ResponseError for IngestError {
    fn status_code(&self) -> StatusCode {
        match self {
            IngestError::Unauthorized => StatusCode::UNAUTHORIZED,
            IngestError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(StatusResponse::error(self.to_string()))
    }
}

#[get("/")]
async fn dashboard() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(DASHBOARD)
}

// the body is read by hand, after the key check, so every rejection is a 401 or 400 json body
#[post("/api/data")]
async fn api_data(
    req: HttpRequest,
    payload: web::Payload,
    gateway: web::Data<IngestGateway>,
) -> Result<impl Responder, IngestError> {
    let key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    gateway.authorize(key)?;

    let body = match payload.to_bytes_limited(gateway.max_body()).await {
        Ok(Ok(body)) => body,
        Ok(Err(e)) => return Err(IngestError::BadRequest(e.to_string())),
        Err(_) => return Err(too_large()),
    };

    gateway.ingest(key, &body)?;
    Ok(web::Json(StatusResponse::ok()))
}

#[get("/api/latest")]
async fn api_latest(query: web::Data<QueryService>) -> impl Responder {
    web::Json(query.latest())
}

#[get("/health")]
async fn health() -> impl Responder {
    web::Json(HealthResponse {
        status: "online".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: iso_timestamp(Local::now()),
    })
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard)
        .service(api_data)
        .service(api_latest)
        .service(health);
}

fn cors(origin: Option<&str>) -> Cors {
    let cors = match origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .allowed_header("x-api-key")
        .max_age(3600)
}

pub async fn new_http_server(config: &Config, store: Arc<SnapshotStore>) -> io::Result<()> {
    let gateway = Data::new(
        IngestGateway::new(config.api_key.clone(), store.clone()).with_max_body(config.max_body),
    );
    let query = Data::new(QueryService::new(store));
    let cors_origin = config.cors_origin.clone();

    info!("listening on {}:{}", config.bind, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(gateway.clone())
            .app_data(query.clone())
            .configure(routes)
            .wrap(cors(cors_origin.as_deref()))
            .wrap(middleware::Logger::default())
    })
    .bind((config.bind.as_str(), config.port))?
    .run()
    .await
}
