use super::api::API;
use super::error::QueryError;
use super::filters::Filters;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::collections::HashMap;
use std::path::PathBuf;

/// Thin HTTP adapter over the query operation.
///
/// Each request is dispatched to a worker and opens its own read-only
/// warehouse connection; the server itself holds no mutable state.
/// Missing warehouse files are fatal at startup, not at request time.
pub struct Server;

impl Server {
    pub async fn run(db: PathBuf, host: String, port: u16) -> anyhow::Result<()> {
        let api = web::Data::new(API::new(db.clone())?);
        log::info!(
            "range query service listening on http://{}:{} (db={})",
            host,
            port,
            db.display()
        );
        tokio::spawn(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("interrupt received, draining in-flight requests");
            }
        });
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(api.clone())
                .route("/health", web::get().to(health))
                .route("/ranges", web::get().to(ranges))
                .default_service(web::route().to(missing))
        })
        .workers(4)
        .bind((host.as_str(), port))?
        .run()
        .await?;
        Ok(())
    }
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

async fn ranges(api: web::Data<API>, req: HttpRequest) -> HttpResponse {
    let query = match web::Query::<HashMap<String, String>>::from_query(req.query_string()) {
        Ok(query) => query.into_inner(),
        Err(e) => return reject(QueryError::InvalidRequest(e.to_string())),
    };
    let api = api.into_inner();
    match web::block(move || {
        let filters = Filters::try_from(&query)?;
        api.query_ranges(&filters)
    })
    .await
    {
        Ok(Ok(payload)) => HttpResponse::Ok().json(payload),
        Ok(Err(e)) => reject(e),
        Err(e) => reject(QueryError::Internal(e.to_string())),
    }
}

async fn missing() -> HttpResponse {
    reject(QueryError::NotFound("not found".to_string()))
}

fn reject(error: QueryError) -> HttpResponse {
    let body = serde_json::json!({ "error": error.to_string() });
    match error {
        QueryError::InvalidRequest(_) => HttpResponse::BadRequest().json(body),
        QueryError::NotFound(_) => HttpResponse::NotFound().json(body),
        QueryError::Internal(_) => HttpResponse::InternalServerError().json(body),
    }
}
