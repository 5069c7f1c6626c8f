use actix_cors::Cors;
use actix_web::{
    body::BoxBody,
    http::StatusCode,
    middleware::Logger,
    post,
    web::{Data, Json},
    App, HttpRequest, HttpResponse, HttpServer, Responder, ResponseError,
};
use serde::Serialize;

use dissect::app::{AnalysisResult, Analyzer, Error, Submission};

struct ApiResponder<T> {
    content: T,
}

impl<T: Serialize> Responder for ApiResponder<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse {
        HttpResponse::Ok().json(self.content)
    }
}

#[derive(Debug)]
struct ApiError(Error);

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        if let Error::Completion(cause) = &err {
            log::error!("OpenAI API error: {cause:#}");
        }
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            Error::TooShort => StatusCode::BAD_REQUEST,
            Error::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // Both outcomes share the response shape of a successful analysis: a
    // single `reply` field holding the fixed message.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(AnalysisResult {
            reply: self.0.to_string(),
        })
    }
}

#[post("/analyze")]
async fn analyze(
    analyzer: Data<Analyzer>,
    submission: Json<Submission>,
) -> Result<impl Responder, ApiError> {
    let content = analyzer.analyze(&submission).await?;
    Ok(ApiResponder { content })
}

pub struct Server {
    addr: (String, u16),
    analyzer: Data<Analyzer>,
}

impl Server {
    #[must_use]
    pub fn new(addr: (String, u16), analyzer: Analyzer) -> Self {
        Self {
            addr,
            analyzer: Data::new(analyzer),
        }
    }

    pub async fn run(self) -> std::io::Result<()> {
        let analyzer = self.analyzer;
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Logger::default())
                .wrap(Cors::permissive())
                .app_data(analyzer.clone())
                .service(analyze)
        })
        .bind(&self.addr)?;

        let handle = server.run().await;
        log::warn!("Server finished?");
        handle
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddressParseError {
    #[error("missing host")]
    MissingHost,

    #[error("missing port")]
    MissingPort,

    #[error("parse error: {0}")]
    ParsePort(#[from] std::num::ParseIntError),
}

pub fn parse_addr_option(s: &str) -> Result<(String, u16), AddressParseError> {
    let mut parts = s.split(':');
    let host = parts.next().ok_or(AddressParseError::MissingHost)?;
    let port = parts
        .next()
        .ok_or(AddressParseError::MissingPort)?
        .parse()
        .map_err(AddressParseError::ParsePort)?;

    Ok((host.to_string(), port))
}
