use actix_cors::Cors;
use actix_web::http::header;

/// Build CORS middleware for the browser client.
///
/// Origins come from configuration; entries that are empty, `null`, or not
/// http(s) are ignored. With nothing valid configured the localhost dev
/// origins are allowed.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut effective: Vec<&str> = allowed_origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();

    if effective.is_empty() {
        effective = vec!["http://localhost:3000", "http://127.0.0.1:3000"];
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in effective {
        cors = cors.allowed_origin(origin);
    }

    cors
}
