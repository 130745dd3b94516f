use actix_cors::Cors;

/// 只读 API，放开来源，不携带凭据
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
