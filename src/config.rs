
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_API").unwrap_or("http://localhost:3001")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_API").unwrap_or("")  // Same origin in production
}

/// Joins the backend base URL and an absolute API path.
pub fn api_url(path: &str) -> String {
    join_url(get_backend_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_does_not_double_slashes() {
        assert_eq!(join_url("http://api.test/", "/api/category"), "http://api.test/api/category");
        assert_eq!(join_url("http://api.test", "api/category"), "http://api.test/api/category");
    }

    #[test]
    fn empty_base_stays_origin_relative() {
        assert_eq!(join_url("", "/api/utils/get-bento"), "/api/utils/get-bento");
    }
}
