use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

pub async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_reports_ok() {
        let Json(first) = healthz().await;
        let Json(second) = healthz().await;
        assert_eq!(first.status, "ok");
        assert_eq!(first.status, second.status);
    }
}
