use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// A single failing input, located by where it came from and its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub input: Option<String>,
}

impl ValidationDetail {
    pub fn missing(param: &str) -> Self {
        Self {
            loc: vec!["query".to_string(), param.to_string()],
            msg: "Field required".to_string(),
            kind: "missing",
            input: None,
        }
    }

    pub fn not_an_integer(param: &str, input: &str) -> Self {
        Self {
            loc: vec!["query".to_string(), param.to_string()],
            msg: "Input should be a valid integer, unable to parse string as an integer"
                .to_string(),
            kind: "int_parsing",
            input: Some(input.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation error")]
    Validation(Vec<ValidationDetail>),
    #[error("not found")]
    NotFound,
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Validation(vec![ValidationDetail {
            loc: vec!["query".to_string()],
            msg: rejection.body_text(),
            kind: "query_parsing",
            input: None,
        }])
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    detail: Vec<ValidationDetail>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        let error = self.to_string();
        let detail = match self {
            AppError::Validation(detail) => detail,
            AppError::NotFound => Vec::new(),
        };

        (status, Json(ErrorBody { error, detail })).into_response()
    }
}
