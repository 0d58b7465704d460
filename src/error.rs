use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl From<chrono::ParseError> for Error {
    fn from(_: chrono::ParseError) -> Self {
        invalid_input_error()
    }
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self.code {
            1..=99 => StatusCode::INTERNAL_SERVER_ERROR,
            102 => StatusCode::NOT_FOUND,
            103 => StatusCode::NOT_FOUND,
            104 => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self.code {
            1..=99 => "Internal Server Error",
            _ => self.message.as_str(),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn not_found_error() -> Error {
    Error {
        code: 102,
        message: "not found".into(),
    }
}

pub fn location_not_found_error() -> Error {
    Error {
        code: 103,
        message: "Местоположение не найдено.".into(),
    }
}

pub fn search_superseded_error() -> Error {
    Error {
        code: 104,
        message: "search superseded".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn reqwest_error(_: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error<T: Debug>(_: T) -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

/// User-facing text for a failed geocoding search.
pub fn search_failure_message(err: &Error) -> &str {
    match err.code {
        103 => err.message.as_str(),
        _ => "Ошибка поиска.",
    }
}

#[test]
fn client_errors_keep_their_message() {
    let err = location_not_found_error();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(search_failure_message(&err), "Местоположение не найдено.");

    let err = upstream_error();
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(search_failure_message(&err), "Ошибка поиска.");

    assert_eq!(search_superseded_error().status(), StatusCode::CONFLICT);
    assert_eq!(invalid_input_error().status(), StatusCode::BAD_REQUEST);
}
