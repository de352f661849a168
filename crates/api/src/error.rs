use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'a str,
    message: String,
}

impl actix_web::error::ResponseError for PlannerError {
    fn status_code(&self) -> StatusCode {
        match *self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadClientData(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .json(ErrorBody {
                status: "error",
                message: self.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};

    #[actix_web::test]
    async fn renders_json_error_body() {
        let err = PlannerError::NotFound("The task with id: 1, was not found.".into());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(
            body["message"],
            "404 Not found. Error message: `The task with id: 1, was not found.`"
        );
    }
}
