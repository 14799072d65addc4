use actix_web::error::{BlockingError, ResponseError};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use diesel::r2d2;
use diesel::result::Error as DieselError;
use std::convert::From;

use super::api::ApiResponse;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug, Display)]
pub enum Error {
    /// A request the service layer refused: id conflicts, dangling references
    /// and malformed entities all end up here.
    #[display(fmt = "{}", _0)]
    InvalidRequest(String),

    #[display(fmt = "Database error: {}", _0)]
    Database(DieselError),

    #[display(fmt = "Connection pool error: {}", _0)]
    Pool(r2d2::PoolError),

    #[display(fmt = "Store error: {}", _0)]
    Store(String),

    #[display(fmt = "Configuration error: {}", _0)]
    Config(String),

    #[display(fmt = "Blocking operation was canceled")]
    Canceled,
}

impl Error {
    pub fn invalid_request<S: Into<String>>(message: S) -> Error {
        Error::InvalidRequest(message.into())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(e) => Some(e),
            Self::Pool(e) => Some(e),
            Self::InvalidRequest(_) | Self::Store(_) | Self::Config(_) | Self::Canceled => None,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            Self::InvalidRequest(message) => HttpResponse::build(status)
                .json(ApiResponse::fail(format!("Validation error , {}", message))),
            e => {
                error!("{}", e);
                HttpResponse::build(status)
                    .json(ApiResponse::error(format!("Internal Server Error : {}", e)))
            }
        }
    }
}

impl From<DieselError> for Error {
    fn from(e: DieselError) -> Error {
        Error::Database(e)
    }
}

impl From<r2d2::PoolError> for Error {
    fn from(e: r2d2::PoolError) -> Error {
        Error::Pool(e)
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::Canceled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_is_unprocessable() {
        let e = Error::invalid_request("Bar is not present for this BarId : 99");
        assert_eq!(e.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(e.to_string(), "Bar is not present for this BarId : 99");
    }

    #[test]
    fn everything_else_is_a_server_error() {
        assert_eq!(
            Error::Store("duplicate key".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::from(DieselError::NotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
