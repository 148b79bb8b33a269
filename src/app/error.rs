use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_derive::Serialize;
use std::error::Error as StdError;
use std::fmt;
use tracing::error;

struct ErrorKindProperties {
    status: StatusCode,
    kind: &'static str,
    title: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RouteNotFound,
    CourseNotFound,
    DbConnAcquisitionFailed,
    DbQueryFailed,
    SerializationFailed,
    ResponseBuildFailed,
}

#[cfg(test)]
impl ErrorKind {
    pub fn status(self) -> StatusCode {
        let properties: ErrorKindProperties = self.into();
        properties.status
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let properties: ErrorKindProperties = self.to_owned().into();
        write!(f, "{}", properties.title)
    }
}

impl From<ErrorKind> for ErrorKindProperties {
    fn from(k: ErrorKind) -> Self {
        match k {
            ErrorKind::RouteNotFound => ErrorKindProperties {
                status: StatusCode::NOT_FOUND,
                kind: "route_not_found",
                title: "Not Found",
            },
            ErrorKind::CourseNotFound => ErrorKindProperties {
                status: StatusCode::NOT_FOUND,
                kind: "course_not_found",
                title: "Course not found",
            },
            ErrorKind::DbConnAcquisitionFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "database_connection_acquisition_failed",
                title: "Database connection acquisition failed",
            },
            ErrorKind::DbQueryFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "database_query_failed",
                title: "Database query failed",
            },
            ErrorKind::SerializationFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "serialization_failed",
                title: "Serialization failed",
            },
            ErrorKind::ResponseBuildFailed => ErrorKindProperties {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                kind: "response_build_failed",
                title: "Response build failed",
            },
        }
    }
}

type Source = Box<dyn AsRef<dyn StdError + Send + Sync + 'static> + Send + Sync + 'static>;

pub struct Error {
    kind: ErrorKind,
    source: Option<Source>,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: &'static str,
}

impl Error {
    pub fn new<E>(kind: ErrorKind, source: E) -> Self
    where
        E: AsRef<dyn StdError + Send + Sync + 'static> + Send + Sync + 'static,
    {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    fn source_ref(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_ref().map(|s| s.as_ref().as_ref())
    }
}

#[cfg(test)]
impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let properties: ErrorKindProperties = self.kind.into();

        if properties.status.is_server_error() {
            error!(kind = properties.kind, error = ?self, "Request failed");
        }

        let body = ErrorBody {
            detail: properties.title,
        };

        (properties.status, Json(body)).into_response()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("source", &self.source_ref())
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_ref() {
            Some(source) => write!(f, "{}: {}", self.kind, source),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source_ref().map(|s| s as &(dyn StdError + 'static))
    }
}

pub trait ErrorExt<T> {
    fn error(self, kind: ErrorKind) -> Result<T, Error>;
}

impl<T, E: AsRef<dyn StdError + Send + Sync + 'static> + Send + Sync + 'static> ErrorExt<T>
    for Result<T, E>
{
    fn error(self, kind: ErrorKind) -> Result<T, Error> {
        self.map_err(|source| Error::new(kind, source))
    }
}
