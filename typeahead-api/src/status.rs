#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    NotFound,
    InternalServerError,
    ServiceUnavailable,
    Other(u16),
}

impl StatusCode {
    pub fn from_u16(code: u16) -> Self {
        match code {
            200 => StatusCode::Ok,
            400 => StatusCode::BadRequest,
            404 => StatusCode::NotFound,
            500 => StatusCode::InternalServerError,
            503 => StatusCode::ServiceUnavailable,
            other => StatusCode::Other(other),
        }
    }

    pub fn as_u16(self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::ServiceUnavailable => 503,
            StatusCode::Other(code) => code,
        }
    }

    /// Any 2xx code.
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.as_u16())
    }
}
