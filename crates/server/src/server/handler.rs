mod authenticated_user;
mod change_seats;
mod get_webinar;
mod organize_webinar;

use axum::{http::StatusCode, Json, Router};

use command_use_case::{change_seats::HasChangeSeats, organize_webinar::HasOrganizeWebinar};
use query_use_case::get_webinar::HasGetWebinar;

pub(crate) use self::authenticated_user::AuthenticatedUser;

pub fn router<
    T: Clone + HasChangeSeats + HasGetWebinar + HasOrganizeWebinar + Send + Sync + 'static,
>() -> Router<T> {
    Router::new()
        .merge(change_seats::router())
        .merge(get_webinar::router())
        .merge(organize_webinar::router())
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub(crate) struct ErrorResponseBody {
    pub(crate) error: String,
}

pub(crate) type ErrorResponse = (StatusCode, Json<ErrorResponseBody>);

pub(crate) fn error_response<E: ToString>(status: StatusCode, error: E) -> ErrorResponse {
    (
        status,
        Json(ErrorResponseBody {
            error: error.to_string(),
        }),
    )
}

pub(crate) fn internal_server_error() -> ErrorResponse {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// A seat count sent either as a JSON number or as a numeric string.
///
/// Any other value deserializes to `Invalid`.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub(crate) enum SeatsParameter {
    Number(i64),
    Float(f64),
    Text(String),
    #[serde(skip_serializing)]
    Invalid(serde::de::IgnoredAny),
}

fn whole_number(n: f64) -> Option<i64> {
    (n.is_finite() && n.fract() == 0.0 && n.abs() <= i64::MAX as f64).then_some(n as i64)
}

impl TryFrom<SeatsParameter> for u32 {
    type Error = ErrorResponse;

    fn try_from(value: SeatsParameter) -> Result<Self, Self::Error> {
        let n = match value {
            SeatsParameter::Number(n) => Some(n),
            SeatsParameter::Float(n) => whole_number(n),
            SeatsParameter::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
            }
            SeatsParameter::Invalid(_) => None,
        };
        n.and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "Invalid seats"))
    }
}
