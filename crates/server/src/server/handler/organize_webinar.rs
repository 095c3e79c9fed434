use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json, Router,
};

use command_use_case::{self, organize_webinar::HasOrganizeWebinar};

use crate::server::handler::{
    error_response, internal_server_error, AuthenticatedUser, ErrorResponse, SeatsParameter,
};

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody {
    end_date: String,
    seats: SeatsParameter,
    start_date: String,
    title: String,
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    id: String,
}

impl From<command_use_case::organize_webinar::Output> for ResponseBody {
    fn from(
        command_use_case::organize_webinar::Output { webinar_id }: command_use_case::organize_webinar::Output,
    ) -> Self {
        Self { id: webinar_id }
    }
}

async fn handler<T: HasOrganizeWebinar>(
    State(state): State<T>,
    AuthenticatedUser(user): AuthenticatedUser,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseBody>), ErrorResponse> {
    let Json(RequestBody {
        end_date,
        seats,
        start_date,
        title,
    }) = body.map_err(|rejection| error_response(StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let input = command_use_case::organize_webinar::Input {
        end_date,
        seats: u32::try_from(seats)?,
        start_date,
        title,
        user,
    };
    let use_case = state.organize_webinar();
    let output = use_case.execute(input).await.map_err(|e| {
        use command_use_case::organize_webinar::Error as E;
        match e {
            E::WebinarCreate(_) => internal_server_error(),
            E::InvalidEndDate(_)
            | E::InvalidSchedule
            | E::InvalidStartDate(_)
            | E::InvalidTitle
            | E::NoSeats
            | E::TooSoon
            | E::TooManySeats => error_response(StatusCode::BAD_REQUEST, e),
        }
    })?;
    Ok((StatusCode::CREATED, Json(ResponseBody::from(output))))
}

pub fn router<T: Clone + HasOrganizeWebinar + Send + Sync + 'static>() -> Router<T> {
    Router::new().route("/webinars", axum::routing::post(handler::<T>))
}
