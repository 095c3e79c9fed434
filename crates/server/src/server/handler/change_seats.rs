use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json, Router,
};

use command_use_case::{self, change_seats::HasChangeSeats};

use crate::server::handler::{
    error_response, internal_server_error, AuthenticatedUser, ErrorResponse, SeatsParameter,
};

#[derive(serde::Deserialize)]
struct PathParameters {
    webinar_id: String,
}

#[derive(serde::Deserialize, serde::Serialize)]
struct RequestBody {
    seats: SeatsParameter,
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
struct ResponseBody {
    message: String,
}

fn status_code(e: &command_use_case::change_seats::Error) -> StatusCode {
    use command_use_case::change_seats::Error as E;
    match e {
        E::WebinarNotFound(_) => StatusCode::NOT_FOUND,
        E::WebinarNotOrganizer => StatusCode::UNAUTHORIZED,
        E::SeatsDecreased | E::SeatsOverLimit => StatusCode::BAD_REQUEST,
        E::WebinarFind(_) | E::WebinarUpdate(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn handler<T: HasChangeSeats>(
    State(state): State<T>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(PathParameters { webinar_id }): Path<PathParameters>,
    body: Result<Json<RequestBody>, JsonRejection>,
) -> Result<Json<ResponseBody>, ErrorResponse> {
    let Json(RequestBody { seats }) =
        body.map_err(|rejection| error_response(StatusCode::BAD_REQUEST, rejection.body_text()))?;
    let input = command_use_case::change_seats::Input {
        seats: u32::try_from(seats)?,
        user,
        webinar_id,
    };
    let use_case = state.change_seats();
    use_case.execute(input).await.map_err(|e| match status_code(&e) {
        StatusCode::INTERNAL_SERVER_ERROR => internal_server_error(),
        status => error_response(status, e),
    })?;
    Ok(Json(ResponseBody {
        message: "Seats updated".to_string(),
    }))
}

pub fn router<T: Clone + HasChangeSeats + Send + Sync + 'static>() -> Router<T> {
    Router::new().route(
        "/webinars/:webinar_id/seats",
        axum::routing::post(handler::<T>),
    )
}
