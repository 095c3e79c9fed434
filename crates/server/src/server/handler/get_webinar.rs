use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json, Router,
};

use query_use_case::{self, get_webinar::HasGetWebinar};

use crate::server::handler::{error_response, internal_server_error, ErrorResponse};

#[derive(serde::Deserialize)]
struct PathParameters {
    webinar_id: String,
}

impl From<PathParameters> for query_use_case::get_webinar::Input {
    fn from(PathParameters { webinar_id }: PathParameters) -> Self {
        Self { webinar_id }
    }
}

#[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ResponseBody {
    end_date: String,
    id: String,
    organizer_id: String,
    seats: u32,
    start_date: String,
    title: String,
}

impl From<query_use_case::get_webinar::Output> for ResponseBody {
    fn from(
        query_use_case::get_webinar::Output {
            end_date,
            id,
            organizer_id,
            seats,
            start_date,
            title,
        }: query_use_case::get_webinar::Output,
    ) -> Self {
        Self {
            end_date,
            id,
            organizer_id,
            seats,
            start_date,
            title,
        }
    }
}

async fn handler<T: HasGetWebinar>(
    State(state): State<T>,
    Path(path_parameters): Path<PathParameters>,
) -> Result<Json<ResponseBody>, ErrorResponse> {
    let use_case = state.get_webinar();
    let output = use_case
        .execute(query_use_case::get_webinar::Input::from(path_parameters))
        .await
        .map_err(|e| match e {
            query_use_case::get_webinar::Error::WebinarNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, e)
            }
            query_use_case::get_webinar::Error::WebinarGet(_) => internal_server_error(),
        })?;
    Ok(Json(ResponseBody::from(output)))
}

pub fn router<T: Clone + HasGetWebinar + Send + Sync + 'static>() -> Router<T> {
    Router::new().route("/webinars/:webinar_id", axum::routing::get(handler::<T>))
}
