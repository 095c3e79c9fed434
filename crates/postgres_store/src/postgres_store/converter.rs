use std::str::FromStr as _;

use write_model::{
    aggregate::Webinar,
    value_object::{DateTime, Seats, UserId, WebinarId},
};

use crate::schema::WebinarRow;

pub(crate) fn webinar_from_row(
    row: WebinarRow,
) -> Result<Webinar, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Webinar::reconstruct(
        WebinarId::from_str(&row.id)?,
        UserId::from_str(&row.organizer_id)?,
        row.title,
        DateTime::from(row.start_date),
        DateTime::from(row.end_date),
        Seats::try_from(row.seats)?,
    ))
}

pub(crate) fn query_data_from_row(
    row: WebinarRow,
) -> Result<query_use_case::port::WebinarQueryData, Box<dyn std::error::Error + Send + Sync>> {
    Ok(query_use_case::port::WebinarQueryData {
        end_date: DateTime::from(row.end_date),
        id: WebinarId::from_str(&row.id)?,
        organizer_id: UserId::from_str(&row.organizer_id)?,
        seats: Seats::try_from(row.seats)?,
        start_date: DateTime::from(row.start_date),
        title: row.title,
    })
}

pub(crate) fn row_from_webinar(webinar: &Webinar) -> WebinarRow {
    WebinarRow {
        end_date: webinar.end_date().into(),
        id: webinar.id().to_string(),
        organizer_id: webinar.organizer_id().to_string(),
        seats: i32::from(webinar.seats()),
        start_date: webinar.start_date().into(),
        title: webinar.title().to_string(),
    }
}
