/// A row of the `webinars` table.
#[derive(Clone, Debug, sqlx::FromRow)]
pub(crate) struct WebinarRow {
    pub(crate) end_date: chrono::DateTime<chrono::Utc>,
    pub(crate) id: String,
    pub(crate) organizer_id: String,
    pub(crate) seats: i32,
    pub(crate) start_date: chrono::DateTime<chrono::Utc>,
    pub(crate) title: String,
}
