use crate::value_object::{DateTime, Seats, UserId, WebinarId};

/// Minimum number of days between organizing a webinar and its start.
pub const MIN_DAYS_IN_ADVANCE: u32 = 3;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum CreateError {
    #[error("invalid schedule")]
    InvalidSchedule,
    #[error("invalid title")]
    InvalidTitle,
    #[error("Webinar must be scheduled at least {days} days in advance", days = MIN_DAYS_IN_ADVANCE)]
    TooSoon,
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ChangeSeatsError {
    #[error("User is not allowed to update this webinar")]
    NotOrganizer,
    #[error("You cannot reduce the number of seats")]
    SeatsDecreased,
    #[error("Webinar must have at most {max} seats", max = Seats::MAX)]
    SeatsOverLimit,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Webinar {
    end_date: DateTime,
    id: WebinarId,
    organizer_id: UserId,
    seats: Seats,
    start_date: DateTime,
    title: String,
}

impl Webinar {
    pub fn create(
        now: DateTime,
        organizer_id: UserId,
        title: String,
        seats: Seats,
        start_date: DateTime,
        end_date: DateTime,
    ) -> Result<Self, CreateError> {
        if title.trim().is_empty() {
            return Err(CreateError::InvalidTitle);
        }
        if end_date <= start_date {
            return Err(CreateError::InvalidSchedule);
        }
        let earliest_start = now
            .checked_add_days(MIN_DAYS_IN_ADVANCE)
            .ok_or(CreateError::InvalidSchedule)?;
        if start_date < earliest_start {
            return Err(CreateError::TooSoon);
        }
        Ok(Self {
            end_date,
            id: WebinarId::generate(),
            organizer_id,
            seats,
            start_date,
            title,
        })
    }

    pub fn reconstruct(
        id: WebinarId,
        organizer_id: UserId,
        title: String,
        start_date: DateTime,
        end_date: DateTime,
        seats: Seats,
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

    /// Returns the webinar with `seats` as its new capacity.
    ///
    /// Only the organizer may change the capacity, and it may only grow.
    pub fn change_seats(&self, user_id: &UserId, seats: u32) -> Result<Self, ChangeSeatsError> {
        if !self.is_organizer(user_id) {
            return Err(ChangeSeatsError::NotOrganizer);
        }
        if seats <= u32::from(self.seats) {
            return Err(ChangeSeatsError::SeatsDecreased);
        }
        let seats = Seats::try_from(seats).map_err(|_| ChangeSeatsError::SeatsOverLimit)?;
        Ok(Self {
            seats,
            ..self.clone()
        })
    }

    pub fn end_date(&self) -> DateTime {
        self.end_date
    }

    pub fn id(&self) -> &WebinarId {
        &self.id
    }

    pub fn is_organizer(&self, user_id: &UserId) -> bool {
        &self.organizer_id == user_id
    }

    pub fn organizer_id(&self) -> &UserId {
        &self.organizer_id
    }

    pub fn seats(&self) -> Seats {
        self.seats
    }

    pub fn start_date(&self) -> DateTime {
        self.start_date
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
