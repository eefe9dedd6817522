use chrono::NaiveDate;

use crate::limits::MAX_QUERY_SPAN_DAYS;
use crate::model::{Booking, BookingId, DateSpan, Room, RoomId};

use super::{availability, validate, Engine, EngineError};

impl Engine {
    /// First room free for the closed interval `[start, end]`, lowest id
    /// first. `Ok(None)` when every room has an overlapping active booking
    /// — a normal outcome, distinct from an invalid request.
    ///
    /// `start` must be strictly after the clock's today and no later than
    /// `end`; both checks run before any store read.
    pub async fn find_available_room(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<RoomId>, EngineError> {
        validate::future_ordered(start, end, self.clock.today())?;
        let rooms = self.store.all_rooms().await?;
        let bookings = self.store.all_bookings().await?;
        let free = availability::find_free_room(&rooms, &bookings, DateSpan::new(start, end));
        tracing::debug!(%start, %end, free = ?free, "availability resolved");
        Ok(free)
    }

    /// Calendar days in `[start, end]` on which every room is booked,
    /// ascending. Historical ranges are allowed; only ordering is
    /// validated. An empty inventory yields no occupied days.
    pub async fn fully_occupied_dates(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, EngineError> {
        validate::ordered(start, end)?;
        let span = DateSpan::new(start, end);
        if span.duration_days() > MAX_QUERY_SPAN_DAYS {
            return Err(EngineError::LimitExceeded("query window too wide"));
        }
        let rooms = self.store.all_rooms().await?;
        let bookings = self.store.all_bookings().await?;
        Ok(availability::fully_occupied_dates(&rooms, &bookings, span))
    }

    pub async fn list_rooms(&self) -> Result<Vec<Room>, EngineError> {
        Ok(self.store.all_rooms().await?)
    }

    pub async fn list_bookings(&self) -> Result<Vec<Booking>, EngineError> {
        Ok(self.store.all_bookings().await?)
    }

    pub async fn room(&self, id: RoomId) -> Result<Option<Room>, EngineError> {
        Ok(self.store.room_by_id(id).await?)
    }

    pub async fn booking(&self, id: BookingId) -> Result<Option<Booking>, EngineError> {
        Ok(self.store.booking_by_id(id).await?)
    }
}
