use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type RoomId = u64;
pub type BookingId = u64;
pub type CustomerId = u64;

/// Closed interval of calendar days `[start, end]` — both endpoints are
/// booked nights. Whole-day granularity is the only time resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "DateSpan start must not be after end");
        Self { start, end }
    }

    /// Number of calendar days covered, endpoints included.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Closed intervals overlap iff they share at least one calendar day:
    /// `!(self.end < other.start || self.start > other.end)`. Single-day
    /// spans need no special case. Inverted spans overlap nothing.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every day in the span, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

/// Immutable inventory unit. Created through the store, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
}

/// One reservation of one room for an inclusive day interval. Inactive
/// bookings are ignored by every availability and occupancy computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub span: DateSpan,
    pub is_active: bool,
}

/// Workflow input: who wants to stay and when. Built in one step; the
/// engine picks the room. Dates are raw here — validation happens in the
/// engine before any `DateSpan` is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_id: CustomerId,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Insert payload for the store, which assigns the persistent id and
/// returns the stored `Booking`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub customer_id: CustomerId,
    pub room_id: RoomId,
    pub span: DateSpan,
    pub is_active: bool,
}
