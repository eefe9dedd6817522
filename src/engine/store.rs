use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::{Booking, BookingId, NewBooking, Room, RoomId};

/// Opaque failure surfaced by a store implementation. The engine
/// propagates these unchanged — transient-failure policy belongs to the
/// store and its caller, not to the decision logic.
#[derive(Debug)]
pub struct StoreError(pub String);

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// The persistence contract consumed by the engine. Bulk reads return
/// snapshots; the engine holds no state across calls.
#[async_trait]
pub trait Store: Send + Sync {
    /// Every room, ascending id. Deterministic order is part of the
    /// contract: "first available room" means the lowest-id free room.
    async fn all_rooms(&self) -> Result<Vec<Room>, StoreError>;

    /// Every booking, ascending id, inactive records included — filtering
    /// by `is_active` is the engine's job, not the store's.
    async fn all_bookings(&self) -> Result<Vec<Booking>, StoreError>;

    /// Assigns the next room id and returns the stored record.
    async fn insert_room(&self, description: String) -> Result<Room, StoreError>;

    /// Assigns persistent identity to `new` and returns the stored record.
    async fn insert_booking(&self, new: NewBooking) -> Result<Booking, StoreError>;

    async fn room_by_id(&self, id: RoomId) -> Result<Option<Room>, StoreError>;

    async fn booking_by_id(&self, id: BookingId) -> Result<Option<Booking>, StoreError>;
}

/// In-memory store backing the service binary and tests. Ids are assigned
/// from 1 upward.
pub struct MemoryStore {
    rooms: DashMap<RoomId, Room>,
    bookings: DashMap<BookingId, Booking>,
    next_room_id: AtomicU64,
    next_booking_id: AtomicU64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            rooms: DashMap::new(),
            bookings: DashMap::new(),
            next_room_id: AtomicU64::new(1),
            next_booking_id: AtomicU64::new(1),
        }
    }

    /// Install a booking verbatim, id included — the out-of-band path the
    /// engine never takes. This is how inactive or malformed records enter
    /// in tests and embedders.
    pub fn seed_booking(&self, booking: Booking) {
        self.next_booking_id
            .fetch_max(booking.id + 1, Ordering::SeqCst);
        self.bookings.insert(booking.id, booking);
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn all_rooms(&self) -> Result<Vec<Room>, StoreError> {
        let mut rooms: Vec<Room> = self.rooms.iter().map(|e| e.value().clone()).collect();
        rooms.sort_by_key(|r| r.id);
        Ok(rooms)
    }

    async fn all_bookings(&self) -> Result<Vec<Booking>, StoreError> {
        let mut bookings: Vec<Booking> =
            self.bookings.iter().map(|e| e.value().clone()).collect();
        bookings.sort_by_key(|b| b.id);
        Ok(bookings)
    }

    async fn insert_room(&self, description: String) -> Result<Room, StoreError> {
        let id = self.next_room_id.fetch_add(1, Ordering::SeqCst);
        let room = Room { id, description };
        self.rooms.insert(id, room.clone());
        Ok(room)
    }

    async fn insert_booking(&self, new: NewBooking) -> Result<Booking, StoreError> {
        let id = self.next_booking_id.fetch_add(1, Ordering::SeqCst);
        let booking = Booking {
            id,
            customer_id: new.customer_id,
            room_id: new.room_id,
            span: new.span,
            is_active: new.is_active,
        };
        self.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn room_by_id(&self, id: RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.rooms.get(&id).map(|e| e.value().clone()))
    }

    async fn booking_by_id(&self, id: BookingId) -> Result<Option<Booking>, StoreError> {
        Ok(self.bookings.get(&id).map(|e| e.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DateSpan;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[tokio::test]
    async fn room_ids_are_sequential_from_one() {
        let store = MemoryStore::new();
        let a = store.insert_room("A".into()).await.unwrap();
        let b = store.insert_room("B".into()).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn reads_are_ascending_by_id() {
        let store = MemoryStore::new();
        for (id, start) in [(5, 10), (1, 12), (3, 14)] {
            store.seed_booking(Booking {
                id,
                customer_id: 1,
                room_id: 1,
                span: DateSpan::new(d(start), d(start + 1)),
                is_active: true,
            });
        }
        let ids: Vec<BookingId> = store
            .all_bookings()
            .await
            .unwrap()
            .iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[tokio::test]
    async fn seed_bumps_the_id_counter() {
        let store = MemoryStore::new();
        store.seed_booking(Booking {
            id: 9,
            customer_id: 1,
            room_id: 1,
            span: DateSpan::new(d(10), d(20)),
            is_active: true,
        });
        let next = store
            .insert_booking(NewBooking {
                customer_id: 2,
                room_id: 2,
                span: DateSpan::new(d(21), d(22)),
                is_active: true,
            })
            .await
            .unwrap();
        assert_eq!(next.id, 10);
    }

    #[tokio::test]
    async fn lookups_by_id() {
        let store = MemoryStore::new();
        let room = store.insert_room("Seaview".into()).await.unwrap();
        assert_eq!(store.room_by_id(room.id).await.unwrap(), Some(room));
        assert_eq!(store.room_by_id(99).await.unwrap(), None);
        assert_eq!(store.booking_by_id(1).await.unwrap(), None);
    }
}
