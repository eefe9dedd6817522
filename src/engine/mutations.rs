use crate::limits::{MAX_DESCRIPTION_LEN, MAX_ROOMS};
use crate::model::{Booking, BookingRequest, DateSpan, NewBooking, Room};

use super::{Engine, EngineError};

impl Engine {
    /// Book the first free room for the request's dates. Delegates range
    /// validation and room choice to the availability resolver, so an
    /// invalid range surfaces as the same `InvalidRange` the resolver
    /// raises.
    ///
    /// `Ok(Some(_))` carries the persisted record (exactly one store
    /// insert). `Ok(None)` means every room was taken; nothing is
    /// persisted. Not idempotent: a second call for a still-free range
    /// books again.
    pub async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> Result<Option<Booking>, EngineError> {
        let Some(room_id) = self
            .find_available_room(request.start, request.end)
            .await?
        else {
            tracing::debug!(customer = request.customer_id, "no room free, not booking");
            return Ok(None);
        };
        let booking = self
            .store
            .insert_booking(NewBooking {
                customer_id: request.customer_id,
                room_id,
                span: DateSpan::new(request.start, request.end),
                is_active: true,
            })
            .await?;
        tracing::info!(
            booking = booking.id,
            room = booking.room_id,
            customer = booking.customer_id,
            "booking created"
        );
        Ok(Some(booking))
    }

    /// Add a room to the inventory. Peripheral CRUD — the store assigns
    /// the id.
    pub async fn add_room(&self, description: String) -> Result<Room, EngineError> {
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(EngineError::LimitExceeded("room description too long"));
        }
        if self.store.all_rooms().await?.len() >= MAX_ROOMS {
            return Err(EngineError::LimitExceeded("too many rooms"));
        }
        Ok(self.store.insert_room(description).await?)
    }
}
