use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::{Booking, DateSpan, Room, RoomId};

// ── Availability Algorithm ────────────────────────────────────────

/// First room in `rooms` with no active booking overlapping `span`.
///
/// `rooms` arrives in store order (ascending id), so the result is the
/// lowest-id free room. Rooms with no bookings are trivially available.
/// Returns `None` when every room has at least one overlapping active
/// booking.
pub fn find_free_room(rooms: &[Room], bookings: &[Booking], span: DateSpan) -> Option<RoomId> {
    let by_room = active_by_room(bookings);
    rooms
        .iter()
        .find(|room| {
            by_room
                .get(&room.id)
                .is_none_or(|taken| !taken.iter().any(|b| b.span.overlaps(&span)))
        })
        .map(|room| room.id)
}

/// Days in `[span.start, span.end]` on which the count of covering active
/// bookings reaches the size of the room inventory. Ascending, no
/// duplicates by construction.
///
/// An empty inventory yields no occupied days: nothing exists to occupy.
pub fn fully_occupied_dates(
    rooms: &[Room],
    bookings: &[Booking],
    span: DateSpan,
) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }
    let active: Vec<&Booking> = bookings.iter().filter(|b| b.is_active).collect();
    if active.len() < rooms.len() {
        // Fewer active bookings than rooms: no day can saturate.
        return Vec::new();
    }
    span.days()
        .filter(|day| {
            active.iter().filter(|b| b.span.contains(*day)).count() >= rooms.len()
        })
        .collect()
}

/// Active bookings grouped by room id, so the room scan does not rescan
/// the whole booking list per room.
fn active_by_room(bookings: &[Booking]) -> HashMap<RoomId, Vec<&Booking>> {
    let mut index: HashMap<RoomId, Vec<&Booking>> = HashMap::new();
    for booking in bookings.iter().filter(|b| b.is_active) {
        index.entry(booking.room_id).or_default().push(booking);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn room(id: RoomId) -> Room {
        Room {
            id,
            description: format!("room {id}"),
        }
    }

    fn booking(id: u64, room_id: RoomId, start: u32, end: u32) -> Booking {
        Booking {
            id,
            customer_id: id,
            room_id,
            span: DateSpan::new(d(start), d(end)),
            is_active: true,
        }
    }

    fn inactive(id: u64, room_id: RoomId, start: u32, end: u32) -> Booking {
        Booking {
            is_active: false,
            ..booking(id, room_id, start, end)
        }
    }

    // ── find_free_room ────────────────────────────────────

    #[test]
    fn no_bookings_first_room_wins() {
        let rooms = [room(1), room(2)];
        let free = find_free_room(&rooms, &[], DateSpan::new(d(10), d(12)));
        assert_eq!(free, Some(1));
    }

    #[test]
    fn empty_inventory_has_no_free_room() {
        let free = find_free_room(&[], &[], DateSpan::new(d(10), d(12)));
        assert_eq!(free, None);
    }

    #[test]
    fn occupied_room_is_skipped() {
        let rooms = [room(1), room(2)];
        let bookings = [booking(1, 1, 10, 20)];
        let free = find_free_room(&rooms, &bookings, DateSpan::new(d(15), d(16)));
        assert_eq!(free, Some(2));
    }

    #[test]
    fn non_overlapping_booking_leaves_room_free() {
        let rooms = [room(1), room(2)];
        let bookings = [booking(1, 1, 10, 20)];
        // Request before the booked span: room 1 is still the first free room.
        let free = find_free_room(&rooms, &bookings, DateSpan::new(d(1), d(2)));
        assert_eq!(free, Some(1));
    }

    #[test]
    fn all_rooms_booked_yields_none() {
        let rooms = [room(1), room(2)];
        let bookings = [booking(1, 1, 10, 20), booking(2, 2, 10, 20)];
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(15), d(16))),
            None
        );
    }

    #[test]
    fn boundary_day_counts_as_occupied() {
        // Request starting on the booking's last night still collides.
        let rooms = [room(1)];
        let bookings = [booking(1, 1, 10, 20)];
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(20), d(25))),
            None
        );
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(21), d(25))),
            Some(1)
        );
    }

    #[test]
    fn request_containing_booked_span_collides() {
        let rooms = [room(1), room(2)];
        let bookings = [booking(1, 1, 10, 20), booking(2, 2, 10, 20)];
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(9), d(21))),
            None
        );
    }

    #[test]
    fn inactive_bookings_do_not_block() {
        let rooms = [room(1)];
        let bookings = [inactive(1, 1, 10, 20)];
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(15), d(16))),
            Some(1)
        );
    }

    #[test]
    fn inverted_stored_span_does_not_block() {
        // Out-of-band record with start after end: inert, never overlaps.
        let rooms = [room(1)];
        let bookings = [Booking {
            id: 1,
            customer_id: 1,
            room_id: 1,
            span: DateSpan { start: d(20), end: d(10) },
            is_active: true,
        }];
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(12), d(15))),
            Some(1)
        );
    }

    #[test]
    fn multiple_bookings_per_room_all_checked() {
        let rooms = [room(1)];
        let bookings = [booking(1, 1, 1, 5), booking(2, 1, 10, 20)];
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(6), d(9))),
            Some(1)
        );
        assert_eq!(
            find_free_room(&rooms, &bookings, DateSpan::new(d(6), d(10))),
            None
        );
    }

    // ── fully_occupied_dates ──────────────────────────────

    #[test]
    fn saturated_range_reports_every_day() {
        let rooms = [room(1), room(2)];
        let bookings = [booking(1, 1, 10, 20), booking(2, 2, 10, 20)];
        let dates = fully_occupied_dates(&rooms, &bookings, DateSpan::new(d(10), d(20)));
        assert_eq!(dates.len(), 11);
        assert_eq!(dates.first(), Some(&d(10)));
        assert_eq!(dates.last(), Some(&d(20)));
    }

    #[test]
    fn more_rooms_than_bookings_reports_nothing() {
        let rooms = [room(1), room(2), room(3)];
        let bookings = [booking(1, 1, 10, 20), booking(2, 2, 10, 20)];
        assert!(fully_occupied_dates(&rooms, &bookings, DateSpan::new(d(10), d(20))).is_empty());
    }

    #[test]
    fn only_the_intersection_saturates() {
        let rooms = [room(1), room(2)];
        let bookings = [booking(1, 1, 10, 20), booking(2, 2, 15, 25)];
        let dates = fully_occupied_dates(&rooms, &bookings, DateSpan::new(d(1), d(28)));
        let expected: Vec<NaiveDate> = DateSpan::new(d(15), d(20)).days().collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn result_clipped_to_query_window() {
        let rooms = [room(1)];
        let bookings = [booking(1, 1, 10, 20)];
        let dates = fully_occupied_dates(&rooms, &bookings, DateSpan::new(d(18), d(25)));
        assert_eq!(dates, vec![d(18), d(19), d(20)]);
    }

    #[test]
    fn inactive_bookings_do_not_saturate() {
        let rooms = [room(1)];
        let bookings = [inactive(1, 1, 10, 20)];
        assert!(fully_occupied_dates(&rooms, &bookings, DateSpan::new(d(10), d(20))).is_empty());
    }

    #[test]
    fn zero_rooms_zero_occupied_days() {
        // Documented convention: an empty inventory is never occupied,
        // not vacuously always occupied.
        let bookings = [booking(1, 1, 10, 20)];
        assert!(fully_occupied_dates(&[], &bookings, DateSpan::new(d(10), d(20))).is_empty());
        assert!(fully_occupied_dates(&[], &[], DateSpan::new(d(10), d(20))).is_empty());
    }

    #[test]
    fn no_bookings_no_occupied_days() {
        let rooms = [room(1), room(2)];
        assert!(fully_occupied_dates(&rooms, &[], DateSpan::new(d(10), d(20))).is_empty());
    }

    #[test]
    fn single_day_query() {
        let rooms = [room(1), room(2)];
        let bookings = [booking(1, 1, 10, 20), booking(2, 2, 10, 20)];
        assert_eq!(
            fully_occupied_dates(&rooms, &bookings, DateSpan::new(d(15), d(15))),
            vec![d(15)]
        );
        assert!(
            fully_occupied_dates(&rooms, &bookings, DateSpan::new(d(21), d(21))).is_empty()
        );
    }
}
