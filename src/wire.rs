use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpStream;
use tokio_util::codec::{Framed, LinesCodec, LinesCodecError};

use crate::engine::{Engine, EngineError};
use crate::limits::MAX_LINE_BYTES;
use crate::model::{BookingId, BookingRequest, CustomerId, RoomId};
use crate::observability;

/// One request per line: a JSON object tagged by `"op"`.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    FindAvailableRoom {
        start: NaiveDate,
        end: NaiveDate,
    },
    CreateBooking {
        customer_id: CustomerId,
        start: NaiveDate,
        end: NaiveDate,
    },
    FullyOccupiedDates {
        start: NaiveDate,
        end: NaiveDate,
    },
    AddRoom {
        description: String,
    },
    ListRooms,
    ListBookings,
    GetRoom {
        id: RoomId,
    },
    GetBooking {
        id: BookingId,
    },
}

/// Serve one connection: read newline-delimited JSON requests, answer each
/// with exactly one response line. Malformed input gets an error response;
/// the connection stays open until the peer closes it.
pub async fn process_connection(
    socket: TcpStream,
    engine: Arc<Engine>,
) -> Result<(), LinesCodecError> {
    let mut framed = Framed::new(socket, LinesCodec::new_with_max_length(MAX_LINE_BYTES));

    while let Some(line) = framed.next().await {
        let line = line?;
        let reply = match serde_json::from_str::<Request>(&line) {
            Ok(request) => {
                let label = observability::request_label(&request);
                let started = Instant::now();
                let outcome = execute(&engine, request).await;
                metrics::histogram!(observability::REQUEST_DURATION_SECONDS, "op" => label)
                    .record(started.elapsed().as_secs_f64());
                match outcome {
                    Ok(data) => {
                        metrics::counter!(
                            observability::REQUESTS_TOTAL,
                            "op" => label,
                            "status" => "ok"
                        )
                        .increment(1);
                        json!({ "ok": true, "data": data })
                    }
                    Err(e) => {
                        metrics::counter!(
                            observability::REQUESTS_TOTAL,
                            "op" => label,
                            "status" => "error"
                        )
                        .increment(1);
                        tracing::debug!(op = label, error = %e, "request failed");
                        json!({ "ok": false, "error": e.to_string() })
                    }
                }
            }
            Err(e) => json!({ "ok": false, "error": format!("bad request: {e}") }),
        };
        framed.send(reply.to_string()).await?;
    }

    Ok(())
}

async fn execute(engine: &Engine, request: Request) -> Result<serde_json::Value, EngineError> {
    match request {
        Request::FindAvailableRoom { start, end } => {
            let room_id = engine.find_available_room(start, end).await?;
            Ok(json!({ "room_id": room_id }))
        }
        Request::CreateBooking {
            customer_id,
            start,
            end,
        } => {
            let booking = engine
                .create_booking(BookingRequest {
                    customer_id,
                    start,
                    end,
                })
                .await?;
            Ok(json!({ "created": booking.is_some(), "booking": booking }))
        }
        Request::FullyOccupiedDates { start, end } => {
            let dates = engine.fully_occupied_dates(start, end).await?;
            Ok(json!({ "dates": dates }))
        }
        Request::AddRoom { description } => {
            let room = engine.add_room(description).await?;
            Ok(json!({ "room": room }))
        }
        Request::ListRooms => Ok(json!({ "rooms": engine.list_rooms().await? })),
        Request::ListBookings => Ok(json!({ "bookings": engine.list_bookings().await? })),
        Request::GetRoom { id } => Ok(json!({ "room": engine.room(id).await? })),
        Request::GetBooking { id } => Ok(json!({ "booking": engine.booking(id).await? })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_tagged_ops() {
        let req: Request =
            serde_json::from_str(r#"{"op":"find_available_room","start":"2024-06-10","end":"2024-06-12"}"#)
                .unwrap();
        assert!(matches!(req, Request::FindAvailableRoom { .. }));

        let req: Request = serde_json::from_str(r#"{"op":"list_rooms"}"#).unwrap();
        assert!(matches!(req, Request::ListRooms));
    }

    #[test]
    fn unknown_op_is_rejected() {
        let err = serde_json::from_str::<Request>(r#"{"op":"drop_tables"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn missing_dates_are_rejected() {
        let err = serde_json::from_str::<Request>(r#"{"op":"create_booking","customer_id":1}"#);
        assert!(err.is_err());
    }
}
