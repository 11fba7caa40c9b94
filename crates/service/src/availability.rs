//! Which rooms of a hotel can be booked for a stay.

use std::collections::HashSet;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, instrument};
use uuid::Uuid;

use models::reservation::{self, StayRange};
use models::{hotel, room};
use crate::errors::ServiceError;

/// Rooms flagged available that no open reservation holds during `range`.
///
/// Without a range the flag alone decides. Reservations for other rooms and
/// closed reservations never exclude anything.
pub fn filter_available(
    rooms: Vec<room::Model>,
    reservations: &[reservation::Model],
    range: Option<&StayRange>,
) -> Vec<room::Model> {
    let taken: HashSet<Uuid> = match range {
        Some(range) => reservations
            .iter()
            .filter(|r| r.is_open() && r.overlaps(range))
            .filter_map(|r| r.room_id)
            .collect(),
        None => HashSet::new(),
    };
    rooms.into_iter().filter(|r| r.available && !taken.contains(&r.id)).collect()
}

#[instrument(skip(db), fields(hotel_id = %hotel_id))]
pub async fn available_rooms<C: ConnectionTrait>(
    db: &C,
    hotel_id: Uuid,
    range: Option<StayRange>,
) -> Result<Vec<room::Model>, ServiceError> {
    if hotel::Entity::find_by_id(hotel_id).one(db).await?.is_none() {
        return Err(ServiceError::not_found("hotel"));
    }
    let rooms = room::Entity::find()
        .filter(room::Column::HotelId.eq(hotel_id))
        .filter(room::Column::Available.eq(true))
        .order_by_asc(room::Column::RoomNumber)
        .all(db)
        .await?;
    let reservations = match (&range, rooms.is_empty()) {
        (Some(range), false) => {
            let ids: Vec<Uuid> = rooms.iter().map(|r| r.id).collect();
            reservation::Entity::find()
                .filter(reservation::Column::RoomId.is_in(ids))
                .filter(reservation::Column::Status.ne(models::ReservationStatus::Closed.as_str()))
                .filter(reservation::Column::CheckIn.lt(range.check_out()))
                .filter(reservation::Column::CheckOut.gt(range.check_in()))
                .all(db)
                .await?
        }
        _ => Vec::new(),
    };
    let free = filter_available(rooms, &reservations, range.as_ref());
    debug!(free = free.len(), "availability_evaluated");
    if free.is_empty() {
        return Err(ServiceError::NoAvailability("no rooms available for the requested dates".into()));
    }
    Ok(free)
}
