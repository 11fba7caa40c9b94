//! Removal of rooms and hotels that still hold bookings.
//!
//! A target with any reservation that is not closed is never deleted; it is
//! taken off the market instead. Booking history survives every removal with
//! its room/hotel references cleared.

use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use models::{hotel, reservation, room, ReservationStatus};
use crate::accounts::authenticate_hotel;
use crate::auth::Principal;
use crate::errors::ServiceError;
use crate::reservation_service::close_expired_reservations;

/// What a removal attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GuardOutcome {
    /// Open reservations prevented the removal.
    pub blocked: bool,
    /// Availability was switched off by this call.
    pub availability_updated: bool,
}

impl GuardOutcome {
    pub fn removed() -> Self { Self { blocked: false, availability_updated: false } }

    pub fn blocked(availability_updated: bool) -> Self { Self { blocked: true, availability_updated } }

    pub fn into_result(self) -> Result<(), ServiceError> {
        if !self.blocked {
            return Ok(());
        }
        Err(ServiceError::HasOpenReservations {
            message: "there are open reservations; availability has been switched off".into(),
            availability_updated: self.availability_updated,
        })
    }
}

fn still_open() -> Condition {
    Condition::all().add(reservation::Column::Status.ne(ReservationStatus::Closed.as_str()))
}

#[instrument(skip(db, principal, password), fields(hotel_id = %principal.id, room_id = %room_id))]
pub async fn remove_room(
    db: &DatabaseConnection,
    principal: &Principal,
    room_id: Uuid,
    password: &str,
) -> Result<GuardOutcome, ServiceError> {
    authenticate_hotel(db, principal, password).await?;

    let txn = db.begin().await?;
    let target = room::Entity::find_by_id(room_id)
        .filter(room::Column::HotelId.eq(principal.id))
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("room"))?;

    let open = reservation::Entity::find()
        .filter(reservation::Column::RoomId.eq(room_id))
        .filter(still_open())
        .count(&txn)
        .await?;

    if open > 0 {
        if target.available {
            room::Entity::update_many()
                .col_expr(room::Column::Available, Expr::value(false))
                .filter(room::Column::Id.eq(room_id))
                .exec(&txn)
                .await?;
        }
        txn.commit().await?;
        info!(open, availability_updated = target.available, "room_blocked_by_reservations");
        return Ok(GuardOutcome::blocked(target.available));
    }

    let detached = reservation::Entity::update_many()
        .col_expr(reservation::Column::RoomId, Expr::value(Option::<Uuid>::None))
        .filter(reservation::Column::RoomId.eq(room_id))
        .exec(&txn)
        .await?
        .rows_affected;
    room::Entity::delete_by_id(room_id).exec(&txn).await?;
    txn.commit().await?;
    info!(detached, "room_removed");
    Ok(GuardOutcome::removed())
}

/// Deactivate the calling hotel together with its rooms.
///
/// Stays that ended on or before `today` are closed first, so only current and
/// future bookings can block.
#[instrument(skip(db, principal, password), fields(hotel_id = %principal.id))]
pub async fn deactivate_hotel(
    db: &DatabaseConnection,
    principal: &Principal,
    password: &str,
    today: NaiveDate,
) -> Result<GuardOutcome, ServiceError> {
    authenticate_hotel(db, principal, password).await?;
    let hotel_id = principal.id;

    let txn = db.begin().await?;
    hotel::Entity::find_by_id(hotel_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("hotel"))?;

    let expired = close_expired_reservations(&txn, hotel_id, today).await?;

    let room_ids: Vec<Uuid> = room::Entity::find()
        .filter(room::Column::HotelId.eq(hotel_id))
        .all(&txn)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect();

    let mut touching = Condition::any().add(reservation::Column::HotelId.eq(hotel_id));
    if !room_ids.is_empty() {
        touching = touching.add(reservation::Column::RoomId.is_in(room_ids.clone()));
    }

    let open = reservation::Entity::find()
        .filter(touching.clone())
        .filter(still_open())
        .count(&txn)
        .await?;

    if open > 0 {
        let switched = room::Entity::update_many()
            .col_expr(room::Column::Available, Expr::value(false))
            .filter(room::Column::HotelId.eq(hotel_id))
            .filter(room::Column::Available.eq(true))
            .exec(&txn)
            .await?
            .rows_affected;
        txn.commit().await?;
        info!(open, expired, switched, "hotel_blocked_by_reservations");
        return Ok(GuardOutcome::blocked(switched > 0));
    }

    let detached = reservation::Entity::update_many()
        .col_expr(reservation::Column::RoomId, Expr::value(Option::<Uuid>::None))
        .col_expr(reservation::Column::HotelId, Expr::value(Option::<Uuid>::None))
        .filter(touching)
        .exec(&txn)
        .await?
        .rows_affected;
    room::Entity::delete_many()
        .filter(room::Column::HotelId.eq(hotel_id))
        .exec(&txn)
        .await?;
    hotel::Entity::delete_by_id(hotel_id).exec(&txn).await?;
    txn.commit().await?;
    info!(rooms = room_ids.len(), detached, expired, "hotel_deactivated");
    Ok(GuardOutcome::removed())
}
