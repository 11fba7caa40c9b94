use chrono::NaiveDate;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use models::reservation::{self, StayRange};
use models::{room, ReservationStatus, Role};
use crate::accounts::current_customer;
use crate::auth::Principal;
use crate::errors::ServiceError;

/// Booking request from a customer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewReservation {
    pub room_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Book a room for the calling customer.
///
/// The room row stays locked between the overlap check and the insert.
#[instrument(skip(db, principal, input), fields(customer_id = %principal.id, room_id = %input.room_id))]
pub async fn create_reservation(
    db: &DatabaseConnection,
    principal: &Principal,
    input: NewReservation,
) -> Result<reservation::Model, ServiceError> {
    let customer = current_customer(db, principal).await?;
    let range = StayRange::new(input.check_in, input.check_out)?;

    let txn = db.begin().await?;
    let target = room::Entity::find_by_id(input.room_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| ServiceError::not_found("room"))?;
    if !target.available {
        txn.rollback().await?;
        return Err(ServiceError::NoAvailability("room is not available".into()));
    }

    let clashes = reservation::Entity::find()
        .filter(reservation::Column::RoomId.eq(target.id))
        .filter(reservation::Column::Status.ne(ReservationStatus::Closed.as_str()))
        .filter(reservation::Column::CheckIn.lt(range.check_out()))
        .filter(reservation::Column::CheckOut.gt(range.check_in()))
        .count(&txn)
        .await?;
    if clashes > 0 {
        txn.rollback().await?;
        return Err(ServiceError::NoAvailability("room is already booked for these dates".into()));
    }

    let created = reservation::create(&txn, &target, Some(customer.id), range).await?;
    txn.commit().await?;
    info!(reservation_id = %created.id, nights = range.nights(), "reservation_created");
    Ok(created)
}

/// Close a reservation held by the calling customer or hotel.
///
/// Someone else's reservation is reported as missing. Closing twice is a no-op.
#[instrument(skip(db, principal), fields(principal_id = %principal.id))]
pub async fn close_reservation(
    db: &DatabaseConnection,
    principal: &Principal,
    reservation_id: Uuid,
) -> Result<reservation::Model, ServiceError> {
    let found = reservation::Entity::find_by_id(reservation_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("reservation"))?;
    let owner = match principal.role {
        Role::Customer => found.customer_id,
        Role::Hotel => found.hotel_id,
    };
    if owner != Some(principal.id) {
        return Err(ServiceError::not_found("reservation"));
    }
    if !found.is_open() {
        return Ok(found);
    }

    reservation::Entity::update_many()
        .col_expr(reservation::Column::Status, Expr::value(ReservationStatus::Closed.as_str()))
        .filter(reservation::Column::Id.eq(reservation_id))
        .exec(db)
        .await?;
    info!(reservation_id = %reservation_id, "reservation_closed");
    reservation::Entity::find_by_id(reservation_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("reservation"))
}

/// Close the hotel's open reservations whose check-out is on or before `today`.
pub async fn close_expired_reservations<C: ConnectionTrait>(
    db: &C,
    hotel_id: Uuid,
    today: NaiveDate,
) -> Result<u64, ServiceError> {
    let res = reservation::Entity::update_many()
        .col_expr(reservation::Column::Status, Expr::value(ReservationStatus::Closed.as_str()))
        .filter(reservation::Column::HotelId.eq(hotel_id))
        .filter(reservation::Column::Status.ne(ReservationStatus::Closed.as_str()))
        .filter(reservation::Column::CheckOut.lte(today))
        .exec(db)
        .await?;
    if res.rows_affected > 0 {
        info!(hotel_id = %hotel_id, closed = res.rows_affected, "expired_reservations_closed");
    }
    Ok(res.rows_affected)
}

/// Reservations held by the caller: a customer's bookings or a hotel's guests.
pub async fn reservations_for(
    db: &DatabaseConnection,
    principal: &Principal,
) -> Result<Vec<reservation::Model>, ServiceError> {
    let column = match principal.role {
        Role::Customer => reservation::Column::CustomerId,
        Role::Hotel => reservation::Column::HotelId,
    };
    Ok(reservation::Entity::find()
        .filter(column.eq(principal.id))
        .order_by_asc(reservation::Column::CheckIn)
        .all(db)
        .await?)
}
