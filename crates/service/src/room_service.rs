use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use tracing::{info, instrument};
use uuid::Uuid;

use models::room::{self, NewRoom};
use crate::accounts::current_hotel;
use crate::auth::Principal;
use crate::errors::ServiceError;

#[instrument(skip(db, principal, input), fields(hotel_id = %principal.id, room_number = input.room_number))]
pub async fn add_room(db: &DatabaseConnection, principal: &Principal, input: NewRoom) -> Result<room::Model, ServiceError> {
    let hotel = current_hotel(db, principal).await?;
    input.validate()?;
    let taken = room::Entity::find()
        .filter(room::Column::HotelId.eq(hotel.id))
        .filter(room::Column::RoomNumber.eq(input.room_number))
        .one(db)
        .await?;
    if taken.is_some() {
        return Err(ServiceError::Conflict(format!("room {} already exists", input.room_number)));
    }
    let created = room::create(db, hotel.id, &input).await?;
    info!(room_id = %created.id, "room_added");
    Ok(created)
}

/// All rooms of the calling hotel, by room number.
pub async fn rooms_of_hotel(db: &DatabaseConnection, principal: &Principal) -> Result<Vec<room::Model>, ServiceError> {
    let hotel = current_hotel(db, principal).await?;
    let rooms = room::list_by_hotel(db, hotel.id).await?;
    if rooms.is_empty() {
        return Err(ServiceError::NotFound("hotel has no rooms".into()));
    }
    Ok(rooms)
}

/// A room of the calling hotel; rooms of other hotels look missing.
pub async fn get_room(db: &DatabaseConnection, principal: &Principal, room_id: Uuid) -> Result<room::Model, ServiceError> {
    let hotel = current_hotel(db, principal).await?;
    room::Entity::find_by_id(room_id)
        .filter(room::Column::HotelId.eq(hotel.id))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("room"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotel_service::register_hotel;
    use crate::test_support::{get_db, guest, hotel_input, my_hotel, room_input};
    use models::Role;

    #[tokio::test]
    async fn room_numbers_unique_per_hotel() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (hotel, first) = my_hotel(&db).await?;
        let err = add_room(&db, &hotel, room_input(1001, 4000.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        add_room(&db, &hotel, room_input(1000, 4000.0)).await?;
        let numbers: Vec<i32> = rooms_of_hotel(&db, &hotel).await?.iter().map(|r| r.room_number).collect();
        assert_eq!(numbers, vec![1000, 1001]);
        assert_eq!(get_room(&db, &hotel, first.id).await?.price, 5000.0);

        let other = register_hotel(&db, hotel_input("OtherHotel", "desk@other.in")).await?;
        let other = Principal { id: other.id, email: other.email, role: Role::Hotel };
        assert!(matches!(get_room(&db, &other, first.id).await, Err(ServiceError::NotFound(_))));

        // a writer that slipped past the lookup still gets Conflict from the index
        let raced: Result<room::Model, ServiceError> =
            room::create(&db, hotel.id, &room_input(1001, 4000.0)).await.map_err(Into::into);
        assert!(matches!(raced, Err(ServiceError::Conflict(_))));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_room_and_wrong_role() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let (hotel, first) = my_hotel(&db).await?;
        let err = add_room(&db, &hotel, room_input(7, -1.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let customer = guest(&db).await?;
        let err = add_room(&db, &customer, room_input(7, 100.0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
        let err = get_room(&db, &customer, first.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
        Ok(())
    }
}
