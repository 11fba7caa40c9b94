use anyhow::Result;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use chrono::NaiveDate;

use super::{new_hotel, setup_test_db};
use crate::reservation::StayRange;
use crate::room::NewRoom;
use crate::{hotel, reservation, room, RoomType};

#[tokio::test]
async fn test_hotel_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = hotel::create(&db, new_hotel("MyHotel", "MyHotel@Gmail.com")).await?;
    assert_eq!(created.email, "myhotel@gmail.com");
    assert_eq!(created.role, "hotel");
    assert_eq!(created.hotel_type()?, crate::HotelType::Hotel);

    let by_email = hotel::find_by_email(&db, "myhotel@gmail.com").await?;
    assert_eq!(by_email.map(|h| h.id), Some(created.id));

    let by_name = hotel::find_by_name_in_city(&db, "MyHotel", "Jaipur").await?;
    assert!(by_name.is_some());
    assert!(hotel::find_by_name_in_city(&db, "MyHotel", "Delhi").await?.is_none());

    hotel::Entity::delete_by_id(created.id).exec(&db).await?;
    assert!(hotel::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_hotel_name_unique_per_city() -> Result<()> {
    let db = setup_test_db().await?;
    hotel::create(&db, new_hotel("MyHotel", "first@hotel.com")).await?;
    let again = hotel::create(&db, new_hotel("MyHotel", "second@hotel.com")).await;
    assert!(matches!(again, Err(crate::errors::ModelError::Duplicate(_))));
    Ok(())
}

#[tokio::test]
async fn test_hotel_create_validates() -> Result<()> {
    let db = setup_test_db().await?;
    let mut bad = new_hotel("MyHotel", "not-an-email");
    assert!(matches!(hotel::create(&db, bad.clone()).await, Err(crate::errors::ModelError::Validation(_))));
    bad.email = "ok@hotel.com".into();
    bad.address.city = " ".into();
    assert!(hotel::create(&db, bad).await.is_err());
    Ok(())
}

#[tokio::test]
async fn test_room_number_unique_per_hotel() -> Result<()> {
    let db = setup_test_db().await?;
    let h1 = hotel::create(&db, new_hotel("One", "one@hotel.com")).await?;
    let h2 = hotel::create(&db, new_hotel("Two", "two@hotel.com")).await?;
    let input = NewRoom { room_number: 1001, room_type: RoomType::Ac, capacity: 2, price: 5000.0, available: true };

    room::create(&db, h1.id, &input).await?;
    // same number in another hotel is fine
    room::create(&db, h2.id, &input).await?;
    // the unique index rejects a duplicate within one hotel
    assert!(matches!(room::create(&db, h1.id, &input).await, Err(crate::errors::ModelError::Duplicate(_))));

    let rooms = room::list_by_hotel(&db, h1.id).await?;
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_type()?, RoomType::Ac);
    Ok(())
}

#[tokio::test]
async fn test_reservation_create_and_query() -> Result<()> {
    let db = setup_test_db().await?;
    let h = hotel::create(&db, new_hotel("MyHotel", "myhotel@gmail.com")).await?;
    let r = room::create(&db, h.id, &NewRoom { room_number: 1001, room_type: RoomType::Ac, capacity: 2, price: 5000.0, available: true }).await?;

    let range = StayRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
    )?;
    let res = reservation::create(&db, &r, None, range).await?;
    assert!(res.is_open());
    assert_eq!(res.hotel_id, Some(h.id));
    assert!(res.overlaps(&range));

    let found = reservation::Entity::find()
        .filter(reservation::Column::RoomId.eq(r.id))
        .all(&db)
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].check_in, range.check_in());
    Ok(())
}
