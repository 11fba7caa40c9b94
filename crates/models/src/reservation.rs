use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use uuid::Uuid;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::ReservationStatus;
use crate::errors::ModelError;
use crate::{customer, hotel, room};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub room_id: Option<Uuid>,
    pub hotel_id: Option<Uuid>,
    pub customer_id: Option<Uuid>,
    pub check_in: Date,
    pub check_out: Date,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Room,
    Hotel,
    Customer,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Room => Entity::belongs_to(room::Entity).from(Column::RoomId).to(room::Column::Id).into(),
            Relation::Hotel => Entity::belongs_to(hotel::Entity).from(Column::HotelId).to(hotel::Column::Id).into(),
            Relation::Customer => Entity::belongs_to(customer::Entity).from(Column::CustomerId).to(customer::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Half-open stay `[check_in, check_out)`; the check-out day is free for the
/// next guest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ModelError> {
        if check_in >= check_out {
            return Err(ModelError::Validation("check_in must be before check_out".into()));
        }
        Ok(Self { check_in, check_out })
    }

    pub fn check_in(&self) -> NaiveDate { self.check_in }
    pub fn check_out(&self) -> NaiveDate { self.check_out }
    pub fn nights(&self) -> i64 { (self.check_out - self.check_in).num_days() }

    pub fn overlaps(&self, other: &StayRange) -> bool {
        intervals_overlap(self.check_in, self.check_out, other.check_in, other.check_out)
    }
}

fn intervals_overlap(a_start: NaiveDate, a_end: NaiveDate, b_start: NaiveDate, b_end: NaiveDate) -> bool {
    a_start < b_end && a_end > b_start
}

impl Model {
    pub fn status(&self) -> Result<ReservationStatus, ModelError> { self.status.parse() }

    /// Anything not explicitly closed still holds the room.
    pub fn is_open(&self) -> bool { self.status != ReservationStatus::Closed.as_str() }

    pub fn overlaps(&self, range: &StayRange) -> bool {
        intervals_overlap(range.check_in, range.check_out, self.check_in, self.check_out)
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    room: &room::Model,
    customer_id: Option<Uuid>,
    range: StayRange,
) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        room_id: Set(Some(room.id)),
        hotel_id: Set(Some(room.hotel_id)),
        customer_id: Set(customer_id),
        check_in: Set(range.check_in),
        check_out: Set(range.check_out),
        status: Set(ReservationStatus::Open.as_str().to_string()),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}
