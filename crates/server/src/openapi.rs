use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(ToSchema)]
pub struct AddressDoc {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub country: String,
}

#[derive(ToSchema)]
pub struct RegisterHotelDoc {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub telephone: Option<String>,
    pub address: AddressDoc,
    /// hotel | motel | lodge | resort | homestay
    pub hotel_type: String,
}

#[derive(ToSchema)]
pub struct RegisterCustomerDoc {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: AddressDoc,
}

#[derive(ToSchema)]
pub struct NewRoomDoc {
    pub room_number: i32,
    /// ac | non_ac | deluxe | suite
    pub room_type: String,
    pub capacity: i32,
    pub price: f64,
    pub available: Option<bool>,
}

/// `{"field": "<column>", "value": <typed payload>}`
#[derive(ToSchema)]
pub struct FieldUpdateDoc {
    pub field: String,
    pub value: serde_json::Value,
}

#[derive(ToSchema)]
pub struct UpdateHotelDoc { pub password: String, pub update: FieldUpdateDoc }

#[derive(ToSchema)]
pub struct UpdateRoomDoc { pub password: String, pub update: FieldUpdateDoc }

#[derive(ToSchema)]
pub struct PasswordDoc { pub password: String }

#[derive(ToSchema)]
pub struct NewReservationDoc {
    pub room_id: Uuid,
    /// YYYY-MM-DD
    pub check_in: String,
    /// YYYY-MM-DD, exclusive
    pub check_out: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::hotels::register,
        crate::routes::hotels::get_one,
        crate::routes::hotels::in_city,
        crate::routes::hotels::available_rooms,
        crate::routes::hotels::near_me,
        crate::routes::hotels::update_me,
        crate::routes::hotels::deactivate_me,
        crate::routes::customers::register,
        crate::routes::rooms::create,
        crate::routes::rooms::list,
        crate::routes::rooms::update,
        crate::routes::rooms::remove,
        crate::routes::reservations::create,
        crate::routes::reservations::list,
        crate::routes::reservations::close,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            AddressDoc,
            RegisterHotelDoc,
            RegisterCustomerDoc,
            NewRoomDoc,
            FieldUpdateDoc,
            UpdateHotelDoc,
            UpdateRoomDoc,
            PasswordDoc,
            NewReservationDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "hotels"),
        (name = "customers"),
        (name = "rooms"),
        (name = "reservations")
    )
)]
pub struct ApiDoc;
