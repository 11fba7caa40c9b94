//! Closed classifications stored as lowercase strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

macro_rules! string_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name { $($variant),+ }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self { $($name::$variant => $text),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
        }

        impl FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_ascii_lowercase();
                match lower.as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(ModelError::Validation(format!("unknown {}: {}", stringify!($name), s))),
                }
            }
        }
    };
}

string_enum!(HotelType {
    Hotel => "hotel",
    Motel => "motel",
    Lodge => "lodge",
    Resort => "resort",
    Homestay => "homestay",
});

string_enum!(RoomType {
    Ac => "ac",
    NonAc => "non_ac",
    Deluxe => "deluxe",
    Suite => "suite",
});

string_enum!(ReservationStatus {
    Open => "open",
    Closed => "closed",
});

string_enum!(Role {
    Hotel => "hotel",
    Customer => "customer",
});
