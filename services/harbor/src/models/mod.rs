//! Harbor entity models and request payloads

pub mod catway;
pub mod reservation;
pub mod user;

// Re-export for convenience
pub use catway::{Catway, CatwayKind, CreateCatwayRequest, DEFAULT_CATWAY_STATE, UpdateCatwayRequest};
pub use reservation::{
    CreateReservationRequest, Reservation, ReservationDetails, UpdateReservationRequest,
};
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserResponse};
