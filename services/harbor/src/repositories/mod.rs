//! Repositories for database operations
//!
//! One repository per entity type, each a thin `Clone` wrapper over the
//! connection pool. Persistence failures (uniqueness, required fields, enum
//! values) propagate verbatim; the routers translate them to HTTP.

pub mod catway;
pub mod reservation;
pub mod user;

pub use catway::CatwayRepository;
pub use reservation::ReservationRepository;
pub use user::UserRepository;
