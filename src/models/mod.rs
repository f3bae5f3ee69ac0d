pub mod preference;
pub mod user;
pub mod vehicle;

pub use preference::LikesOrDislikes;
pub use user::User;
pub use vehicle::{Listing, VehicleId};
