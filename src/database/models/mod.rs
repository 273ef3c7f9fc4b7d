pub mod district;
pub mod state;
pub mod user;

pub use district::{District, DistrictFields};
pub use state::{State, StateStats};
pub use user::User;
