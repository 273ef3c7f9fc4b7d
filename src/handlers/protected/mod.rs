// handlers/protected/mod.rs - endpoints behind the JWT gate
//
// The gate runs as a route layer (see app::protected_routes), so handlers
// here never see an unauthenticated request.
pub mod districts;
pub mod states;

pub use districts::{create_district, delete_district, get_district, update_district};
pub use states::{get_state, list_states, state_stats};
