// handlers/public/mod.rs - endpoints reachable without a token
//
// Login is the token acquisition point; health is for load balancers
// and the integration test harness.
pub mod health;
pub mod login;

pub use health::health;
pub use login::login;
