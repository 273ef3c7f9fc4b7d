// handlers/mod.rs - two security tiers
//
// Public (no auth) → Protected (JWT gate in middleware::auth)
pub mod public;    // /login/, /health
pub mod protected; // /states/*, /districts/*
