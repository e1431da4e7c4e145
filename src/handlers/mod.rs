// 3-tier handler architecture:
// Public (no auth) → Protected (bearer token) → Elevated (token + stored role)
pub mod elevated;
pub mod protected;
pub mod public;
