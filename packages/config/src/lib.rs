// ABOUTME: Shared configuration surface for Fincrew packages
// ABOUTME: Exposes env-var name constants and built-in defaults

pub mod constants;

pub use constants::*;
