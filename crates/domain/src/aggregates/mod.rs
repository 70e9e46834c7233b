//! Aggregate roots - domain objects that own their related data
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Private fields + `#[inline]` accessors |
//! | Value Object immutability | `#[derive(Clone)]` + no `&mut` methods |
//! | Factory pattern | `::new()` + `with_*` transforms |
//! | Schema upgrades | Typed legacy records converted on read |

pub mod character;
pub mod legacy_character;

pub use character::Character;
pub use legacy_character::LegacyCharacter;
