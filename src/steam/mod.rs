//! Steam Web API bindings.

pub(crate) mod api;
mod vanity;

pub use self::vanity::VanityResponse;
pub(crate) use self::vanity::{endpoint as vanity_endpoint, resolve as resolve_vanity};
