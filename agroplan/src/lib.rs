//! AgroPlan dashboard
//!
//! A terminal dashboard for simulated agricultural planning. The farm tab
//! shows live conditions: the [`resolver`] finds the device position,
//! posts it to a forecast service and settles on either live readings or
//! fallback values. Everything else is static display data from
//! [`fixtures`].
//!
//! State flows one way, as in any Elm-style app: key events become
//! [`action::Action`]s, the [`reducer`] applies them to
//! [`state::AppState`] and declares [`effect::Effect`]s, and the binary
//! runs those effects as keyed tasks.

pub mod action;
pub mod components;
pub mod config;
pub mod effect;
pub mod error;
pub mod fixtures;
pub mod forecast;
pub mod location;
pub mod logging;
pub mod reducer;
pub mod resolver;
pub mod state;
pub mod thresholds;
