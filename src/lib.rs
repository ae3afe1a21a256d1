//! Async client for the Enlighted Energy Manager REST API.
//!
//! The Energy Manager exposes facility structure (companies, campuses,
//! buildings, floors, areas) and the lighting fixtures installed in it. This
//! crate binds that surface in two layers:
//!
//! * a compiled operation table dispatched by name through
//!   [`EnlightedApi::invoke`], covering the facility CRUD endpoints, plus
//!   plain verb methods for anything ad hoc
//! * dedicated lighting methods, [`EnlightedApi::adjust_lights`] and
//!   [`EnlightedApi::get_all_lights_on_floor`], which speak the service's
//!   XML fixture envelope
//!
//! Every request carries HTTP Basic authentication and lands under the
//! configured origin and base path. The deployment's full endpoint inventory
//! is published by the service itself at
//! `<origin>/ems/services/application.wadl`.
//!
//! ```no_run
//! use enlighted_ems::{ApiOptions, EnlightedApi, LightLevel, RequestOptions, RouteParams};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let api = EnlightedApi::new(
//!     ApiOptions::new()
//!         .origin("https://ems.example.com")
//!         .user("apiuser")
//!         .pass("apipass"),
//! )?;
//!
//! let floors = api
//!     .invoke("getFloorList", &RouteParams::new(), RequestOptions::new())
//!     .await?;
//! println!("{}", floors.text());
//!
//! let lights = api.get_all_lights_on_floor(3).await?;
//! let accepted = api.adjust_lights(&lights, LightLevel::Dim(40), Some(30)).await;
//! # let _ = accepted;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod fixture;
mod request_client;
mod response;
mod routes;
mod template;

pub use client::EnlightedApi;
pub use config::ApiOptions;
pub use error::{ApiError, ConfigError};
pub use fixture::{Fixture, LightLevel, ParseLightLevelError};
pub use request_client::{RequestBody, RequestOptions};
pub use response::ApiResponse;
pub use reqwest::StatusCode;
pub use routes::{RouteDescriptor, Verb, HANDWRITTEN_ROUTES, ROUTE_TABLE};
pub use template::{resolve, RouteParams};
