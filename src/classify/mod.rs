//! Pure classifiers that turn raw external signals into form label sets.
//!
//! - [`dates`] — flexible date parsing, whole-year arithmetic, and the
//!   injected [`Clock`](dates::Clock).
//! - [`license`] — OCR text → [`ParsedLicense`](crate::models::ParsedLicense).
//! - [`route`] — route telemetry → road/area/traffic/design labels.
//! - [`weather`] — current conditions → weather/surface/visibility/light.
//! - [`vehicle`] — license class codes → coarse vehicle categories.
//! - [`temporal`] — wall-clock hour and weekday → time-of-day and traffic.
//!
//! Every function here is synchronous, side-effect-free, and total: for any
//! well-typed input it returns a fully-populated result and never panics.

pub mod dates;
pub mod license;
pub mod route;
pub mod temporal;
pub mod vehicle;
pub mod weather;
