//! # geo_place
//!
//! Places of a TSPLIB "GEO" instance, the vertices an ant colony solver walks
//! over.
//!
//! A [`Place`] converts its `DDD.MM` coordinates to radians once, caches the
//! integer GEO distance to its peers and keeps two per-edge scalars that the
//! solver reads and updates every iteration: the pheromone trail (default 1.0)
//! and the heuristic indicator (default 0.0). Both defaults are stored on
//! first read.
//!
//! Distances are set up once per unordered pair, either through
//! [`Instance::link_all`] or pairwise with [`place::link`] /
//! [`Place::set_distance_to`].

pub mod config;
pub mod error;
pub mod geo;
pub mod instance;
pub mod place;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::geo::GeoPoint;
pub use crate::instance::Instance;
pub use crate::place::{Place, PlaceId};
