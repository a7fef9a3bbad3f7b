//! A place on the map: one vertex of a GEO instance.
//!
//! Each place owns the edge data seen from its side: a cache of integer
//! distances to peers, a pheromone trail and a heuristic indicator. Edges are
//! keyed by the peer's [`PlaceId`].

use std::collections::BTreeMap;
use std::fmt;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Identity of a place, unique within one instance.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlaceId(pub usize);

impl From<usize> for PlaceId {
    fn from(id: usize) -> Self {
        PlaceId(id)
    }
}

impl From<&Place> for PlaceId {
    fn from(place: &Place) -> Self {
        place.id
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex of the optimization graph.
///
/// Identity and position are fixed at construction. The three edge maps only
/// grow; cloning a place is the way to take a snapshot of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    id: PlaceId,
    point: GeoPoint,
    distances: BTreeMap<PlaceId, u32>,
    pheromone_trail: BTreeMap<PlaceId, f64>,
    indicators: BTreeMap<PlaceId, f64>,
    #[serde(default)]
    config: Config,
}

impl Place {
    /// Create a place with the default edge configuration.
    pub fn new(id: usize, latitude: f64, longitude: f64) -> Self {
        Place::with_config(id, latitude, longitude, Config::default())
    }

    /// Create a place whose edge defaults come from `config`.
    pub fn with_config(id: usize, latitude: f64, longitude: f64, config: Config) -> Self {
        Place {
            id: PlaceId(id),
            point: GeoPoint::new(latitude, longitude),
            distances: BTreeMap::new(),
            pheromone_trail: BTreeMap::new(),
            indicators: BTreeMap::new(),
            config,
        }
    }

    pub fn id(&self) -> PlaceId {
        self.id
    }

    pub fn latitude(&self) -> f64 {
        self.point.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.point.longitude
    }

    pub fn radians_latitude(&self) -> f64 {
        self.point.radians_latitude
    }

    pub fn radians_longitude(&self) -> f64 {
        self.point.radians_longitude
    }

    pub fn point(&self) -> &GeoPoint {
        &self.point
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cache the distance to `other` and return it.
    ///
    /// If `other` already knows its distance to this place, that value is
    /// reused so both sides agree exactly. Fails for a place with the same id.
    pub fn set_distance_to(&mut self, other: &Place) -> Result<u32> {
        if other.id == self.id {
            return Err(Error::invalid_argument("cannot compute distance to self"));
        }

        let distance = match other.distances.get(&self.id) {
            Some(&known) => {
                trace!("place {} reuses distance {} from {}", self.id, known, other.id);
                known
            }
            None => self.point.distance(&other.point),
        };

        self.distances.insert(other.id, distance);
        Ok(distance)
    }

    /// Cached distance to a peer, `None` if it was never set up.
    pub fn distance_to(&self, peer: impl Into<PlaceId>) -> Option<u32> {
        self.distances.get(&peer.into()).copied()
    }

    /// Pheromone trail on the edge to `peer`.
    ///
    /// A missing entry is stored with the configured default before returning.
    pub fn pheromone(&mut self, peer: impl Into<PlaceId>) -> f64 {
        let peer = peer.into();
        let default = self.config.default_pheromone;
        let id = self.id;
        *self.pheromone_trail.entry(peer).or_insert_with(|| {
            trace!("place {} materializes pheromone {} towards {}", id, default, peer);
            default
        })
    }

    pub fn set_pheromone(&mut self, peer: impl Into<PlaceId>, value: f64) {
        self.pheromone_trail.insert(peer.into(), value);
    }

    /// Heuristic indicator on the edge to `peer`.
    ///
    /// A missing entry is stored with the configured default before returning.
    /// With `legacy_indicator_write` the default lands in the pheromone map
    /// instead and the indicator map is left untouched.
    pub fn indicator(&mut self, peer: impl Into<PlaceId>) -> f64 {
        let peer = peer.into();
        if let Some(&value) = self.indicators.get(&peer) {
            return value;
        }

        let default = self.config.default_indicator;
        if self.config.legacy_indicator_write {
            trace!(
                "place {} writes indicator default into pheromone towards {}",
                self.id,
                peer
            );
            self.pheromone_trail.insert(peer, default);
        } else {
            trace!(
                "place {} materializes indicator {} towards {}",
                self.id,
                default,
                peer
            );
            self.indicators.insert(peer, default);
        }
        default
    }

    pub fn set_indicator(&mut self, peer: impl Into<PlaceId>, value: f64) {
        self.indicators.insert(peer.into(), value);
    }

    pub fn distances(&self) -> &BTreeMap<PlaceId, u32> {
        &self.distances
    }

    pub fn pheromone_trail(&self) -> &BTreeMap<PlaceId, f64> {
        &self.pheromone_trail
    }

    pub fn indicators(&self) -> &BTreeMap<PlaceId, f64> {
        &self.indicators
    }

    /// Replace the whole distance cache, returning the previous one.
    pub fn replace_distances(
        &mut self,
        distances: BTreeMap<PlaceId, u32>,
    ) -> BTreeMap<PlaceId, u32> {
        std::mem::replace(&mut self.distances, distances)
    }

    /// Replace the whole pheromone map, returning the previous one.
    pub fn replace_pheromone_trail(
        &mut self,
        trail: BTreeMap<PlaceId, f64>,
    ) -> BTreeMap<PlaceId, f64> {
        std::mem::replace(&mut self.pheromone_trail, trail)
    }

    /// Replace the whole indicator map, returning the previous one.
    pub fn replace_indicators(
        &mut self,
        indicators: BTreeMap<PlaceId, f64>,
    ) -> BTreeMap<PlaceId, f64> {
        std::mem::replace(&mut self.indicators, indicators)
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.point)
    }
}

/// Compute the distance between two places once and cache it on both sides.
pub fn link(a: &mut Place, b: &mut Place) -> Result<u32> {
    if a.id == b.id {
        return Err(Error::invalid_argument("cannot compute distance to self"));
    }

    let distance = a.point.distance(&b.point);
    trace!("linked {} and {} at distance {}", a.id, b.id, distance);

    a.distances.insert(b.id, distance);
    b.distances.insert(a.id, distance);
    Ok(distance)
}
