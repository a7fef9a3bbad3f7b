//! A named set of places and the one-time all-pairs distance setup.

use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::place::{self, Place, PlaceId};

/// A GEO instance: the places an optimization run works on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
    places: Vec<Place>,
    #[serde(skip)]
    index: HashMap<PlaceId, usize>,
}

impl Instance {
    /// Create an instance from already built places. Ids must be unique.
    pub fn new(name: impl Into<String>, places: Vec<Place>) -> Result<Self> {
        let mut index = HashMap::with_capacity(places.len());
        for (position, place) in places.iter().enumerate() {
            if index.insert(place.id(), position).is_some() {
                return Err(Error::DuplicateId(place.id()));
            }
        }

        if places.iter().any(|place| place.config().legacy_indicator_write) {
            warn!(
                "legacy indicator write is enabled: indicator defaults go to the pheromone trail"
            );
        }

        Ok(Instance {
            name: name.into(),
            places,
            index,
        })
    }

    /// Create an instance from `(id, latitude, longitude)` triples.
    pub fn from_coordinates<I>(
        name: impl Into<String>,
        coordinates: I,
        config: &Config,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f64, f64)>,
    {
        config.validate()?;

        let places = coordinates
            .into_iter()
            .map(|(id, latitude, longitude)| Place::with_config(id, latitude, longitude, *config))
            .collect();

        Instance::new(name, places)
    }

    /// Rebuild the id index, e.g. after deserialization.
    pub fn reindex(&mut self) -> Result<()> {
        self.index.clear();
        for (position, place) in self.places.iter().enumerate() {
            if self.index.insert(place.id(), position).is_some() {
                return Err(Error::DuplicateId(place.id()));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn places_mut(&mut self) -> &mut [Place] {
        &mut self.places
    }

    pub fn ids(&self) -> impl Iterator<Item = PlaceId> + '_ {
        self.places.iter().map(Place::id)
    }

    pub fn get(&self, id: impl Into<PlaceId>) -> Option<&Place> {
        self.index.get(&id.into()).map(|&position| &self.places[position])
    }

    pub fn get_mut(&mut self, id: impl Into<PlaceId>) -> Option<&mut Place> {
        self.index
            .get(&id.into())
            .map(|&position| &mut self.places[position])
    }

    /// Set up the distance for every unordered pair of places, once per pair.
    ///
    /// Returns the number of pairs linked.
    pub fn link_all(&mut self) -> Result<usize> {
        let mut linked = 0;

        for (i, j) in (0..self.places.len()).tuple_combinations() {
            let (head, tail) = self.places.split_at_mut(j);
            place::link(&mut head[i], &mut tail[0])?;
            linked += 1;
        }

        debug!("instance {}: linked {} place pairs", self.name, linked);
        Ok(linked)
    }

    /// Set up the distance between two places by id.
    pub fn link(&mut self, a: impl Into<PlaceId>, b: impl Into<PlaceId>) -> Result<u32> {
        let a = self.position(a.into())?;
        let b = self.position(b.into())?;

        if a == b {
            return Err(Error::invalid_argument("cannot compute distance to self"));
        }

        let (low, high) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.places.split_at_mut(high);
        place::link(&mut head[low], &mut tail[0])
    }

    /// Cached distance between two places, `None` if unknown or not linked.
    pub fn distance(&self, a: impl Into<PlaceId>, b: impl Into<PlaceId>) -> Option<u32> {
        self.get(a).and_then(|place| place.distance_to(b))
    }

    /// Full distance matrix in place order, with zeros on the diagonal.
    pub fn distance_matrix(&self) -> Result<Vec<Vec<u32>>> {
        self.places
            .iter()
            .map(|from| {
                self.places
                    .iter()
                    .map(|to| {
                        if from.id() == to.id() {
                            Ok(0)
                        } else {
                            from.distance_to(to)
                                .ok_or(Error::NotLinked(from.id(), to.id()))
                        }
                    })
                    .collect::<Result<Vec<u32>>>()
            })
            .collect()
    }

    fn position(&self, id: PlaceId) -> Result<usize> {
        self.index.get(&id).copied().ok_or(Error::PlaceNotFound(id))
    }
}
