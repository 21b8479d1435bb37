use arrayvec::ArrayVec;

use super::{Gladiator, GladiatorId};
use crate::config::ArenaConfig;
use crate::error::RosterError;

/// Ordered, bounded set of living gladiators.
///
/// Positions follow creation order and are only meaningful while a round is
/// being planned; everything that outlives planning addresses members by
/// [`GladiatorId`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    members: ArrayVec<Gladiator, { ArenaConfig::ROSTER_CAPACITY }>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from caller-supplied gladiators, preserving order.
    pub fn from_gladiators<I>(gladiators: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = Gladiator>,
    {
        let mut roster = Self::new();
        for gladiator in gladiators {
            roster.push(gladiator)?;
        }
        Ok(roster)
    }

    pub fn push(&mut self, gladiator: Gladiator) -> Result<(), RosterError> {
        if self.contains(gladiator.id) {
            return Err(RosterError::DuplicateId { id: gladiator.id });
        }
        self.members
            .try_push(gladiator)
            .map_err(|_| RosterError::Full {
                capacity: ArenaConfig::ROSTER_CAPACITY,
            })
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: GladiatorId) -> bool {
        self.members.iter().any(|g| g.id == id)
    }

    pub fn get(&self, id: GladiatorId) -> Option<&Gladiator> {
        self.members.iter().find(|g| g.id == id)
    }

    pub fn get_mut(&mut self, id: GladiatorId) -> Option<&mut Gladiator> {
        self.members.iter_mut().find(|g| g.id == id)
    }

    pub fn at(&self, position: usize) -> Option<&Gladiator> {
        self.members.get(position)
    }

    /// Removes a member, keeping the order of the rest.
    ///
    /// Returns `None` when the id already left the roster.
    pub fn remove(&mut self, id: GladiatorId) -> Option<Gladiator> {
        let position = self.members.iter().position(|g| g.id == id)?;
        Some(self.members.remove(position))
    }

    /// The sole remaining member, if exactly one is left.
    pub fn sole_survivor(&self) -> Option<&Gladiator> {
        match self.members.as_slice() {
            [survivor] => Some(survivor),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gladiator> {
        self.members.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = GladiatorId> + '_ {
        self.members.iter().map(|g| g.id)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }
}
