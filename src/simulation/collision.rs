// simulation/collision.rs
// Same-cell collision detection and the per-frame set of collision groups

use crate::particle::{Particle, ParticleId};
use crate::vector::Vec2i;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Particles that shared one cell when detection ran, in registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionGroup {
    position: Vec2i,
    members: SmallVec<[ParticleId; 4]>,
}

impl CollisionGroup {
    /// The cell every member occupied at detection time.
    pub fn position(&self) -> Vec2i {
        self.position
    }

    pub fn members(&self) -> &[ParticleId] {
        &self.members
    }

    pub fn contains(&self, id: ParticleId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[derive(Clone, Debug)]
struct ActiveGroup {
    group: CollisionGroup,
    /// Members not yet retired by resolution
    pending: usize,
}

/// The frame's collision groups plus one slot per particle.
///
/// A particle has collided iff its slot points at a group. Particles alone in their cell keep
/// an empty slot. Retiring a particle clears its slot; a group leaves the set once its last
/// member is retired, so partners of an already-resolved particle still read as collided.
#[derive(Clone, Debug, Default)]
pub struct CollisionSet {
    groups: Vec<Option<ActiveGroup>>,
    slots: Vec<Option<usize>>,
}

impl CollisionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group `particles` by exact position.
    ///
    /// First pass maps each occupied cell to its occupants in registration order. Second pass
    /// walks the particles in the same order and opens a group at the first member of every
    /// cell holding two or more particles, so group order follows the lowest member id.
    pub fn detect(particles: &[Particle]) -> Self {
        let mut cells: HashMap<Vec2i, SmallVec<[ParticleId; 4]>> =
            HashMap::with_capacity(particles.len());
        for (i, particle) in particles.iter().enumerate() {
            cells.entry(particle.position()).or_default().push(ParticleId(i));
        }

        let mut set = Self {
            groups: Vec::new(),
            slots: vec![None; particles.len()],
        };
        for particle in particles {
            let position = particle.position();
            let Some(members) = cells.remove(&position) else {
                continue;
            };
            if members.len() < 2 {
                continue;
            }
            let index = set.groups.len();
            for id in &members {
                set.slots[id.0] = Some(index);
            }
            set.groups.push(Some(ActiveGroup {
                pending: members.len(),
                group: CollisionGroup { position, members },
            }));
        }
        set
    }

    pub fn has_collided(&self, id: ParticleId) -> bool {
        matches!(self.slots.get(id.0), Some(Some(_)))
    }

    /// The active group `id` belongs to, if it has collided and not yet been retired.
    pub fn group_of(&self, id: ParticleId) -> Option<&CollisionGroup> {
        let index = (*self.slots.get(id.0)?)?;
        self.groups.get(index)?.as_ref().map(|active| &active.group)
    }

    /// Groups still holding at least one unretired member.
    pub fn groups(&self) -> impl Iterator<Item = &CollisionGroup> {
        self.groups.iter().flatten().map(|active| &active.group)
    }

    pub fn len(&self) -> usize {
        self.groups().count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Option::is_none)
    }

    /// Mark `id` as resolved. Returns its group once every member has been retired.
    pub fn retire(&mut self, id: ParticleId) -> Option<CollisionGroup> {
        let index = self.slots.get_mut(id.0)?.take()?;
        let active = self.groups.get_mut(index)?.as_mut()?;
        active.pending -= 1;
        if active.pending > 0 {
            return None;
        }
        self.groups[index].take().map(|active| active.group)
    }

    pub fn clear(&mut self) {
        self.groups.clear();
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(points: &[(i32, i32)]) -> Vec<Particle> {
        points
            .iter()
            .map(|&(x, y)| Particle::new(Vec2i::new(x, y)))
            .collect()
    }

    #[test]
    fn lone_particles_get_empty_slots() {
        let set = CollisionSet::detect(&at(&[(1, 1), (2, 2), (3, 3)]));
        assert!(set.is_empty());
        assert!((0..3).all(|i| !set.has_collided(ParticleId(i))));
    }

    #[test]
    fn shared_cell_forms_one_group_in_registration_order() {
        let set = CollisionSet::detect(&at(&[(4, 4), (1, 1), (4, 4), (4, 4)]));
        assert_eq!(set.len(), 1);
        let group = set.group_of(ParticleId(2)).unwrap();
        assert_eq!(group.members(), &[ParticleId(0), ParticleId(2), ParticleId(3)]);
        assert_eq!(group.position(), Vec2i::new(4, 4));
        assert!(!set.has_collided(ParticleId(1)));
    }

    #[test]
    fn groups_are_ordered_by_lowest_member() {
        let set = CollisionSet::detect(&at(&[(7, 7), (2, 2), (2, 2), (7, 7)]));
        let positions: Vec<Vec2i> = set.groups().map(CollisionGroup::position).collect();
        assert_eq!(positions, vec![Vec2i::new(7, 7), Vec2i::new(2, 2)]);
        // Nobody lands in two groups
        for i in 0..4 {
            let hits = set.groups().filter(|g| g.contains(ParticleId(i))).count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn group_survives_until_last_member_retires() {
        let mut set = CollisionSet::detect(&at(&[(5, 5), (5, 5)]));
        assert!(set.retire(ParticleId(0)).is_none());
        assert!(!set.has_collided(ParticleId(0)));
        assert!(set.has_collided(ParticleId(1)));

        let group = set.retire(ParticleId(1)).unwrap();
        assert_eq!(group.len(), 2);
        assert!(set.is_empty());
        assert!(set.retire(ParticleId(1)).is_none());
    }

    #[test]
    fn unknown_ids_are_not_collided() {
        let mut set = CollisionSet::detect(&at(&[(1, 1), (1, 1)]));
        assert!(!set.has_collided(ParticleId(9)));
        assert!(set.retire(ParticleId(9)).is_none());
        set.clear();
        assert!(!set.has_collided(ParticleId(0)));
    }
}
