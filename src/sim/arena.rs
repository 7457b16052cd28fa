//! Entity storage for spawned gameplay objects
//!
//! Coins, enemies, projectiles and power-ups live in one arena of tagged
//! records. A handle stays valid until its entity is removed; freed slots
//! are reused for later spawns, and a bumped generation makes stale
//! handles miss instead of aliasing the new occupant. Iteration follows
//! slot order, which is deterministic for identical spawn histories.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;

/// Stable handle to an arena slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId {
    index: u32,
    generation: u32,
}

/// Coin placement tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinTier {
    /// Collectable at a walk
    Ground,
    /// Requires a crouch
    Low,
    /// Normal run height
    Mid,
    /// Requires a jump; rises with difficulty
    High,
}

/// Power-up payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Restores one heart
    Health,
}

/// Per-kind entity data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    Coin { tier: CoinTier },
    Enemy(Enemy),
    Projectile { vel: Vec2, ttl: f32 },
    PowerUp { kind: PowerUpKind },
}

/// A live gameplay entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Slot {
    generation: u32,
    entity: Option<Entity>,
}

/// Arena of live entities with generational handles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: u32,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entity, reusing a freed slot when one is available
    pub fn insert(&mut self, pos: Vec2, kind: EntityKind) -> EntityId {
        let entity = Entity { pos, kind };
        self.live += 1;
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.entity = Some(entity);
                EntityId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    entity: Some(entity),
                });
                EntityId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entity.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entity.as_mut())
    }

    /// Remove an entity, marking its slot free. Stale handles are a no-op.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation || slot.entity.is_none() {
            return None;
        }
        let entity = slot.entity.take();
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.live -= 1;
        entity
    }

    pub fn len(&self) -> usize {
        self.live as usize
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live entities in slot order
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entity.as_ref().map(|entity| {
                (
                    EntityId {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    entity,
                )
            })
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> {
        self.slots.iter_mut().enumerate().filter_map(|(index, slot)| {
            let generation = slot.generation;
            slot.entity.as_mut().map(move |entity| {
                (
                    EntityId {
                        index: index as u32,
                        generation,
                    },
                    entity,
                )
            })
        })
    }

    /// Drop every entity failing the predicate
    pub fn retain(&mut self, mut keep: impl FnMut(EntityId, &Entity) -> bool) {
        for index in 0..self.slots.len() {
            let slot = &mut self.slots[index];
            let Some(entity) = slot.entity.as_ref() else {
                continue;
            };
            let id = EntityId {
                index: index as u32,
                generation: slot.generation,
            };
            if !keep(id, entity) {
                slot.entity = None;
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index as u32);
                self.live -= 1;
            }
        }
    }
}
