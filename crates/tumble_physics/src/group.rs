//! Interaction groups
//!
//! Groups decide which registered bodies are tested against each other.
//! A body can be in any number of groups, or in none at all.

use crate::body::BodyKey;

/// Name used for the group when the host does not care to name one
pub const DEFAULT_GROUP: &str = "default";

/// Which side of a one-way group a body joins
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Bodies that drive collisions against the `To` side
    From,
    /// Bodies that are only ever struck
    To,
}

/// Every member collides with every other member
#[derive(Clone, Debug, Default)]
pub struct AllGroup {
    name: String,
    members: Vec<BodyKey>,
}

impl AllGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in the order they joined
    pub fn members(&self) -> &[BodyKey] {
        &self.members
    }

    pub fn contains(&self, key: BodyKey) -> bool {
        self.members.contains(&key)
    }
}

/// `from` members collide against `to` members only
///
/// Members on the same side never collide with each other, which lets moving
/// bodies strike static obstacles without paying for obstacle-obstacle or
/// mover-mover pairs.
#[derive(Clone, Debug, Default)]
pub struct OneWayGroup {
    name: String,
    from: Vec<BodyKey>,
    to: Vec<BodyKey>,
}

impl OneWayGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn from(&self) -> &[BodyKey] {
        &self.from
    }

    pub fn to(&self) -> &[BodyKey] {
        &self.to
    }

    pub fn side(&self, side: Side) -> &[BodyKey] {
        match side {
            Side::From => &self.from,
            Side::To => &self.to,
        }
    }
}

fn insert_unique(keys: &mut Vec<BodyKey>, key: BodyKey) {
    if !keys.contains(&key) {
        keys.push(key);
    }
}

/// All groups of a world, in creation order
#[derive(Clone, Debug, Default)]
pub struct InteractionGroups {
    all: Vec<AllGroup>,
    one_way: Vec<OneWayGroup>,
}

impl InteractionGroups {
    pub fn all(&self) -> &[AllGroup] {
        &self.all
    }

    pub fn one_way(&self) -> &[OneWayGroup] {
        &self.one_way
    }

    pub fn all_group(&self, name: &str) -> Option<&AllGroup> {
        self.all.iter().find(|g| g.name == name)
    }

    pub fn one_way_group(&self, name: &str) -> Option<&OneWayGroup> {
        self.one_way.iter().find(|g| g.name == name)
    }

    /// Add `key` to the named all-group, creating the group on first use
    pub(crate) fn join_all(&mut self, name: &str, key: BodyKey) {
        let index = match self.all.iter().position(|g| g.name == name) {
            Some(index) => index,
            None => {
                log::debug!("Creating all-group '{}'", name);
                self.all.push(AllGroup {
                    name: name.to_string(),
                    members: Vec::new(),
                });
                self.all.len() - 1
            }
        };
        insert_unique(&mut self.all[index].members, key);
    }

    /// Add `key` to one side of the named one-way group, creating it on first use
    pub(crate) fn join_one_way(&mut self, name: &str, side: Side, key: BodyKey) {
        let index = match self.one_way.iter().position(|g| g.name == name) {
            Some(index) => index,
            None => {
                log::debug!("Creating one-way group '{}'", name);
                self.one_way.push(OneWayGroup {
                    name: name.to_string(),
                    from: Vec::new(),
                    to: Vec::new(),
                });
                self.one_way.len() - 1
            }
        };
        let group = &mut self.one_way[index];
        match side {
            Side::From => insert_unique(&mut group.from, key),
            Side::To => insert_unique(&mut group.to, key),
        }
    }

    /// Drop `key` from every group it belongs to
    pub(crate) fn remove(&mut self, key: BodyKey) {
        for group in &mut self.all {
            group.members.retain(|k| *k != key);
        }
        for group in &mut self.one_way {
            group.from.retain(|k| *k != key);
            group.to.retain(|k| *k != key);
        }
    }
}
