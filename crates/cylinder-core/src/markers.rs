use glam::{DMat4, DVec3};
use std::ops::{Index, IndexMut};

/// One token on (or pulled off) the cylinder.
///
/// `position` is in the cylinder's local frame while `attached`, and in
/// world space once a drag has detached it.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: DVec3,
    pub attached: bool,
    /// Filled marker that can be picked up. `false` marks an empty slot.
    pub highlighted: bool,
    /// Grid slot this marker was spawned for.
    pub origin_slot: Option<usize>,
}

impl Marker {
    /// Filled marker sitting in grid slot `slot`.
    pub fn filled(position: DVec3, slot: usize) -> Self {
        Self {
            position,
            attached: true,
            highlighted: true,
            origin_slot: Some(slot),
        }
    }

    /// Empty-slot marker left behind when a filled one is pulled off.
    pub fn placeholder(position: DVec3, slot: Option<usize>) -> Self {
        Self {
            position,
            attached: true,
            highlighted: false,
            origin_slot: slot,
        }
    }

    /// Position after applying the cylinder transform, if attached.
    #[inline]
    pub fn world_position(&self, transform: &DMat4) -> DVec3 {
        if self.attached {
            transform.transform_point3(self.position)
        } else {
            self.position
        }
    }
}

/// Ordered marker collection.
///
/// Indices are positional: `remove_at` shifts everything after the removed
/// entry down by one. Out-of-range indices panic.
#[derive(Clone, Debug, Default)]
pub struct MarkerStore {
    markers: Vec<Marker>,
}

impl MarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// One filled, attached marker per grid slot.
    pub fn from_grid(grid: &[DVec3]) -> Self {
        let markers = grid
            .iter()
            .enumerate()
            .map(|(slot, pos)| Marker::filled(*pos, slot))
            .collect();
        Self { markers }
    }

    /// Appends a marker and returns its index.
    pub fn append(&mut self, marker: Marker) -> usize {
        self.markers.push(marker);
        self.markers.len() - 1
    }

    pub fn remove_at(&mut self, index: usize) -> Marker {
        self.markers.remove(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    #[inline]
    pub fn world_position(&self, index: usize, transform: &DMat4) -> DVec3 {
        self.markers[index].world_position(transform)
    }
}

impl Index<usize> for MarkerStore {
    type Output = Marker;

    fn index(&self, index: usize) -> &Marker {
        &self.markers[index]
    }
}

impl IndexMut<usize> for MarkerStore {
    fn index_mut(&mut self, index: usize) -> &mut Marker {
        &mut self.markers[index]
    }
}

impl<'a> IntoIterator for &'a MarkerStore {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
