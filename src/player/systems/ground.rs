//! Player domain: ground contact sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::GroundProbe;

impl GroundProbe {
    /// Whether the probe disc overlaps any ground-layer collider.
    ///
    /// Pure query against the spatial index; nothing is cached, so the
    /// fixed-phase and render-phase callers each see the current world.
    pub(crate) fn is_grounded(&self, spatial_query: &SpatialQuery, origin: Vec2) -> bool {
        let shape = Collider::circle(self.radius);
        let filter = SpatialQueryFilter::from_mask(self.mask);

        !spatial_query
            .shape_intersections(&shape, origin + self.offset, 0.0, &filter)
            .is_empty()
    }
}
