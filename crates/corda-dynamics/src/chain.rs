//! The chain structure owning all mass points.
//!
//! A deformable linear object is a run of triangular cross-sections,
//! three mass points each, threaded along an axis. Consecutive sections
//! bound a volumetric "link": a capped cylinder whose axis joins the two
//! section centroids and whose radius is the object's contact radius.
//! Links are views over the point storage, not stored entities.

use corda_math::Vec3;
use corda_types::{CordaError, CordaResult, LinkId, PointId, Scalar, SectionId};

use crate::point::MassPoint;

/// Number of mass points in one triangular cross-section.
pub const POINTS_PER_SECTION: usize = 3;

/// A chain of triangular cross-sections with exclusive ownership of
/// its mass points.
pub struct Chain {
    /// Point storage, `POINTS_PER_SECTION` consecutive entries per section.
    points: Vec<MassPoint>,
    /// Number of cross-sections.
    sections: usize,
    /// Contact radius shared by every link of this chain.
    contact_radius: Scalar,
}

impl Chain {
    /// Generates a straight rod along +Z.
    ///
    /// Cross-section `s` sits at `z = s * spacing`; its three corners form
    /// an equilateral triangle of circumradius `cross_radius` in the XY
    /// plane, so the section centroid lies exactly on the Z axis. Every
    /// point receives `point_mass`.
    ///
    /// # Arguments
    /// - `sections` — Number of cross-sections (at least 2).
    /// - `spacing` — Distance between consecutive sections in meters.
    /// - `cross_radius` — Circumradius of the triangular cross-section.
    /// - `contact_radius` — Capsule radius used for link-link contact.
    /// - `point_mass` — Mass per point in kilograms.
    pub fn rod(
        sections: usize,
        spacing: Scalar,
        cross_radius: Scalar,
        contact_radius: Scalar,
        point_mass: Scalar,
    ) -> CordaResult<Self> {
        if sections < 2 {
            return Err(CordaError::InvalidChain(format!(
                "A chain needs at least 2 cross-sections, got {sections}"
            )));
        }
        if !(spacing > 0.0) || !(cross_radius > 0.0) || !(contact_radius > 0.0) {
            return Err(CordaError::InvalidChain(format!(
                "Non-positive geometry: spacing {spacing}, cross radius \
                 {cross_radius}, contact radius {contact_radius}"
            )));
        }

        let mut points = Vec::with_capacity(sections * POINTS_PER_SECTION);

        // Corner directions at 90°, 210°, 330° in the XY plane; they sum
        // to zero, so the centroid stays on the axis.
        let corner_angles: [Scalar; POINTS_PER_SECTION] = [
            std::f64::consts::FRAC_PI_2,
            std::f64::consts::FRAC_PI_2 + 2.0 * std::f64::consts::FRAC_PI_3,
            std::f64::consts::FRAC_PI_2 + 4.0 * std::f64::consts::FRAC_PI_3,
        ];

        for s in 0..sections {
            let z = s as Scalar * spacing;
            for angle in corner_angles {
                let pos = Vec3::new(
                    cross_radius * angle.cos(),
                    cross_radius * angle.sin(),
                    z,
                );
                let mut point = MassPoint::new(pos);
                point.set_mass(point_mass);
                points.push(point);
            }
        }

        Ok(Self {
            points,
            sections,
            contact_radius,
        })
    }

    /// Number of cross-sections.
    #[inline]
    pub fn section_count(&self) -> usize {
        self.sections
    }

    /// Number of volumetric links (one fewer than sections).
    #[inline]
    pub fn link_count(&self) -> usize {
        self.sections - 1
    }

    /// Contact radius shared by every link.
    #[inline]
    pub fn contact_radius(&self) -> Scalar {
        self.contact_radius
    }

    /// Point ids of cross-section `s`.
    #[inline]
    pub fn section_points(&self, s: SectionId) -> [PointId; POINTS_PER_SECTION] {
        let base = s.0 * POINTS_PER_SECTION as u32;
        [PointId(base), PointId(base + 1), PointId(base + 2)]
    }

    /// Point ids of link `l`: the corners of its two cross-sections.
    pub fn link_points(&self, l: LinkId) -> [PointId; 6] {
        let (near, far) = l.sections();
        let [p, q, r] = self.section_points(near);
        let [p1, q1, r1] = self.section_points(far);
        [p, q, r, p1, q1, r1]
    }

    /// Centroid of cross-section `s` at the current positions.
    pub fn section_centroid(&self, s: SectionId) -> Vec3 {
        let [p, q, r] = self.section_points(s);
        (self.points[p.index()].position()
            + self.points[q.index()].position()
            + self.points[r.index()].position())
            / 3.0
    }

    /// All link pairs at least `min_separation` apart along the chain.
    ///
    /// Adjacent links share a cross-section and are excluded from
    /// self-collision; `min_separation` of 2 is the usual choice. This is
    /// an exhaustive stand-in for an external broad phase.
    pub fn candidate_pairs(&self, min_separation: usize) -> Vec<(LinkId, LinkId)> {
        let links = self.link_count();
        let mut pairs = Vec::new();
        for i in 0..links {
            for j in (i + min_separation)..links {
                pairs.push((LinkId(i as u32), LinkId(j as u32)));
            }
        }
        pairs
    }

    /// Anchors cross-section `s` by zeroing the mass of its three points.
    pub fn anchor_section(&mut self, s: SectionId) {
        for id in self.section_points(s) {
            self.points[id.index()].set_mass(0.0);
        }
    }

    /// Shared read access to all points.
    #[inline]
    pub fn points(&self) -> &[MassPoint] {
        &self.points
    }

    /// Exclusive access to all points.
    #[inline]
    pub fn points_mut(&mut self) -> &mut [MassPoint] {
        &mut self.points
    }

    /// Total kinetic energy `0.5 · Σ mᵢ‖vᵢ‖²` over the current velocities.
    pub fn kinetic_energy(&self) -> Scalar {
        self.points
            .iter()
            .map(|p| 0.5 * p.mass() * p.velocity().length_squared())
            .sum()
    }
}
