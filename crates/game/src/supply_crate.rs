//! Supply crates dropped from the helicopter.

use engine_core::Lifetime;
use glam::{Vec2, Vec3};
use physics::{BallisticBody, BallisticForces, WorldLimits, MAX_PREDICTION_STEPS};

use crate::helicopter::HelicopterState;
use crate::params::SimParams;

/// A dropped crate. It keeps the heading it was launched with for its whole
/// flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupplyCrate {
    pub body: BallisticBody,
    pub lifetime: Lifetime,
    /// Where the crate was predicted to land when it was dropped.
    pub landing: Vec2,
}

impl SupplyCrate {
    pub fn position(&self) -> Vec3 {
        self.body.position
    }
}

fn crate_forces(params: &SimParams) -> BallisticForces {
    BallisticForces::new(params.wind_resistance, params.gravity, params.crate_mass)
}

/// Live crates in drop order.
#[derive(Debug, Default)]
pub struct CratePool {
    crates: Vec<SupplyCrate>,
}

impl CratePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crates(&self) -> &[SupplyCrate] {
        &self.crates
    }

    pub fn len(&self) -> usize {
        self.crates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    /// Where a body released now would come to rest.
    pub fn predict_landing(body: &BallisticBody, dt: f32, limits: &WorldLimits, params: &SimParams) -> Vec2 {
        if dt <= 0.0 {
            return Vec2::new(body.position.x, body.position.z);
        }
        let max_steps = ((params.despawn_timeout / dt).ceil() as usize).min(MAX_PREDICTION_STEPS);
        body.predict_landing(dt, crate_forces(params), limits, max_steps)
    }

    /// Drop a crate from the helicopter. Returns `None` when the helicopter
    /// is on the ground or the crate would land on top of another one.
    pub fn spawn(
        &mut self,
        heli: &HelicopterState,
        time: f32,
        dt: f32,
        limits: &WorldLimits,
        params: &SimParams,
    ) -> Option<&SupplyCrate> {
        let p = heli.position;
        if p.y <= limits.floor_height(p.x, p.z) {
            log::trace!("Crate drop rejected: helicopter is grounded");
            return None;
        }

        let body = BallisticBody::new(p, heli.speed, heli.yaw);
        let landing = Self::predict_landing(&body, dt, limits, params);
        if self
            .crates
            .iter()
            .any(|c| c.landing.distance(landing) < params.crate_overlap_radius)
        {
            log::trace!("Crate drop rejected: landing point {landing} is taken");
            return None;
        }

        log::debug!("Crate dropped at {p}, landing near {landing}");
        self.crates.push(SupplyCrate {
            body,
            lifetime: Lifetime::new(time, params.despawn_timeout),
            landing,
        });
        self.crates.last()
    }

    /// Step every crate and drop the ones that outlived their timeout.
    pub fn advance_all(&mut self, dt: f32, time: f32, limits: &WorldLimits, params: &SimParams) {
        let forces = crate_forces(params);
        for c in &mut self.crates {
            c.body.step(dt, forces, limits);
        }

        let before = self.crates.len();
        self.crates.retain(|c| !c.lifetime.is_expired(time));
        let removed = before - self.crates.len();
        if removed > 0 {
            log::debug!("Despawned {removed} crate(s)");
        }
    }
}
