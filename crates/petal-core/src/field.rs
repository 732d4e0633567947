use crate::constants::*;
use crate::surface::Surface;
use glam::DVec2;
use rand::prelude::*;

/// RGB fill color with a baked-in alpha in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Color {
    pub fn new(rgb: [u8; 3], alpha: f64) -> Self {
        Self { rgb, alpha }
    }

    /// CSS `rgba(...)` string for a canvas fill style.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.rgb[0], self.rgb[1], self.rgb[2], self.alpha
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphKind {
    Heart,
    Message,
}

#[inline]
pub fn glyph_kind(glyph: &str) -> GlyphKind {
    if glyph == HEART {
        GlyphKind::Heart
    } else {
        GlyphKind::Message
    }
}

/// Long-lived background glyph drifting down the page. Created once at
/// startup and never destroyed; wraps around the field bounds.
#[derive(Clone, Debug)]
pub struct AmbientParticle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub glyph: &'static str,
    pub size: f64,
    pub color: Color,
    /// Weight scaling how strongly the particle responds to pointer
    /// repulsion. Nothing else reads it.
    pub density: f64,
}

impl AmbientParticle {
    pub fn spawn(rng: &mut StdRng, width: f64, height: f64) -> Self {
        let pos = DVec2::new(rng.gen::<f64>() * width, rng.gen::<f64>() * height);
        let vel = DVec2::new(
            (rng.gen::<f64>() - 0.5) * AMBIENT_VX_SPAN,
            rng.gen::<f64>() * AMBIENT_VY_SPAN + AMBIENT_VY_MIN,
        );
        let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
        let opacity = rng.gen::<f64>() * AMBIENT_OPACITY_SPAN + AMBIENT_OPACITY_MIN;
        // Hearts are larger and warm red; message text is smaller and muted
        // gold so it stays readable against the page.
        let (size, rgb) = match glyph_kind(glyph) {
            GlyphKind::Heart => (rng.gen::<f64>() * HEART_SIZE_SPAN + HEART_SIZE_MIN, HEART_RGB),
            GlyphKind::Message => (
                rng.gen::<f64>() * MESSAGE_SIZE_SPAN + MESSAGE_SIZE_MIN,
                MESSAGE_RGB,
            ),
        };
        let density = rng.gen::<f64>() * AMBIENT_DENSITY_SPAN + AMBIENT_DENSITY_MIN;
        Self {
            pos,
            vel,
            glyph,
            size,
            color: Color::new(rgb, opacity),
            density,
        }
    }

    /// One frame step: pointer repulsion (positional nudge), constant drift,
    /// then wrap-around at the field bounds.
    pub fn step(&mut self, pointer: &PointerState, width: f64, height: f64) {
        if let Some(p) = pointer.pos {
            self.pos += repulsion_offset(p, self.pos, pointer.radius, self.density);
        }
        self.pos += self.vel;

        // Falling off the bottom respawns just above the top, keeping the
        // current x. Left/right edges wrap across.
        if self.pos.y > height {
            self.pos.y = WRAP_RESET_Y;
        }
        if self.pos.x > width {
            self.pos.x = 0.0;
        }
        if self.pos.x < 0.0 {
            self.pos.x = width;
        }
    }
}

/// Short-lived heart spawned on click; fades out as `life` drains.
#[derive(Clone, Debug)]
pub struct BurstParticle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub size: f64,
    /// Normalized remaining lifetime in [0, 1]; doubles as render alpha.
    pub life: f64,
    pub decay: f64,
}

impl BurstParticle {
    pub fn spawn(rng: &mut StdRng, x: f64, y: f64) -> Self {
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        let speed = rng.gen::<f64>() * BURST_SPEED_SPAN + BURST_SPEED_MIN;
        Self {
            pos: DVec2::new(x, y),
            vel: DVec2::new(angle.cos() * speed, angle.sin() * speed),
            size: rng.gen::<f64>() * BURST_SIZE_SPAN + BURST_SIZE_MIN,
            life: 1.0,
            decay: rng.gen::<f64>() * BURST_DECAY_SPAN + BURST_DECAY_MIN,
        }
    }

    /// One frame step: velocity, gravity on the vertical axis, life drain.
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.vel.y += BURST_GRAVITY;
        self.life -= self.decay;
    }

    #[inline]
    pub fn expired(&self) -> bool {
        self.life <= 0.0
    }
}

/// Last known pointer position (unset until the first move) and the radius
/// within which ambient particles are pushed away.
#[derive(Clone, Copy, Debug)]
pub struct PointerState {
    pub pos: Option<DVec2>,
    pub radius: f64,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: None,
            radius: POINTER_RADIUS,
        }
    }
}

/// Displacement pushing a particle at `pos` directly away from `pointer`.
///
/// Zero outside `radius` (and for a degenerate zero distance); otherwise the
/// magnitude is `(radius - dist) / radius * density * REPULSION_STRENGTH`,
/// growing monotonically as the pointer closes in. Applied to position, not
/// velocity: an instantaneous nudge, not physics.
pub fn repulsion_offset(pointer: DVec2, pos: DVec2, radius: f64, density: f64) -> DVec2 {
    let delta = pointer - pos;
    let distance = delta.length();
    if distance >= radius || distance <= f64::EPSILON {
        return DVec2::ZERO;
    }
    let force = (radius - distance) / radius;
    -(delta / distance) * force * density * REPULSION_STRENGTH
}

/// The particle field: every piece of mutable renderer state behind one
/// owner, stepped once per display frame via [`ParticleField::tick`].
pub struct ParticleField {
    pub ambient: Vec<AmbientParticle>,
    pub bursts: Vec<BurstParticle>,
    pub pointer: PointerState,
    pub width: f64,
    pub height: f64,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, ambient_count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let ambient = (0..ambient_count)
            .map(|_| AmbientParticle::spawn(&mut rng, width, height))
            .collect::<Vec<_>>();
        log::info!(
            "[field] {} ambient particles over {:.0}x{:.0}",
            ambient.len(),
            width,
            height
        );
        Self {
            ambient,
            bursts: Vec::new(),
            pointer: PointerState::default(),
            width,
            height,
            rng,
        }
    }

    /// Record the pointer position; read lazily by the next tick.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.pos = Some(DVec2::new(x, y));
    }

    /// Update the field bounds. Existing particles keep their positions and
    /// wrap against the new bounds on their next step.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Spawn a batch of burst hearts at the click point.
    pub fn on_click(&mut self, x: f64, y: f64) {
        for _ in 0..BURST_PER_CLICK {
            let burst = BurstParticle::spawn(&mut self.rng, x, y);
            self.bursts.push(burst);
        }
    }

    /// Advance every particle by one frame and redraw the whole field.
    /// Infallible: degenerate input (pointer unset, zero distance) degrades
    /// to "no repulsion".
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.width, self.height);

        for p in &mut self.ambient {
            p.step(&self.pointer, self.width, self.height);
            surface.draw_glyph(p.glyph, p.pos, p.size, p.color, 1.0);
        }

        // Reverse creation order so removal is safe mid-iteration and the
        // surviving bursts keep their order.
        for i in (0..self.bursts.len()).rev() {
            let b = &mut self.bursts[i];
            b.step();
            let alpha = b.life.clamp(0.0, 1.0);
            surface.draw_glyph(HEART, b.pos, b.size, Color::new(HEART_RGB, 1.0), alpha);
            if self.bursts[i].expired() {
                self.bursts.remove(i);
            }
        }
    }
}
