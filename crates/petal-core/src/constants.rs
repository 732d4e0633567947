// Particle field tuning constants shared by the simulation and the web
// frontend. Values are in CSS pixels and pixels-per-frame.

// Ambient field
pub const AMBIENT_COUNT: usize = 120;
pub const AMBIENT_VX_SPAN: f64 = 0.5; // vx in [-0.25, 0.25)
pub const AMBIENT_VY_MIN: f64 = 0.2; // slow fall
pub const AMBIENT_VY_SPAN: f64 = 0.5; // vy in [0.2, 0.7)
pub const AMBIENT_OPACITY_MIN: f64 = 0.4;
pub const AMBIENT_OPACITY_SPAN: f64 = 0.5;
pub const AMBIENT_DENSITY_MIN: f64 = 1.0;
pub const AMBIENT_DENSITY_SPAN: f64 = 20.0;
pub const WRAP_RESET_Y: f64 = -10.0; // respawn just above the top edge

// Glyph size banding
pub const HEART_SIZE_MIN: f64 = 10.0;
pub const HEART_SIZE_SPAN: f64 = 20.0;
pub const MESSAGE_SIZE_MIN: f64 = 8.0;
pub const MESSAGE_SIZE_SPAN: f64 = 10.0;

// Color banding (rgb); alpha comes from the particle opacity
pub const HEART_RGB: [u8; 3] = [220, 80, 80]; // warm red
pub const MESSAGE_RGB: [u8; 3] = [120, 100, 90]; // muted gold

// Pointer interaction
pub const POINTER_RADIUS: f64 = 150.0;
pub const REPULSION_STRENGTH: f64 = 0.6;

// Click bursts
pub const BURST_PER_CLICK: usize = 12;
pub const BURST_SIZE_MIN: f64 = 5.0;
pub const BURST_SIZE_SPAN: f64 = 15.0;
pub const BURST_SPEED_MIN: f64 = 2.0;
pub const BURST_SPEED_SPAN: f64 = 3.0;
pub const BURST_DECAY_MIN: f64 = 0.01;
pub const BURST_DECAY_SPAN: f64 = 0.02;
pub const BURST_GRAVITY: f64 = 0.1; // added to vy each frame

pub const HEART: &str = "❤";

// Uniform pick set; the heart appears eight times so roughly half the field
// is hearts.
pub const GLYPHS: &[&str] = &[
    "I'm Sorry",
    "Forgive Me",
    "I Miss You",
    "My Mistake",
    "I Love You",
    "Please",
    "My Everything",
    HEART,
    HEART,
    HEART,
    HEART,
    HEART,
    HEART,
    HEART,
    HEART,
];
