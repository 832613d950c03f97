/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Reference screen the entity layout was tuned against
    pub const REFERENCE_WIDTH: u32 = 960;
    pub const REFERENCE_HEIGHT: u32 = 540;

    // Bootstrap prototype screen
    pub const PROTOTYPE_WIDTH: u32 = 1920;
    pub const PROTOTYPE_HEIGHT: u32 = 1080;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: f32 = 5.0; // pixels per frame
    pub const PADDLE_INSET: f32 = 100.0; // distance of paddle centre from the side edge
    pub const PADDLE_START_Y: f32 = 100.0;

    // Ball
    pub const BALL_RADIUS: i32 = 20;
    pub const BALL_START_X: f32 = 300.0; // also the restart point at reference scale
    pub const BALL_START_Y: f32 = 300.0;
    pub const BALL_START_XV: f32 = 2.0;
    pub const BALL_START_YV: f32 = 2.0;

    // Frame pacing
    pub const FRAME_DELAY_MS: u64 = 16; // ~60 Hz, not adaptive
}
