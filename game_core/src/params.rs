/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const FIELD_WIDTH: f32 = 750.0;
    pub const FIELD_HEIGHT: f32 = 585.0;
    pub const GRID: f32 = 15.0; // wall thickness, ball size, paddle width

    // Paddle
    pub const PADDLE_HEIGHT_CELLS: f32 = 5.0; // 5 * GRID = 75
    pub const PADDLE_SPEED: f32 = 6.0; // pixels per frame

    // Ball
    pub const BALL_SPEED: f32 = 5.0; // pixels per frame, per axis
    pub const RESTART_BALL_SPEED: f32 = 2.0;

    // Score
    pub const WIN_SCORE: u32 = 7; // First to 7 wins

    // Timing
    pub const RECENTER_DELAY: f32 = 0.4; // seconds before the ball comes back
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    // Opponent freezes on 1 roll out of this many
    pub const OPPONENT_MISS_ODDS: u32 = 6;

    // Score text
    pub const LEFT_SCORE_POS: (f32, f32) = (180.0, 100.0);
    pub const RIGHT_SCORE_POS: (f32, f32) = (600.0, 100.0);
    pub const SCORE_FONT: &'static str = "30px solid";
}
