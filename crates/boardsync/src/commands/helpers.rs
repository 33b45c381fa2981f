use chrono::{Local, Utc};
use rand::Rng;
use uuid::Uuid;

/// Canvas region new elements are dropped into.
pub const CANVAS_X: (f64, f64) = (200.0, 700.0);
pub const CANVAS_Y: (f64, f64) = (100.0, 400.0);

/// Time-derived id: `{prefix}-{millis}-{suffix}`. The random suffix keeps ids
/// minted within the same millisecond distinct.
pub fn mint_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}-{}", prefix, millis, &suffix[..8])
}

/// Local wall-clock time as `HH:MM:SS`, 24-hour.
pub fn wall_clock() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

pub fn random_position() -> (f64, f64) {
    let mut rng = rand::thread_rng();
    (
        rng.gen_range(CANVAS_X.0..=CANVAS_X.1),
        rng.gen_range(CANVAS_Y.0..=CANVAS_Y.1),
    )
}
