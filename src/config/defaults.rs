//! Default value functions for serde deserialization.

pub fn cell_size() -> f32 {
    0.10
}

pub fn player_height() -> f32 {
    1.5
}

pub fn ankle_height() -> f32 {
    0.2
}
