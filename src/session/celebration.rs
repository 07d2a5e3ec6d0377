use rand::Rng;

/// Stars spawned per correct answer.
pub const STAR_COUNT: usize = 8;

/// One celebration star, positioned in percent of the lesson area so the
/// renderer can scale it to any terminal size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub id: u32,
}

/// Spawn a fresh batch of randomly placed stars. Ids continue from `next_id`
/// so consecutive batches never collide.
pub fn spawn<R: Rng>(rng: &mut R, next_id: u32) -> Vec<Star> {
    (0..STAR_COUNT)
        .map(|i| Star {
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            id: next_id + i as u32,
        })
        .collect()
}
