use rand::{Rng, SeedableRng, rngs::SmallRng};
use std::{
    io::Write,
    time::{SystemTime, UNIX_EPOCH},
};

pub const MESSAGES: &[&str] = &[
    "🤔 I see you typed 'gut' instead of 'git'. Don't worry, happens to the best of us!",
    "😄 'gut' feeling tells me you meant 'git'! Let me fix that for you...",
    "🎯 Close! You typed 'gut' but I think you meant 'git'. Forwarding your command...",
    "😅 Trust your gut... I mean git! Redirecting your 'gut' command to 'git'.",
    "🔧 Gut instinct: you probably meant 'git'. Running the correct command now!",
    "💡 'gut' reaction: this should be 'git'! No worries, I've got you covered.",
    "🚀 From 'gut' to 'git' in 0.1 seconds! Here we go...",
    "😊 Typo detected! Transforming 'gut' into 'git' like magic.",
    "🎪 Welcome to the 'gut' to 'git' translation service! Your command is being processed.",
    "🤓 Fun fact: 'gut' backwards is 'tug', but you probably want 'git'!",
];

/// Returns a generator seeded from the current time.
///
/// The sequence is not meant to be reproducible or unpredictable.
#[must_use]
pub fn time_seeded_rng() -> SmallRng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    #[expect(clippy::cast_possible_truncation)]
    let seed = nanos as u64;
    SmallRng::seed_from_u64(seed)
}

#[must_use]
pub fn choose<R: Rng>(rng: &mut R) -> &'static str {
    MESSAGES[rng.random_range(0..MESSAGES.len())]
}

/// Writes one message followed by a blank line.
///
/// Write errors are ignored. A closed or broken stdout must not keep the command from being
/// forwarded.
pub fn greet<W: Write, R: Rng>(mut writer: W, rng: &mut R) {
    let message = choose(rng);
    writeln!(writer, "{message}\n")
        .and_then(|()| writer.flush())
        .unwrap_or_default();
}
