//! Voice module - callouts and speech output
//!
//! Converts drawn numbers into traditional Tambola callouts ("Two fat ladies,
//! eighty eight") and reads them out through a pluggable speech backend.
//! Speech is strictly best-effort: a missing program, missing voice or failed
//! utterance is logged and never reaches the game.
//!
//! - [`callout`]: phrase table and number-to-words fallback
//! - [`voice`]: voice profile and preferred-voice selection
//! - [`speech`]: backends (`espeak-ng`/`espeak`/`say`, silent, recording)
//! - [`announcer`]: the sink the game front end talks to
//!
//! ```
//! use tambola_voice::{callout, Announcer, MemorySpeech};
//!
//! assert_eq!(callout(11), "Legs eleven");
//! assert_eq!(callout(47), "Number forty seven");
//!
//! let mut announcer = Announcer::new(MemorySpeech::with_voices(["Samantha"]));
//! announcer.announce(90);
//! assert_eq!(announcer.backend().spoken[0].voice.as_deref(), Some("Samantha"));
//! ```

pub mod announcer;
pub mod callout;
pub mod speech;
pub mod voice;

pub use announcer::Announcer;
pub use callout::{callout, number_to_words, traditional_phrase};
pub use speech::{
    backend_from_name, backend_or_silent, CommandSpeech, MemorySpeech, NullSpeech, SpeechBackend,
    SpeechError, SpeechProgram, Utterance,
};
pub use voice::{
    default_preferences, parse_preferences, select_voice, VoiceProfile, DEFAULT_PREFERRED_VOICES,
};
