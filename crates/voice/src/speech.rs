//! Speech backends.
//!
//! Backends are fire-and-forget: `speak` starts an utterance and returns at once.
//! Anything that goes wrong is reported as a [`SpeechError`] for the caller to
//! log; no backend ever panics on a missing program or voice.

use std::io;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

use thiserror::Error;
use tracing::warn;

use crate::voice::VoiceProfile;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("unknown speech program: {0}")]
    UnknownProgram(String),
}

/// Something that can read text aloud.
pub trait SpeechBackend {
    /// Installed voice names (may be empty)
    fn voices(&mut self) -> Vec<String>;

    /// Start speaking `text`; `voice = None` uses the default voice.
    fn speak(
        &mut self,
        text: &str,
        voice: Option<&str>,
        profile: &VoiceProfile,
    ) -> Result<(), SpeechError>;

    /// Stop the utterance in progress, if any.
    fn cancel(&mut self);
}

impl<B: SpeechBackend + ?Sized> SpeechBackend for Box<B> {
    fn voices(&mut self) -> Vec<String> {
        (**self).voices()
    }

    fn speak(
        &mut self,
        text: &str,
        voice: Option<&str>,
        profile: &VoiceProfile,
    ) -> Result<(), SpeechError> {
        (**self).speak(text, voice, profile)
    }

    fn cancel(&mut self) {
        (**self).cancel()
    }
}

/// Backend used when nothing can speak.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSpeech;

impl SpeechBackend for NullSpeech {
    fn voices(&mut self) -> Vec<String> {
        Vec::new()
    }

    fn speak(
        &mut self,
        _text: &str,
        _voice: Option<&str>,
        _profile: &VoiceProfile,
    ) -> Result<(), SpeechError> {
        Ok(())
    }

    fn cancel(&mut self) {}
}

/// A recorded utterance
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Option<String>,
    pub profile: VoiceProfile,
}

/// Records utterances instead of playing them.
#[derive(Debug, Clone, Default)]
pub struct MemorySpeech {
    pub installed: Vec<String>,
    pub spoken: Vec<Utterance>,
    pub cancels: usize,
    /// Number of `voices()` queries
    pub listings: usize,
}

impl MemorySpeech {
    pub fn with_voices<I, S>(voices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            installed: voices.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

impl SpeechBackend for MemorySpeech {
    fn voices(&mut self) -> Vec<String> {
        self.listings += 1;
        self.installed.clone()
    }

    fn speak(
        &mut self,
        text: &str,
        voice: Option<&str>,
        profile: &VoiceProfile,
    ) -> Result<(), SpeechError> {
        self.spoken.push(Utterance {
            text: text.to_string(),
            voice: voice.map(str::to_string),
            profile: *profile,
        });
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

/// External text-to-speech programs we know how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechProgram {
    EspeakNg,
    Espeak,
    Say,
}

impl SpeechProgram {
    /// Detection order
    pub const ALL: [SpeechProgram; 3] = [
        SpeechProgram::EspeakNg,
        SpeechProgram::Espeak,
        SpeechProgram::Say,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "espeak-ng" => Some(SpeechProgram::EspeakNg),
            "espeak" => Some(SpeechProgram::Espeak),
            "say" => Some(SpeechProgram::Say),
            _ => None,
        }
    }

    pub fn binary(&self) -> &'static str {
        match self {
            SpeechProgram::EspeakNg => "espeak-ng",
            SpeechProgram::Espeak => "espeak",
            SpeechProgram::Say => "say",
        }
    }

    fn voice_list_args(&self) -> &'static [&'static str] {
        match self {
            SpeechProgram::EspeakNg | SpeechProgram::Espeak => &["--voices"],
            SpeechProgram::Say => &["-v", "?"],
        }
    }

    /// Extract voice names from the program's voice listing.
    ///
    /// espeak prints a table whose fourth column is the voice name; `say -v ?`
    /// prints `Name  locale  # sample`, where the name may contain spaces.
    pub fn parse_voices(&self, listing: &str) -> Vec<String> {
        match self {
            SpeechProgram::EspeakNg | SpeechProgram::Espeak => listing
                .lines()
                .skip(1)
                .filter_map(|line| line.split_whitespace().nth(3))
                .map(str::to_string)
                .collect(),
            SpeechProgram::Say => listing
                .lines()
                .filter_map(|line| {
                    let head = line.split('#').next()?.trim_end();
                    let (name, _locale) = head.rsplit_once(char::is_whitespace)?;
                    let name = name.trim();
                    (!name.is_empty()).then(|| name.to_string())
                })
                .collect(),
        }
    }

    /// Command-line arguments for one utterance.
    pub fn speak_args(
        &self,
        text: &str,
        voice: Option<&str>,
        profile: &VoiceProfile,
    ) -> Vec<String> {
        let words_per_minute = (175.0 * profile.rate).round().max(1.0) as u32;
        let mut args = Vec::with_capacity(9);
        match self {
            SpeechProgram::EspeakNg | SpeechProgram::Espeak => {
                let pitch = (50.0 * profile.pitch).round().clamp(0.0, 99.0) as u32;
                let amplitude = (100.0 * profile.volume).round().clamp(0.0, 200.0) as u32;
                args.extend([
                    "-s".to_string(),
                    words_per_minute.to_string(),
                    "-p".to_string(),
                    pitch.to_string(),
                    "-a".to_string(),
                    amplitude.to_string(),
                ]);
            }
            SpeechProgram::Say => {
                args.extend(["-r".to_string(), words_per_minute.to_string()]);
            }
        }
        if let Some(voice) = voice {
            args.extend(["-v".to_string(), voice.to_string()]);
        }
        args.push(text.to_string());
        args
    }

    /// First known program found on `PATH`.
    pub fn detect() -> Option<Self> {
        Self::ALL.into_iter().find(|p| find_on_path(p.binary()).is_some())
    }
}

fn find_on_path(binary: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

/// Speaks through an external program, one child process per utterance.
#[derive(Debug)]
pub struct CommandSpeech {
    program: SpeechProgram,
    child: Option<Child>,
}

impl CommandSpeech {
    pub fn new(program: SpeechProgram) -> Self {
        Self {
            program,
            child: None,
        }
    }
}

impl SpeechBackend for CommandSpeech {
    fn voices(&mut self) -> Vec<String> {
        let output = Command::new(self.program.binary())
            .args(self.program.voice_list_args())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();
        match output {
            Ok(out) if out.status.success() => {
                self.program.parse_voices(&String::from_utf8_lossy(&out.stdout))
            }
            _ => Vec::new(),
        }
    }

    fn speak(
        &mut self,
        text: &str,
        voice: Option<&str>,
        profile: &VoiceProfile,
    ) -> Result<(), SpeechError> {
        self.cancel();
        let child = Command::new(self.program.binary())
            .args(self.program.speak_args(text, voice, profile))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.binary(),
                source,
            })?;
        self.child = Some(child);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            // Reap so finished utterances don't linger as zombies.
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeech {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Build the backend named by `name` (`"none"` for silence, empty for
/// autodetection).
pub fn backend_from_name(name: &str) -> Result<Box<dyn SpeechBackend + Send>, SpeechError> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("none") {
        return Ok(Box::new(NullSpeech));
    }
    if name.is_empty() {
        return Ok(match SpeechProgram::detect() {
            Some(program) => Box::new(CommandSpeech::new(program)),
            None => Box::new(NullSpeech),
        });
    }
    SpeechProgram::from_name(name)
        .map(|program| Box::new(CommandSpeech::new(program)) as Box<dyn SpeechBackend + Send>)
        .ok_or_else(|| SpeechError::UnknownProgram(name.to_string()))
}

/// Like [`backend_from_name`], but an unknown program degrades to silence.
pub fn backend_or_silent(name: &str) -> Box<dyn SpeechBackend + Send> {
    backend_from_name(name).unwrap_or_else(|err| {
        warn!(error = %err, "speech disabled");
        Box::new(NullSpeech)
    })
}
