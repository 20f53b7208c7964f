//! Announcer: turns drawn numbers into callouts and hands them to a speech backend.

use tracing::{debug, warn};

use crate::callout::callout;
use crate::speech::SpeechBackend;
use crate::voice::{default_preferences, select_voice, VoiceProfile};

pub struct Announcer<B> {
    backend: B,
    enabled: bool,
    profile: VoiceProfile,
    preferred: Vec<String>,
    /// Resolved on first use; the inner `None` means the backend default.
    voice: Option<Option<String>>,
    last_callout: Option<String>,
}

impl<B: SpeechBackend> Announcer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            enabled: true,
            profile: VoiceProfile::default(),
            preferred: default_preferences(),
            voice: None,
            last_callout: None,
        }
    }

    pub fn with_preferences(mut self, preferred: Vec<String>) -> Self {
        self.preferred = preferred;
        self.voice = None;
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning voice off also silences whatever is being said.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.backend.cancel();
        }
        self.enabled = enabled;
    }

    /// Flip the enabled flag; returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.set_enabled(!self.enabled);
        self.enabled
    }

    pub fn last_callout(&self) -> Option<&str> {
        self.last_callout.as_deref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Voice chosen for this backend, resolving it if needed.
    pub fn selected_voice(&mut self) -> Option<&str> {
        self.resolve_voice();
        self.voice.as_ref().and_then(|v| v.as_deref())
    }

    /// Record the callout for `number` and, when enabled, speak it.
    ///
    /// Speech failures are logged and otherwise ignored.
    pub fn announce(&mut self, number: u8) -> &str {
        let text = callout(number);

        if self.enabled {
            self.backend.cancel();
            self.resolve_voice();
            let voice = self.voice.as_ref().and_then(|v| v.as_deref());
            match self.backend.speak(&text, voice, &self.profile) {
                Ok(()) => debug!(number, callout = %text, voice = ?voice, "callout spoken"),
                Err(err) => warn!(number, error = %err, "speech failed"),
            }
        }

        self.last_callout.insert(text).as_str()
    }

    /// Forget the last callout and stop speaking (used on game reset).
    pub fn clear(&mut self) {
        self.backend.cancel();
        self.last_callout = None;
    }

    fn resolve_voice(&mut self) {
        if self.voice.is_some() {
            return;
        }
        let available = self.backend.voices();
        let chosen = select_voice(&available, &self.preferred).map(str::to_string);
        debug!(available = available.len(), chosen = ?chosen, "voice selected");
        self.voice = Some(chosen);
    }
}
