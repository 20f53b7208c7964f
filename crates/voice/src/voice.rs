//! Voice tuning and preferred-voice selection.

/// Voices tried first, by name substring, in order.
pub const DEFAULT_PREFERRED_VOICES: [&str; 3] = ["Google", "Daniel", "Samantha"];

/// Relative speech settings, 1.0 being the backend's default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceProfile {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self {
            rate: 0.8,
            pitch: 1.1,
            volume: 0.8,
        }
    }
}

/// Pick a voice from `available`.
///
/// Voices are scanned in listing order; the first one whose name contains
/// any non-empty preference wins. `None` means "use the backend default".
pub fn select_voice<'a, S: AsRef<str>>(
    available: &'a [String],
    preferred: &[S],
) -> Option<&'a str> {
    available
        .iter()
        .find(|voice| {
            preferred.iter().any(|want| {
                let want = want.as_ref();
                !want.is_empty() && voice.contains(want)
            })
        })
        .map(String::as_str)
}

/// Split a comma separated preference list, dropping blanks.
pub fn parse_preferences(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn default_preferences() -> Vec<String> {
    DEFAULT_PREFERRED_VOICES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voices(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn listing_order_beats_preference_order() {
        let available = voices(&["Samantha", "Alex", "Daniel"]);
        assert_eq!(
            select_voice(&available, &DEFAULT_PREFERRED_VOICES),
            Some("Samantha")
        );

        let available = voices(&["Alex", "Daniel", "Google US English"]);
        assert_eq!(
            select_voice(&available, &DEFAULT_PREFERRED_VOICES),
            Some("Daniel")
        );
    }

    #[test]
    fn matches_by_substring() {
        let available = voices(&["Microsoft David", "Google UK English Female"]);
        assert_eq!(
            select_voice(&available, &["Google"]),
            Some("Google UK English Female")
        );
    }

    #[test]
    fn falls_back_to_default_voice() {
        let available = voices(&["Alex", "Fred"]);
        assert_eq!(select_voice(&available, &DEFAULT_PREFERRED_VOICES), None);
        assert_eq!(select_voice::<&str>(&[], &["Google"]), None);
        assert_eq!(select_voice(&available, &[""]), None);
    }

    #[test]
    fn parses_preference_lists() {
        assert_eq!(
            parse_preferences(" Karen, ,Moira,"),
            vec!["Karen".to_string(), "Moira".to_string()]
        );
        assert!(parse_preferences("").is_empty());
        assert_eq!(default_preferences().len(), 3);
    }
}
