//! Text helpers for whatever draws the frames.

use std::borrow::Cow;
use std::fmt;

/// Human label for a period index.
pub fn period_label(period: usize) -> Option<&'static str> {
    match period {
        0 => Some("1st Half"),
        1 => Some("2nd Half"),
        2 => Some("1st Overtime"),
        3 => Some("2nd Overtime"),
        _ => None,
    }
}

/// Elapsed time within a period, shown as `minutes : seconds`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchClock {
    pub minutes: u32,
    pub seconds: f64,
}

impl MatchClock {
    pub fn from_seconds(t: f64) -> Self {
        let t = t.max(0.0);
        let minutes = (t / 60.0).floor();
        Self { minutes: minutes as u32, seconds: t - minutes * 60.0 }
    }
}

impl fmt::Display for MatchClock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} : {:.2}", self.minutes, self.seconds)
    }
}

const TRANSLITERATION: &[(char, char)] =
    &[('á', 'a'), ('é', 'e'), ('î', 'i'), ('ñ', 'n'), ('ö', 'o'), ('ü', 'u')];

/// Best-effort ASCII rendering of a player name.
///
/// Known accented letters are mapped to their base letter; anything else
/// outside ASCII is dropped.
pub fn ascii_name(name: &str) -> Cow<'_, str> {
    if name.is_ascii() {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len());
    let mut dropped = false;
    for c in name.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(&(_, a)) = TRANSLITERATION.iter().find(|(u, _)| *u == c) {
            out.push(a);
        } else {
            dropped = true;
        }
    }
    if dropped {
        log::warn!("Dropped non-ASCII characters from name {:?} -> {:?}", name, out);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_labels() {
        assert_eq!(period_label(0), Some("1st Half"));
        assert_eq!(period_label(3), Some("2nd Overtime"));
        assert_eq!(period_label(4), None);
    }

    #[test]
    fn test_clock() {
        let clock = MatchClock::from_seconds(125.5);
        assert_eq!(clock.minutes, 2);
        assert!((clock.seconds - 5.5).abs() < 1e-9);
        assert_eq!(clock.to_string(), "2 : 5.50");
        assert_eq!(MatchClock::from_seconds(0.0).to_string(), "0 : 0.00");
    }

    #[test]
    fn test_ascii_name() {
        assert!(matches!(ascii_name("Plain Name"), Cow::Borrowed(_)));
        assert_eq!(ascii_name("José Muñoz"), "Jose Munoz");
        assert_eq!(ascii_name("Müller"), "Muller");
        assert_eq!(ascii_name("Łukasz"), "ukasz");
    }
}
