//! Path patterns for subscriptions and request routes.
//!
//! Paths use `/` as the level separator. Patterns may use MQTT-style
//! wildcards:
//! - `+` matches exactly one level
//! - `#` matches zero or more remaining levels (last segment only)

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Exact(String),
    Single,
    Rest,
}

impl Pattern {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split('/')
            .map(|s| match s {
                "+" => Segment::Single,
                "#" => Segment::Rest,
                other => Segment::Exact(other.to_string()),
            })
            .collect();
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The pattern as it was registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True if the pattern has no wildcards.
    pub fn is_exact(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Exact(_)))
    }

    /// Check whether a concrete path matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut levels = path.split('/');
        for segment in &self.segments {
            match segment {
                Segment::Rest => return true,
                Segment::Single => {
                    if levels.next().is_none() {
                        return false;
                    }
                }
                Segment::Exact(want) => match levels.next() {
                    Some(level) if level == want => {}
                    _ => return false,
                },
            }
        }
        levels.next().is_none()
    }
}
