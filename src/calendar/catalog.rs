//! Shift pattern lookup.
//!
//! Patterns normally come from configuration (mirroring the backing store).
//! When a shift type code is missing there, the [`DefaultPatternProvider`]
//! supplies the built-in fallback table; the fallback is logged so data gaps
//! stay visible.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CalendarError, CalendarResult};
use crate::models::{DEFAULT_MANUAL_CYCLE_DAYS, RotationWeek, ShiftPattern};

/// Where a resolved pattern came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSource {
    /// The configured pattern table.
    Configured,
    /// The built-in fallback table.
    Default,
}

/// A pattern found for a shift type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPattern<'a> {
    /// The pattern.
    pub pattern: &'a ShiftPattern,
    /// Where it was found.
    pub source: PatternSource,
}

/// Built-in fallback patterns.
///
/// | code          | pattern                                          |
/// |---------------|--------------------------------------------------|
/// | `5x2`         | fixed, Saturday and Sunday off                   |
/// | `6x1`         | fixed, Sunday off                                |
/// | `rotativo_2s` | 2-week rotation: Wed+Sun off, then Fri+Sat off   |
/// | `especial_28` | manual 28-day cycle, rest days from the template |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPatternProvider {
    patterns: HashMap<String, ShiftPattern>,
}

impl Default for DefaultPatternProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DefaultPatternProvider {
    /// Returns the built-in fallback table.
    pub fn builtin() -> Self {
        let patterns = [
            (
                "5x2",
                ShiftPattern::Fixed {
                    off_days: vec![0, 6],
                },
            ),
            ("6x1", ShiftPattern::Fixed { off_days: vec![0] }),
            (
                "rotativo_2s",
                ShiftPattern::Rotating {
                    cycle: 2,
                    weeks: vec![RotationWeek::new(vec![3, 0]), RotationWeek::new(vec![5, 6])],
                },
            ),
            (
                "especial_28",
                ShiftPattern::Manual {
                    cycle_days: DEFAULT_MANUAL_CYCLE_DAYS,
                },
            ),
        ]
        .into_iter()
        .map(|(code, pattern)| (code.to_string(), pattern))
        .collect();

        Self { patterns }
    }

    /// Returns a provider with no fallbacks.
    pub fn empty() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    /// Looks up a fallback pattern.
    pub fn get(&self, code: &str) -> Option<&ShiftPattern> {
        self.patterns.get(code)
    }

    /// Returns the shift type codes this provider covers, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.patterns.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

/// Configured patterns backed by a [`DefaultPatternProvider`].
///
/// # Example
///
/// ```
/// use shift_calendar::calendar::{DefaultPatternProvider, PatternCatalog, PatternSource};
/// use std::collections::HashMap;
///
/// let catalog = PatternCatalog::new(HashMap::new(), DefaultPatternProvider::builtin());
/// let resolved = catalog.resolve("5x2").unwrap();
/// assert_eq!(resolved.source, PatternSource::Default);
/// assert!(catalog.resolve("unknown").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    configured: HashMap<String, ShiftPattern>,
    defaults: DefaultPatternProvider,
}

impl PatternCatalog {
    /// Creates a catalog from configured patterns and a fallback provider.
    pub fn new(configured: HashMap<String, ShiftPattern>, defaults: DefaultPatternProvider) -> Self {
        Self {
            configured,
            defaults,
        }
    }

    /// Resolves a shift type code, preferring the configured table.
    pub fn resolve(&self, code: &str) -> Option<ResolvedPattern<'_>> {
        if let Some(pattern) = self.configured.get(code) {
            return Some(ResolvedPattern {
                pattern,
                source: PatternSource::Configured,
            });
        }

        match self.defaults.get(code) {
            Some(pattern) => {
                warn!(
                    shift_type_code = %code,
                    kind = pattern.kind(),
                    "No configured pattern, using default"
                );
                Some(ResolvedPattern {
                    pattern,
                    source: PatternSource::Default,
                })
            }
            None => {
                debug!(shift_type_code = %code, "No pattern found");
                None
            }
        }
    }

    /// Resolves a shift type code or fails.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::PatternNotFound`] if neither table knows the
    /// code.
    pub fn get_pattern(&self, code: &str) -> CalendarResult<&ShiftPattern> {
        self.resolve(code)
            .map(|resolved| resolved.pattern)
            .ok_or_else(|| CalendarError::PatternNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the configured patterns.
    pub fn configured(&self) -> &HashMap<String, ShiftPattern> {
        &self.configured
    }
}
