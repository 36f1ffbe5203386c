// std imports
use std::{cmp::Ordering, fmt, sync::Arc};

const MIN_RELEVANCE: f64 = 0.75;

// ---

/// Known names that are close to a wanted one, most relevant first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Suggestions {
    candidates: Vec<(f64, Arc<str>)>,
}

impl Suggestions {
    pub fn new<T, I>(wanted: &str, variants: I) -> Self
    where
        T: Into<Arc<str>>,
        I: IntoIterator<Item = T>,
    {
        let mut candidates = Vec::<(f64, Arc<str>)>::new();

        for variant in variants {
            let variant = variant.into();
            if candidates.iter().any(|(_, known)| *known == variant) {
                continue;
            }

            let relevance = strsim::jaro(wanted, &variant);
            if relevance > MIN_RELEVANCE {
                let pos = candidates
                    .binary_search_by(|(r, _)| if *r < relevance { Ordering::Greater } else { Ordering::Less })
                    .unwrap_or_else(|e| e);
                candidates.insert(pos, (relevance, variant));
            }
        }

        Self { candidates }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|(_, candidate)| candidate.as_ref())
    }

    /// Formats as a trailing hint, e.g. `, did you mean "seed"?`, or nothing when empty.
    pub fn hint(&self) -> Hint<'_> {
        Hint(self)
    }
}

// ---

pub struct Hint<'a>(&'a Suggestions);

impl fmt::Display for Hint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.candidates.len();
        for (i, candidate) in self.0.iter().enumerate() {
            match i {
                0 => write!(f, ", did you mean ")?,
                _ if i == n - 1 => write!(f, " or ")?,
                _ => write!(f, ", ")?,
            }
            write!(f, "{candidate:?}")?;
        }
        if n != 0 {
            write!(f, "?")?;
        }
        Ok(())
    }
}
