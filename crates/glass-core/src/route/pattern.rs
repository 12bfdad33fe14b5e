//! Path pattern compilation, matching and ranking.
//!
//! Supported syntax, one token per `/`-separated segment:
//! - `products` - static segment (case-insensitive)
//! - `:id` - named param, matches one segment
//! - `:id(\d+)` - named param restricted by a custom regex
//! - `:rest(.*)*` - repeatable param, matches zero or more segments
//!
//! A param may carry one modifier: `?` (optional), `+` (one or more
//! segments) or `*` (zero or more segments). A trailing slash in the
//! requested path is ignored.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use percent_encoding::utf8_percent_encode;
use regex::{Regex, RegexBuilder};

use crate::config::pattern::{MAX_LENGTH, MAX_REGEX_SIZE, MAX_SEGMENTS};
use crate::error::RouteError;
use crate::location::{PATH_ENCODE_SET, decode};

/// Regex for a plain param segment.
const DEFAULT_PARAM_RE: &str = "[^/]+";

// Segment scores. Higher ranks first.
const SCORE_ROOT: i32 = 90;
const SCORE_STATIC: i32 = 80;
const SCORE_PARAM: i32 = 60;
const BONUS_CUSTOM_RE: i32 = 10;
const BONUS_WILDCARD: i32 = -50;
const BONUS_REPEATABLE: i32 = -20;
const BONUS_OPTIONAL: i32 = -8;

// ============================================================================
// Params
// ============================================================================

/// Decoded path params extracted by a match, keyed by param name.
///
/// Repeatable params are joined back with `/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ============================================================================
// Segments
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Modifier {
    None,
    Optional,
    OneOrMore,
    ZeroOrMore,
}

impl Modifier {
    fn is_repeatable(self) -> bool {
        matches!(self, Self::OneOrMore | Self::ZeroOrMore)
    }

    fn is_optional(self) -> bool {
        matches!(self, Self::Optional | Self::ZeroOrMore)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param {
        name: String,
        regex: Option<String>,
        modifier: Modifier,
    },
}

impl Segment {
    fn score(&self) -> i32 {
        match self {
            Self::Static(_) => SCORE_STATIC,
            Self::Param {
                regex, modifier, ..
            } => {
                let mut score = SCORE_PARAM;
                if let Some(re) = regex {
                    score += BONUS_CUSTOM_RE;
                    if re == ".*" {
                        score += BONUS_WILDCARD;
                    }
                }
                if modifier.is_repeatable() {
                    score += BONUS_REPEATABLE;
                }
                if modifier.is_optional() {
                    score += BONUS_OPTIONAL;
                }
                score
            }
        }
    }

    /// Regex fragment for this segment, including its leading `/`.
    fn to_regex(&self) -> String {
        match self {
            Self::Static(text) => format!("/{}", regex::escape(text)),
            Self::Param {
                name,
                regex,
                modifier,
            } => {
                let re = regex.as_deref().unwrap_or(DEFAULT_PARAM_RE);
                let body = if modifier.is_repeatable() {
                    format!("(?P<{name}>(?:{re})(?:/(?:{re}))*)")
                } else {
                    format!("(?P<{name}>{re})")
                };
                if modifier.is_optional() {
                    format!("(?:/{body})?")
                } else {
                    format!("/{body}")
                }
            }
        }
    }
}

/// Parse one `:name(re)mod` token.
fn parse_param(pattern: &str, token: &str) -> Result<Segment, RouteError> {
    let invalid = |reason: &str| RouteError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    let rest = &token[1..];
    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let name = &rest[..name_len];
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid("param name must start with a letter or '_'"));
    }

    let mut rest = &rest[name_len..];
    let mut custom = None;
    if rest.starts_with('(') {
        let mut depth = 0usize;
        let mut close = None;
        for (i, c) in rest.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        let close = close.ok_or_else(|| invalid("unbalanced '(' in param regex"))?;
        let re = &rest[1..close];
        if re.is_empty() {
            return Err(invalid("empty param regex"));
        }
        custom = Some(re.to_string());
        rest = &rest[close + 1..];
    }

    let modifier = match rest {
        "" => Modifier::None,
        "?" => Modifier::Optional,
        "+" => Modifier::OneOrMore,
        "*" => Modifier::ZeroOrMore,
        _ => return Err(invalid("unexpected characters after param")),
    };

    Ok(Segment::Param {
        name: name.to_string(),
        regex: custom,
        modifier,
    })
}

// ============================================================================
// PathPattern
// ============================================================================

/// A compiled route pattern.
#[derive(Clone, Debug)]
pub struct PathPattern {
    pattern: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl PathPattern {
    /// Compile an absolute pattern such as `/products/update/:id`.
    pub fn new(pattern: &str) -> Result<Self, RouteError> {
        if pattern.len() > MAX_LENGTH {
            return Err(RouteError::PatternTooLong {
                pattern: pattern.to_string(),
                max: MAX_LENGTH,
            });
        }
        if !pattern.starts_with('/') {
            return Err(RouteError::NotAbsolute(pattern.to_string()));
        }

        let tokens: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        if tokens.len() > MAX_SEGMENTS {
            return Err(RouteError::TooManySegments {
                pattern: pattern.to_string(),
                max: MAX_SEGMENTS,
            });
        }

        let mut segments = Vec::with_capacity(tokens.len());
        for token in tokens {
            let segment = if token.starts_with(':') {
                parse_param(pattern, token)?
            } else {
                Segment::Static(token.to_string())
            };
            segments.push(segment);
        }

        let mut names: Vec<&str> = segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param { name, .. } => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect();
        names.sort_unstable();
        if names.windows(2).any(|w| w[0] == w[1]) {
            return Err(RouteError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "duplicate param name".to_string(),
            });
        }

        let body: String = segments.iter().map(Segment::to_regex).collect();
        let regex = RegexBuilder::new(&format!("^{}/?$", body))
            .case_insensitive(true)
            .size_limit(MAX_REGEX_SIZE)
            .build()
            .map_err(|e| RouteError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            segments,
            regex,
        })
    }

    /// The source pattern string.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Match a (percent-encoded) path, returning decoded params.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let params = self
            .segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param { name, .. } => caps
                    .name(name)
                    .map(|m| (name.clone(), decode(m.as_str()))),
                Segment::Static(_) => None,
            })
            .collect();
        Some(params)
    }

    /// Per-segment ranking score.
    pub fn score(&self) -> Vec<i32> {
        if self.segments.is_empty() {
            return vec![SCORE_ROOT];
        }
        self.segments.iter().map(Segment::score).collect()
    }

    /// Build a concrete path from params.
    ///
    /// Values are percent-encoded; repeatable params keep their `/`.
    pub fn build(&self, params: &Params) -> Result<String, RouteError> {
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Static(text) => {
                    path.push('/');
                    path.push_str(text);
                }
                Segment::Param { name, modifier, .. } => match params.get(name) {
                    Some(value) if !value.is_empty() => {
                        path.push('/');
                        if modifier.is_repeatable() {
                            let parts: Vec<String> = value
                                .split('/')
                                .map(|part| utf8_percent_encode(part, PATH_ENCODE_SET).to_string())
                                .collect();
                            path.push_str(&parts.join("/"));
                        } else {
                            path.extend(utf8_percent_encode(value, PATH_ENCODE_SET));
                        }
                    }
                    _ if modifier.is_optional() => {}
                    _ => {
                        return Err(RouteError::MissingParam {
                            pattern: self.pattern.clone(),
                            param: name.clone(),
                        });
                    }
                },
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }
}

/// Order two score lists, higher-ranked first.
///
/// Segments are compared pairwise; when one list is a prefix of the other
/// the longer wins, unless its extra segment scores below zero.
pub fn compare_scores(a: &[i32], b: &[i32]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match y.cmp(x) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    if a.len().abs_diff(b.len()) == 1 {
        if a.len() > b.len() && a.last().is_some_and(|s| *s < 0) {
            return Ordering::Greater;
        }
        if b.len() > a.len() && b.last().is_some_and(|s| *s < 0) {
            return Ordering::Less;
        }
    }
    b.len().cmp(&a.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_static_match() {
        let p = PathPattern::new("/products/add").unwrap();
        assert_eq!(p.matches("/products/add"), Some(Params::new()));
        assert_eq!(p.matches("/products/add/"), Some(Params::new()));
        assert_eq!(p.matches("/Products/Add"), Some(Params::new()));
        assert_eq!(p.matches("/products"), None);
        assert_eq!(p.matches("/products/add/more"), None);
    }

    #[test]
    fn test_root_match() {
        let p = PathPattern::new("/").unwrap();
        assert!(p.matches("/").is_some());
        assert!(p.matches("/login").is_none());
    }

    #[test]
    fn test_named_params() {
        let p = PathPattern::new("/product/:category/:product_id").unwrap();
        assert_eq!(
            p.matches("/product/doors/7"),
            Some(params(&[("category", "doors"), ("product_id", "7")]))
        );
        assert_eq!(p.matches("/product/doors"), None);
        assert_eq!(p.matches("/product/doors/7/extra"), None);
    }

    #[test]
    fn test_param_values_are_decoded() {
        let p = PathPattern::new("/products/update/:id").unwrap();
        assert_eq!(
            p.matches("/products/update/a%20b"),
            Some(params(&[("id", "a b")]))
        );
    }

    #[test]
    fn test_custom_regex_param() {
        let p = PathPattern::new(r"/orders/:id(\d+)").unwrap();
        assert!(p.matches("/orders/42").is_some());
        assert!(p.matches("/orders/abc").is_none());
    }

    #[test]
    fn test_catch_all() {
        let p = PathPattern::new("/:pathMatch(.*)*").unwrap();
        assert_eq!(
            p.matches("/bogus/xyz"),
            Some(params(&[("pathMatch", "bogus/xyz")]))
        );
        assert!(p.matches("/").is_some());
        assert!(p.matches("/a").is_some());
    }

    #[test]
    fn test_optional_param() {
        let p = PathPattern::new("/feedback/:page?").unwrap();
        assert_eq!(p.matches("/feedback"), Some(Params::new()));
        assert_eq!(p.matches("/feedback/2"), Some(params(&[("page", "2")])));
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            PathPattern::new("relative"),
            Err(RouteError::NotAbsolute(_))
        ));
        assert!(matches!(
            PathPattern::new("/:"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert!(matches!(
            PathPattern::new("/:id(\\d+"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert!(matches!(
            PathPattern::new("/:id/:id"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert!(matches!(
            PathPattern::new("/:id!"),
            Err(RouteError::InvalidPattern { .. })
        ));
        let long = format!("/{}", "a".repeat(MAX_LENGTH));
        assert!(matches!(
            PathPattern::new(&long),
            Err(RouteError::PatternTooLong { .. })
        ));
    }

    #[test]
    fn test_scores_rank_static_over_params_over_catch_all() {
        let static_p = PathPattern::new("/products/add").unwrap().score();
        let param_p = PathPattern::new("/products/:action").unwrap().score();
        let custom_p = PathPattern::new(r"/products/:id(\d+)").unwrap().score();
        let catch_all = PathPattern::new("/:pathMatch(.*)*").unwrap().score();
        let root = PathPattern::new("/").unwrap().score();

        assert_eq!(compare_scores(&static_p, &param_p), Ordering::Less);
        assert_eq!(compare_scores(&custom_p, &param_p), Ordering::Less);
        assert_eq!(compare_scores(&param_p, &catch_all), Ordering::Less);
        assert_eq!(compare_scores(&root, &catch_all), Ordering::Less);
        assert_eq!(compare_scores(&catch_all, &root), Ordering::Greater);
    }

    #[test]
    fn test_longer_pattern_wins_over_prefix() {
        let parent = PathPattern::new("/dashboard").unwrap().score();
        let child = PathPattern::new("/dashboard/home").unwrap().score();
        assert_eq!(compare_scores(&child, &parent), Ordering::Less);

        let with_rest = PathPattern::new("/files/:rest(.*)*").unwrap().score();
        let files = PathPattern::new("/files").unwrap().score();
        assert_eq!(compare_scores(&files, &with_rest), Ordering::Less);
    }

    #[test]
    fn test_build() {
        let p = PathPattern::new("/products/update/:id").unwrap();
        assert_eq!(
            p.build(&params(&[("id", "42")])).unwrap(),
            "/products/update/42"
        );
        assert_eq!(
            p.build(&params(&[("id", "a b")])).unwrap(),
            "/products/update/a%20b"
        );
        assert!(matches!(
            p.build(&Params::new()),
            Err(RouteError::MissingParam { .. })
        ));

        let catch_all = PathPattern::new("/:pathMatch(.*)*").unwrap();
        assert_eq!(catch_all.build(&Params::new()).unwrap(), "/");
        assert_eq!(
            catch_all
                .build(&params(&[("pathMatch", "bogus/xyz")]))
                .unwrap(),
            "/bogus/xyz"
        );
    }
}
