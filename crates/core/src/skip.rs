//! Skip rules select controller actions to leave out when walking the history.
//!
//! A skip spec is a comma separated list of `[Package:]Controller->action`
//! rules. Any component may be `*`; a missing package means any package.
//!
//! ```text
//! My.Package:Standard->index
//! User->edit
//! User->edit,MyOtherEntity->edit
//! *->new
//! ```

use std::{fmt, str::FromStr};

use tracing::warn;

use crate::error::{HistoryError, Result};
use crate::request::NavigationalRequest;

const WILDCARD: &str = "*";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Any,
    Exact(String),
}

impl Pattern {
    fn parse(s: &str) -> Self {
        if s == WILDCARD {
            Self::Any
        } else {
            Self::Exact(s.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(p) => p == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(WILDCARD),
            Self::Exact(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkipRule {
    pub package: Pattern,
    pub controller: Pattern,
    pub action: Pattern,
}

impl SkipRule {
    pub fn new(package: Pattern, controller: Pattern, action: Pattern) -> Self {
        Self {
            package,
            controller,
            action,
        }
    }

    pub fn matches<R: NavigationalRequest>(&self, request: &R) -> bool {
        self.package.matches(request.package_key())
            && self.controller.matches(request.controller_name())
            && self.action.matches(request.action_name())
    }

    /// Loose reading: segments past the first `->` or the first `:` are
    /// ignored, so `A:B:C->edit` reads as `A:B->edit`. `None` when a
    /// component is missing or empty.
    fn parse_loose(s: &str) -> Option<Self> {
        let mut parts = s.trim().split("->");
        let target = parts.next()?;
        let action = parts.next()?;
        let mut names = target.split(':');
        let first = names.next()?;
        let (package, controller) = match names.next() {
            Some(c) => (first, c),
            None => (WILDCARD, first),
        };
        if package.is_empty() || controller.is_empty() || action.is_empty() {
            return None;
        }
        Some(Self::new(
            Pattern::parse(package),
            Pattern::parse(controller),
            Pattern::parse(action),
        ))
    }
}

impl FromStr for SkipRule {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self> {
        let rule = s.trim();
        let invalid = |reason| HistoryError::InvalidSkipRule {
            rule: rule.to_string(),
            reason,
        };
        let (target, action) = rule
            .split_once("->")
            .ok_or_else(|| invalid("missing \"->\""))?;
        if action.contains("->") {
            return Err(invalid("more than one \"->\""));
        }
        let (package, controller) = match target.split_once(':') {
            Some((p, c)) => (p, c),
            None => (WILDCARD, target),
        };
        if controller.contains(':') {
            return Err(invalid("more than one \":\""));
        }
        if package.is_empty() {
            return Err(invalid("empty package"));
        }
        if controller.is_empty() {
            return Err(invalid("empty controller"));
        }
        if action.is_empty() {
            return Err(invalid("empty action"));
        }
        Ok(Self::new(
            Pattern::parse(package),
            Pattern::parse(controller),
            Pattern::parse(action),
        ))
    }
}

impl fmt::Display for SkipRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_any() {
            write!(f, "{}:", self.package)?;
        }
        write!(f, "{}->{}", self.controller, self.action)
    }
}

/// A parsed skip spec. The empty set skips nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkipRules(Vec<SkipRule>);

impl SkipRules {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn parse(spec: &str) -> Result<Self> {
        spec.split(',')
            .filter(|s| !s.trim().is_empty())
            .map(str::parse::<SkipRule>)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    /// Like [`SkipRules::parse`], but never fails: extra `->` or `:`
    /// segments are ignored and rules with a missing component are dropped.
    pub fn lenient(spec: &str) -> Self {
        let rules = spec
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .filter_map(|s| {
                let rule = SkipRule::parse_loose(s);
                if rule.is_none() {
                    warn!(target: "history", "ignoring skip rule: {:?}", s.trim());
                }
                rule
            })
            .collect();
        Self(rules)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn matches<R: NavigationalRequest>(&self, request: &R) -> bool {
        self.0.iter().any(|r| r.matches(request))
    }
}

impl FromStr for SkipRules {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SkipRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{rule}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::tests::TestRequest;

    fn exact(s: &str) -> Pattern {
        Pattern::Exact(s.to_string())
    }

    #[test]
    fn parses_controller_and_action() {
        let rule: SkipRule = "User->edit".parse().unwrap();
        assert_eq!(rule, SkipRule::new(Pattern::Any, exact("User"), exact("edit")));
    }

    #[test]
    fn parses_package_prefix() {
        let rule: SkipRule = "My.Package:Standard->index".parse().unwrap();
        assert_eq!(
            rule,
            SkipRule::new(exact("My.Package"), exact("Standard"), exact("index"))
        );
    }

    #[test]
    fn parses_wildcards() {
        let rule: SkipRule = "*:*->*".parse().unwrap();
        assert_eq!(rule, SkipRule::new(Pattern::Any, Pattern::Any, Pattern::Any));
    }

    #[test]
    fn parses_list_and_trims() {
        let rules = SkipRules::parse(" User->edit , MyOtherEntity->edit,").unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.to_string(), "User->edit,MyOtherEntity->edit");
    }

    #[test]
    fn empty_spec_is_no_rules() {
        assert!(SkipRules::parse("").unwrap().is_empty());
        assert!(SkipRules::parse(" , ").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_rules() {
        let malformed = ["User", "User->", "->edit", ":User->edit", "A:B:C->edit", "A->b->c"];
        for bad in malformed {
            let err = SkipRules::parse(bad).unwrap_err();
            assert!(
                matches!(err, HistoryError::InvalidSkipRule { .. }),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn lenient_drops_rules_missing_a_component() {
        let rules = SkipRules::lenient("User,Product->edit,->index,Order->");
        assert_eq!(rules.to_string(), "Product->edit");
    }

    #[test]
    fn lenient_ignores_extra_segments() {
        assert_eq!(SkipRules::lenient("A->b->c").to_string(), "A->b");
        assert_eq!(SkipRules::lenient("A:B:C->edit").to_string(), "A:B->edit");
        let req = TestRequest::new("A", "B", "edit");
        assert!(SkipRules::lenient("A:B:C->edit").matches(&req));
    }

    #[test]
    fn display_keeps_explicit_package() {
        let rules = SkipRules::parse("Acme.Shop:Product->*").unwrap();
        assert_eq!(rules.to_string(), "Acme.Shop:Product->*");
    }

    #[test]
    fn matching_requires_all_components() {
        let req = TestRequest::new("Acme.Shop", "Product", "edit");
        let hit = |spec: &str| SkipRules::parse(spec).unwrap().matches(&req);
        assert!(hit("Product->edit"));
        assert!(hit("*->edit"));
        assert!(hit("Product->*"));
        assert!(hit("Acme.Shop:Product->edit"));
        assert!(hit("Acme.Shop:*->*"));
        assert!(!hit("Other.Pkg:Product->edit"));
        assert!(!hit("Product->index"));
        assert!(!hit("Category->edit"));
        assert!(!hit(""));
    }

    #[test]
    fn any_rule_in_the_list_matches() {
        let req = TestRequest::new("Acme.Shop", "Category", "new");
        assert!(SkipRules::parse("Product->edit,Category->new").unwrap().matches(&req));
    }
}
