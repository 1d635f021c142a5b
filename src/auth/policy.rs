//! Static route authorization table.
//!
//! Rules are checked top to bottom and the first rule whose method and path
//! pattern match decides. Anything not covered requires an authenticated
//! caller with any role.
//!
//! Patterns are ant-style: `*` matches exactly one path segment and `**`
//! matches zero or more segments.

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::Role,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    AnyOf(&'static [Role]),
    Authenticated,
}

struct Rule {
    method: Option<&'static str>,
    patterns: &'static [&'static str],
    access: Access,
}

impl Rule {
    const fn new(
        method: Option<&'static str>,
        patterns: &'static [&'static str],
        access: Access,
    ) -> Self {
        Rule {
            method,
            patterns,
            access,
        }
    }

    fn matches(&self, method: &str, path: &str) -> bool {
        let method_ok = self
            .method
            .map(|m| m.eq_ignore_ascii_case(method))
            .unwrap_or(true);
        method_ok && self.patterns.iter().any(|p| path_matches(p, path))
    }
}

const TEACHER: &[Role] = &[Role::Teacher];
const TEACHER_OR_STUDENT: &[Role] = &[Role::Teacher, Role::Student];

static POLICY: &[Rule] = &[
    Rule::new(Some("OPTIONS"), &["/**"], Access::Public),
    Rule::new(Some("GET"), &["/health", "/health/ready"], Access::Public),
    Rule::new(
        None,
        &["/api/user/authenticate", "/api/user/register", "/api/user/**"],
        Access::Public,
    ),
    Rule::new(
        Some("GET"),
        &["/api/quizzes", "/api/quizzes/*"],
        Access::AnyOf(TEACHER_OR_STUDENT),
    ),
    Rule::new(None, &["/api/quizzes/**"], Access::AnyOf(TEACHER)),
    Rule::new(None, &["/api/quiz-results"], Access::AnyOf(TEACHER_OR_STUDENT)),
    Rule::new(None, &["/api/questions"], Access::AnyOf(TEACHER)),
    Rule::new(None, &["/api/questions/**"], Access::AnyOf(TEACHER_OR_STUDENT)),
];

/// Looks up what a request needs before it may reach a handler.
pub fn required_access(method: &str, path: &str) -> Access {
    POLICY
        .iter()
        .find(|rule| rule.matches(method, path))
        .map(|rule| rule.access)
        .unwrap_or(Access::Authenticated)
}

/// `Unauthorized` when a protected route has no caller, `Forbidden` when the
/// caller lacks every accepted role.
pub fn authorize(access: Access, claims: Option<&Claims>) -> AppResult<()> {
    match (access, claims) {
        (Access::Public, _) => Ok(()),
        (_, None) => Err(AppError::Unauthorized(
            "Authentication required".to_string(),
        )),
        (Access::Authenticated, Some(_)) => Ok(()),
        (Access::AnyOf(roles), Some(claims)) => {
            if claims.has_any_role(roles) {
                Ok(())
            } else {
                Err(AppError::Forbidden(format!(
                    "Requires one of the roles: {}",
                    roles
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )))
            }
        }
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn path_matches(pattern: &str, path: &str) -> bool {
    match_segments(&segments(pattern), &segments(path))
}

fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
    match (pattern.split_first(), path.split_first()) {
        (None, None) => true,
        (Some((&"**", rest)), _) => {
            match_segments(rest, path) || (!path.is_empty() && match_segments(pattern, &path[1..]))
        }
        (Some((p, rest)), Some((s, tail))) => (*p == "*" || p == s) && match_segments(rest, tail),
        _ => false,
    }
}
