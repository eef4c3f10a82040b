#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
use anyhow::{bail, Result};

/// An issue reference given on the command line
///
/// Either a bare number (`1234`, `#1234`) or an issue URL
/// (`https://github.com/owner/repo/issues/1234`).
#[derive(Debug, PartialEq, Eq)]
pub struct Issuable {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub number: u32,
}

impl Issuable {
    /// Parse an issue number or GitHub issue URL
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        let bare = input.strip_prefix('#').unwrap_or(input);
        if let Ok(number) = bare.parse::<u32>() {
            return Ok(Self {
                owner: None,
                repo: None,
                number,
            });
        }

        let url = input
            .strip_prefix("https://")
            .or_else(|| input.strip_prefix("http://"))
            .unwrap_or(input);

        if !url.starts_with("github.com") {
            bail!("can't parse non GitHub url: {input}");
        }

        // "github.com", "owner", "repo", "issues", "1201"
        let segments: Vec<&str> = url.split('/').collect();
        if segments.len() < 5 {
            bail!("invalid issue url: {input}");
        }

        if segments[3] != "issues" {
            bail!("not an issue url: {input}");
        }

        let Ok(number) = segments[4].parse::<u32>() else {
            bail!("can't parse issue number: {input}");
        };

        Ok(Self {
            owner: Some(segments[1].to_string()),
            repo: Some(segments[2].to_string()),
            number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_only(number: u32) -> Issuable {
        Issuable {
            owner: None,
            repo: None,
            number,
        }
    }

    fn with_repo(number: u32) -> Issuable {
        Issuable {
            owner: Some("ykpythemind".to_string()),
            repo: Some("piyo".to_string()),
            number,
        }
    }

    #[test]
    fn test_parse_issue_number() {
        assert_eq!(Issuable::parse("1000").unwrap(), number_only(1000));
    }

    #[test]
    fn test_parse_hash_number() {
        assert_eq!(Issuable::parse("#42").unwrap(), number_only(42));
    }

    #[test]
    fn test_parse_github_url() {
        let result = Issuable::parse("https://github.com/ykpythemind/piyo/issues/1234").unwrap();
        assert_eq!(result, with_repo(1234));
    }

    #[test]
    fn test_parse_github_url_with_blank() {
        let result =
            Issuable::parse("  https://github.com/ykpythemind/piyo/issues/1234\n  ").unwrap();
        assert_eq!(result, with_repo(1234));
    }

    #[test]
    fn test_parse_github_url_without_scheme() {
        let result = Issuable::parse("github.com/ykpythemind/piyo/issues/1234").unwrap();
        assert_eq!(result, with_repo(1234));
    }

    #[test]
    fn test_parse_github_url_without_number() {
        assert!(Issuable::parse("https://github.com/ykpythemind/piyo/issues").is_err());
    }

    #[test]
    fn test_parse_pull_request_url() {
        assert!(Issuable::parse("https://github.com/ykpythemind/piyo/pulls/1234").is_err());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Issuable::parse("hoge").is_err());
    }

    #[test]
    fn test_parse_gitlab_url() {
        let err = Issuable::parse("https://gitlab.com/ykpythemind/piyo/issues/1234").unwrap_err();
        assert!(err.to_string().contains("non GitHub url"));
    }

    #[test]
    fn test_parse_non_numeric_issue() {
        assert!(Issuable::parse("https://github.com/ykpythemind/piyo/issues/abc").is_err());
    }
}
