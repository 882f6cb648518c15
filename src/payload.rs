use crate::error::Error;
use serde::{de::IgnoredAny, Deserialize, Deserializer};

/// Pull request metadata as printed by `gh pr view --json title,body,url,files,comments`.
#[derive(Debug, Deserialize)]
pub struct PullRequestPayload {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    files: Vec<IgnoredAny>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl PullRequestPayload {
    pub fn parse(raw: &str) -> Result<PullRequestPayload, Error> {
        serde_json::from_str(raw).map_err(|cause| Error::ParseError { cause })
    }

    pub fn file_change_count(&self) -> usize {
        self.files.len()
    }
}

#[derive(Debug, Deserialize)]
pub struct Comment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub login: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_a_gh_payload() -> Result<(), Box<dyn std::error::Error>> {
        let payload = PullRequestPayload::parse(
            r#"{
                "title": "Add review request",
                "body": "Some body",
                "url": "https://github.com/acme/app/pull/7",
                "files": [
                    {"path": "src/main.rs", "additions": 3, "deletions": 1},
                    {"path": "Cargo.toml", "additions": 1, "deletions": 0}
                ],
                "comments": [
                    {"author": {"login": "linear"}, "body": "linked", "createdAt": "2024-01-01T00:00:00Z"}
                ]
            }"#,
        )?;

        assert_eq!(payload.title, "Add review request");
        assert_eq!(payload.body, "Some body");
        assert_eq!(payload.url, "https://github.com/acme/app/pull/7");
        assert_eq!(payload.file_change_count(), 2);
        assert_eq!(payload.comments.len(), 1);
        assert_eq!(payload.comments[0].author.login, "linear");
        assert_eq!(payload.comments[0].body, "linked");

        Ok(())
    }

    #[test]
    fn should_default_optional_fields() -> Result<(), Box<dyn std::error::Error>> {
        let payload = PullRequestPayload::parse(
            r#"{"title": "t", "url": "u", "body": null, "files": null}"#,
        )?;

        assert_eq!(payload.body, "");
        assert_eq!(payload.file_change_count(), 0);
        assert!(payload.comments.is_empty());

        Ok(())
    }

    #[test]
    fn should_default_a_ghost_author() -> Result<(), Box<dyn std::error::Error>> {
        let payload = PullRequestPayload::parse(
            r#"{"title": "t", "url": "u", "comments": [{"author": null, "body": "hi"}]}"#,
        )?;

        assert_eq!(payload.comments[0].author.login, "");

        Ok(())
    }

    #[test]
    fn should_fail_on_malformed_json() {
        let payload = PullRequestPayload::parse("{\"title\": ");

        assert!(matches!(payload, Err(Error::ParseError { .. })));
    }

    #[test]
    fn should_fail_on_missing_title() {
        let payload = PullRequestPayload::parse(r#"{"url": "u"}"#);

        assert!(matches!(payload, Err(Error::ParseError { .. })));
    }
}
