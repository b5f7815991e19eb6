//! Per-stage pipeline state.
//!
//! Each stage consumes the record produced by the stage before it and returns a
//! new record with exactly one more field. Fields are private and only set on
//! construction, so nothing can overwrite a value written by an earlier stage.

use serde::Serialize;

use crate::extract::BlogContent;

/// Entry state: only the URL is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requested {
    url: String,
}

/// State after the scrape stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scraped {
    url: String,
    blog_content: BlogContent,
}

/// State after the summarize stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summarized {
    url: String,
    blog_content: BlogContent,
    summary: String,
}

impl Requested {
    pub fn new(url: impl Into<String>) -> Self {
        Requested { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn with_blog_content(self, blog_content: BlogContent) -> Scraped {
        Scraped {
            url: self.url,
            blog_content,
        }
    }
}

impl Scraped {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn blog_content(&self) -> &BlogContent {
        &self.blog_content
    }

    pub fn with_summary(self, summary: impl Into<String>) -> Summarized {
        Summarized {
            url: self.url,
            blog_content: self.blog_content,
            summary: summary.into(),
        }
    }
}

impl Summarized {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn blog_content(&self) -> &BlogContent {
        &self.blog_content
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Whether the summary has anything to speak.
    pub fn has_summary(&self) -> bool {
        !self.summary.trim().is_empty()
    }
}

/// Flat view of a run's state; later fields are `None` until their stage ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineState {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl From<&Requested> for PipelineState {
    fn from(state: &Requested) -> Self {
        PipelineState {
            url: state.url.clone(),
            blog_content: None,
            summary: None,
        }
    }
}

impl From<&Scraped> for PipelineState {
    fn from(state: &Scraped) -> Self {
        PipelineState {
            url: state.url.clone(),
            blog_content: Some(state.blog_content.text().to_string()),
            summary: None,
        }
    }
}

impl From<&Summarized> for PipelineState {
    fn from(state: &Summarized) -> Self {
        PipelineState {
            url: state.url.clone(),
            blog_content: Some(state.blog_content.text().to_string()),
            summary: Some(state.summary.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ScrapeResponse;
    use serde_json::json;

    fn blog_content(markdown: &str) -> BlogContent {
        ScrapeResponse::new(json!({ "markdown": markdown })).into_blog_content()
    }

    #[test]
    fn test_state_grows_one_field_per_stage() {
        let requested = Requested::new("https://blog.example.com/post");
        assert_eq!(
            PipelineState::from(&requested),
            PipelineState {
                url: "https://blog.example.com/post".into(),
                blog_content: None,
                summary: None,
            }
        );

        let scraped = requested.with_blog_content(blog_content("# Post"));
        assert_eq!(scraped.url(), "https://blog.example.com/post");
        assert_eq!(
            PipelineState::from(&scraped).blog_content.as_deref(),
            Some("# Post")
        );
        assert_eq!(PipelineState::from(&scraped).summary, None);

        let summarized = scraped.with_summary("Hi there, listeners.");
        assert_eq!(summarized.url(), "https://blog.example.com/post");
        assert_eq!(summarized.blog_content().text(), "# Post");
        assert_eq!(summarized.summary(), "Hi there, listeners.");
    }

    #[test]
    fn test_blank_summary_has_nothing_to_speak() {
        let scraped = Requested::new("https://a.b").with_blog_content(blog_content("text"));
        assert!(!scraped.clone().with_summary("").has_summary());
        assert!(!scraped.clone().with_summary(" \n ").has_summary());
        assert!(scraped.with_summary("Hello").has_summary());
    }

    #[test]
    fn test_pipeline_state_json_omits_pending_fields() {
        let requested = Requested::new("https://a.b");
        assert_eq!(
            serde_json::to_value(PipelineState::from(&requested)).unwrap(),
            json!({ "url": "https://a.b" })
        );

        let summarized = requested
            .with_blog_content(blog_content("body"))
            .with_summary("script");
        assert_eq!(
            serde_json::to_value(PipelineState::from(&summarized)).unwrap(),
            json!({ "url": "https://a.b", "blog_content": "body", "summary": "script" })
        );
    }
}
