//! Registry of site matchers and dispatch.
//!
//! A [`Registry`] is an ordered table of [`Matcher`]s. Classification walks the
//! table and returns the first tag whose predicate holds, so more specific
//! patterns must come before more general ones on the same host (GitHub
//! pull request before repo before profile, Twitter profile before tweet).

use std::sync::OnceLock;

use crate::context::SiteContext;
use crate::core::extractors::*;
use crate::core::predicates::*;
use crate::error::LinkError;
use crate::types::{Fields, MatchResult, SiteTag};
use crate::url::ParsedUrl;

/// Predicate signature used by the registry.
pub type Predicate = fn(&ParsedUrl, &SiteContext) -> bool;

/// Extractor signature used by the registry.
pub type Extractor = fn(&ParsedUrl) -> Option<Fields>;

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    pub tag: SiteTag,
    pub predicate: Predicate,
    pub extractor: Option<Extractor>,
}

impl Matcher {
    pub const fn new(tag: SiteTag, predicate: Predicate, extractor: Option<Extractor>) -> Self {
        Self {
            tag,
            predicate,
            extractor,
        }
    }

    pub fn matches(&self, url: &ParsedUrl, ctx: &SiteContext) -> bool {
        (self.predicate)(url, ctx)
    }
}

/// Ordered collection of matchers.
#[derive(Debug, Clone)]
pub struct Registry {
    matchers: Vec<Matcher>,
}

impl Registry {
    /// The built-in table covering every [`SiteTag`].
    pub fn new() -> Self {
        Self {
            matchers: builtin_matchers(),
        }
    }

    /// A registry with no matchers, to be filled with [`Registry::register`].
    pub fn empty() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Append a matcher. It is consulted after every matcher already
    /// registered.
    pub fn register(&mut self, matcher: Matcher) {
        self.matchers.push(matcher);
    }

    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    fn matcher_for(&self, tag: SiteTag) -> Option<&Matcher> {
        self.matchers.iter().find(|m| m.tag == tag)
    }

    /// First tag whose predicate holds, in registration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkparser::{ParsedUrl, Registry, SiteContext, SiteTag};
    ///
    /// let registry = Registry::new();
    /// let ctx = SiteContext::default();
    ///
    /// let url = ParsedUrl::parse("https://x.com/jack/status/20").unwrap();
    /// assert_eq!(registry.classify(&url, &ctx), Some(SiteTag::Tweet));
    ///
    /// let url = ParsedUrl::parse("https://example.com/").unwrap();
    /// assert_eq!(registry.classify(&url, &ctx), None);
    /// ```
    pub fn classify(&self, url: &ParsedUrl, ctx: &SiteContext) -> Option<SiteTag> {
        let tag = self
            .matchers
            .iter()
            .find(|m| m.matches(url, ctx))
            .map(|m| m.tag);

        tracing::trace!(
            host = url.hostname(),
            path = url.pathname(),
            tag = tag.map(|t| t.as_str()),
            "classified url"
        );
        tag
    }

    /// Every tag whose predicate holds, in registration order.
    pub fn matching_tags(&self, url: &ParsedUrl, ctx: &SiteContext) -> Vec<SiteTag> {
        self.matchers
            .iter()
            .filter(|m| m.matches(url, ctx))
            .map(|m| m.tag)
            .collect()
    }

    /// Run the extractor registered for `tag`.
    ///
    /// The predicate is not consulted: the caller must already know that
    /// `url` matches `tag`. Returns `None` for tags without an extractor.
    pub fn extract(&self, tag: SiteTag, url: &ParsedUrl) -> Option<Fields> {
        self.matcher_for(tag)
            .and_then(|m| m.extractor)
            .and_then(|extract| extract(url))
    }

    /// Classify and extract in one pass.
    pub fn resolve(&self, url: &ParsedUrl, ctx: &SiteContext) -> Option<MatchResult> {
        let matcher = self.matchers.iter().find(|m| m.matches(url, ctx))?;
        let fields = matcher.extractor.and_then(|extract| extract(url));

        tracing::debug!(
            host = url.hostname(),
            tag = matcher.tag.as_str(),
            has_fields = fields.is_some(),
            "resolved url"
        );
        Some(MatchResult::new(matcher.tag, fields))
    }

    /// Parse a raw string and resolve it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkparser::{Fields, Registry, SiteContext, SiteTag};
    ///
    /// let registry = Registry::new();
    /// let result = registry
    ///     .classify_str("https://github.com/torvalds/linux", &SiteContext::default())?
    ///     .unwrap();
    ///
    /// assert_eq!(result.tag, SiteTag::GithubRepo);
    /// assert_eq!(
    ///     result.fields,
    ///     Some(Fields::Repo { owner: "torvalds".into(), repo: "linux".into() })
    /// );
    /// # Ok::<(), linkparser::LinkError>(())
    /// ```
    pub fn classify_str(
        &self,
        input: &str,
        ctx: &SiteContext,
    ) -> Result<Option<MatchResult>, LinkError> {
        let url = ParsedUrl::parse(input)?;
        Ok(self.resolve(&url, ctx))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_matchers() -> Vec<Matcher> {
    vec![
        Matcher::new(
            SiteTag::SelfArticle,
            is_self_article_url,
            Some(parse_self_article_url),
        ),
        Matcher::new(
            SiteTag::SelfThinking,
            is_self_thinking_url,
            Some(|url| Some(parse_self_thinking_url(url))),
        ),
        Matcher::new(
            SiteTag::GithubPr,
            |url, _| is_github_pr_url(url),
            Some(|url| Some(parse_github_pr_url(url))),
        ),
        Matcher::new(
            SiteTag::GithubCommit,
            |url, _| is_github_commit_url(url),
            Some(|url| Some(parse_github_typed_url(url))),
        ),
        Matcher::new(
            SiteTag::GithubFilePreview,
            |url, _| is_github_file_preview_url(url),
            Some(|url| Some(parse_github_typed_url(url))),
        ),
        Matcher::new(
            SiteTag::GithubRepo,
            |url, _| is_github_repo_url(url),
            Some(|url| Some(parse_github_repo_url(url))),
        ),
        Matcher::new(
            SiteTag::GithubProfile,
            |url, _| is_github_profile_url(url),
            Some(|url| Some(parse_github_profile_url(url))),
        ),
        Matcher::new(
            SiteTag::Gist,
            |url, _| is_gist_url(url),
            Some(|url| Some(parse_github_gist_url(url))),
        ),
        Matcher::new(
            SiteTag::TwitterProfile,
            |url, _| is_twitter_profile_url(url),
            Some(|url| Some(parse_twitter_profile_url(url))),
        ),
        Matcher::new(
            SiteTag::Tweet,
            |url, _| is_tweet_url(url),
            Some(|url| Some(parse_tweet_url(url))),
        ),
        Matcher::new(
            SiteTag::YoutubeVideo,
            |url, _| is_youtube_url(url),
            Some(|url| Some(parse_youtube_url(url))),
        ),
        Matcher::new(
            SiteTag::BilibiliVideo,
            |url, _| is_bilibili_video_url(url),
            Some(|url| Some(parse_bilibili_video_url(url))),
        ),
        Matcher::new(
            SiteTag::ZhihuProfile,
            |url, _| is_zhihu_profile_url(url),
            Some(|url| Some(parse_zhihu_profile_url(url))),
        ),
        Matcher::new(
            SiteTag::Arxiv,
            |url, _| is_arxiv_url(url),
            Some(|url| Some(parse_arxiv_url(url))),
        ),
        Matcher::new(
            SiteTag::TMDB,
            |url, _| is_tmdb_url(url),
            Some(|url| Some(parse_tmdb_url(url))),
        ),
        Matcher::new(
            SiteTag::Bangumi,
            is_bangumi_url,
            Some(|url| Some(parse_bangumi_url(url))),
        ),
        Matcher::new(SiteTag::Figma, |url, _| is_figma_url(url), None),
        Matcher::new(SiteTag::Npm, |url, _| is_npm_url(url), None),
        Matcher::new(SiteTag::Mozilla, |url, _| is_mozilla_url(url), None),
        Matcher::new(SiteTag::Wikipedia, |url, _| is_wikipedia_url(url), None),
        Matcher::new(SiteTag::LeetCode, |url, _| is_leetcode_url(url), None),
        Matcher::new(
            SiteTag::QQMusicSong,
            |url, _| is_qq_music_song_url(url),
            Some(|url| Some(parse_qq_music_song_url(url))),
        ),
        Matcher::new(
            SiteTag::NeteaseMusicSong,
            |url, _| is_netease_music_song_url(url),
            Some(|url| Some(parse_netease_music_song_url(url))),
        ),
        Matcher::new(SiteTag::XiaoHongShu, |url, _| is_xiaohongshu_url(url), None),
        Matcher::new(SiteTag::Telegram, |url, _| is_telegram_url(url), None),
        Matcher::new(
            SiteTag::Codesandbox,
            |url, _| is_codesandbox_url(url),
            Some(|url| Some(parse_codesandbox_url(url))),
        ),
    ]
}

/// Shared built-in registry.
pub fn default_registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(Registry::new)
}

/// [`Registry::classify`] on the built-in registry.
pub fn classify(url: &ParsedUrl, ctx: &SiteContext) -> Option<SiteTag> {
    default_registry().classify(url, ctx)
}

/// [`Registry::extract`] on the built-in registry.
pub fn extract(tag: SiteTag, url: &ParsedUrl) -> Option<Fields> {
    default_registry().extract(tag, url)
}

/// [`Registry::resolve`] on the built-in registry.
pub fn resolve(url: &ParsedUrl, ctx: &SiteContext) -> Option<MatchResult> {
    default_registry().resolve(url, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(input: &str) -> ParsedUrl {
        ParsedUrl::parse(input).unwrap()
    }

    #[test]
    fn test_builtin_table_covers_every_tag_once() {
        let registry = Registry::new();
        let tags: Vec<SiteTag> = registry.matchers().iter().map(|m| m.tag).collect();
        assert_eq!(tags, SiteTag::ALL.to_vec());
    }

    #[test]
    fn test_profile_precedes_tweet() {
        let ctx = SiteContext::default();
        let profile = url("https://twitter.com/jack");

        assert_eq!(
            Registry::new().matching_tags(&profile, &ctx),
            vec![SiteTag::TwitterProfile, SiteTag::Tweet]
        );
        assert_eq!(classify(&profile, &ctx), Some(SiteTag::TwitterProfile));
    }

    #[test]
    fn test_registration_order_decides() {
        let mut registry = Registry::empty();
        registry.register(Matcher::new(SiteTag::Tweet, |url, _| is_tweet_url(url), None));
        registry.register(Matcher::new(
            SiteTag::TwitterProfile,
            |url, _| is_twitter_profile_url(url),
            None,
        ));

        let ctx = SiteContext::default();
        assert_eq!(
            registry.classify(&url("https://x.com/jack"), &ctx),
            Some(SiteTag::Tweet)
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::empty();
        let ctx = SiteContext::default();
        assert_eq!(registry.classify(&url("https://github.com/a/b"), &ctx), None);
        assert_eq!(registry.extract(SiteTag::GithubRepo, &url("https://github.com/a/b")), None);
    }

    #[test]
    fn test_extract_without_extractor() {
        assert_eq!(
            extract(SiteTag::Wikipedia, &url("https://en.wikipedia.org/wiki/Rust")),
            None
        );
    }

    #[test]
    fn test_resolve_unmatched() {
        assert_eq!(resolve(&url("https://example.com/"), &SiteContext::default()), None);
    }

    #[test]
    fn test_classify_str_rejects_garbage() {
        let result = Registry::new().classify_str("not a url", &SiteContext::default());
        assert!(matches!(result, Err(LinkError::InvalidUrl(_))));
    }
}
