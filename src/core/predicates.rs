//! Site predicates.
//!
//! Every predicate is a total, side-effect-free test of hostname and path
//! shape. Hostname checks are exact for single-host sites and substring
//! containment for sites with regional mirrors (`*.bilibili.com`,
//! `zh.wikipedia.org`, ...). Path shape checks count segments the same way
//! `pathname.split('/')` does, including the empty leading segment.

use std::sync::LazyLock;

use regex::Regex;

use crate::context::SiteContext;
use crate::url::utils::{query_value, segment, segment_count, segments};
use crate::url::ParsedUrl;

pub const GITHUB_HOST: &str = "github.com";
pub const GIST_HOST: &str = "gist.github.com";
pub const ARXIV_HOST: &str = "arxiv.org";

/// `abs/` or `pdf/` followed by a `YYMM.NNNNN` identifier and an optional
/// version suffix.
pub(crate) static ARXIV_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:abs|pdf)/(\d{4}\.\d+(?:v\d+)?)").expect("valid arxiv pattern")
});

pub fn is_github_url(url: &ParsedUrl) -> bool {
    url.hostname() == GITHUB_HOST
}

/// `https://github.com/<owner>/<repo>`
pub fn is_github_repo_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    is_github_url(url)
        && path.starts_with('/')
        && segment_count(path) == 3
        && !segment(path, 1).is_empty()
        && !segment(path, 2).is_empty()
}

/// `https://github.com/<user>`
pub fn is_github_profile_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    is_github_url(url) && segment_count(path) == 2 && !segment(path, 1).is_empty()
}

/// `https://github.com/<owner>/<repo>/pull/<n>[/files...]`
pub fn is_github_pr_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    is_github_url(url) && segment(path, 3) == "pull" && !segment(path, 4).is_empty()
}

/// `https://github.com/<owner>/<repo>/commit/<sha>`
pub fn is_github_commit_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    is_github_url(url) && segment(path, 3) == "commit" && !segment(path, 4).is_empty()
}

/// `https://github.com/<owner>/<repo>/blob/<ref>/<path...>`
pub fn is_github_file_preview_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    is_github_url(url) && segment(path, 3) == "blob" && !segment(path, 4).is_empty()
}

/// `https://gist.github.com/<owner>/<id>`
pub fn is_gist_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    url.hostname() == GIST_HOST && !segment(path, 1).is_empty() && !segment(path, 2).is_empty()
}

pub fn is_twitter_url(url: &ParsedUrl) -> bool {
    matches!(url.hostname(), "twitter.com" | "x.com")
}

/// Any path on a Twitter/X host ending in a non-empty segment (the tweet
/// id). Shadowed by [`is_twitter_profile_url`] in the default registry order.
pub fn is_tweet_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    is_twitter_url(url) && path.starts_with('/') && !path.ends_with('/')
}

pub fn is_twitter_profile_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    is_twitter_url(url) && segment_count(path) == 2 && !segment(path, 1).is_empty()
}

/// `/watch?v=<id>`
pub fn is_youtube_url(url: &ParsedUrl) -> bool {
    url.hostname() == "www.youtube.com"
        && url.pathname().starts_with("/watch")
        && query_value(url.query(), "v").is_some_and(|v| !v.is_empty())
}

pub fn is_bilibili_url(url: &ParsedUrl) -> bool {
    url.hostname().contains("bilibili.com")
}

/// Only `BV` ids are accepted; legacy `av` ids are not embeddable.
pub fn is_bilibili_video_url(url: &ParsedUrl) -> bool {
    is_bilibili_url(url) && url.pathname().starts_with("/video/BV")
}

pub fn is_zhihu_url(url: &ParsedUrl) -> bool {
    url.hostname() == "www.zhihu.com"
}

pub fn is_zhihu_profile_url(url: &ParsedUrl) -> bool {
    is_zhihu_url(url)
        && url.pathname().starts_with("/people/")
        && !segment(url.pathname(), 2).is_empty()
}

pub fn is_arxiv_url(url: &ParsedUrl) -> bool {
    url.hostname() == ARXIV_HOST
        && url.pathname().starts_with('/')
        && ARXIV_ID.is_match(url.pathname())
}

/// A post or note on the deployment's own site.
pub fn is_self_article_url(url: &ParsedUrl, ctx: &SiteContext) -> bool {
    ctx.is_own_host(url.hostname())
        && ["/posts/", "/notes/"]
            .iter()
            .any(|prefix| url.pathname().starts_with(prefix))
        && !segment(url.pathname(), 2).is_empty()
}

/// A thinking entry on the deployment's own site, e.g.
/// `/thinking/66166aa7f7410b48581cb36f`.
pub fn is_self_thinking_url(url: &ParsedUrl, ctx: &SiteContext) -> bool {
    ctx.is_own_host(url.hostname())
        && url.pathname().starts_with("/thinking/")
        && !segment(url.pathname(), 2).is_empty()
}

pub fn is_wikipedia_url(url: &ParsedUrl) -> bool {
    url.hostname().contains("wikipedia.org")
}

/// Host only: any TMDB page gets the generic card, so `type` and `id` may be
/// empty for pages like the front page.
pub fn is_tmdb_url(url: &ParsedUrl) -> bool {
    url.hostname().contains("themoviedb.org")
}

pub fn is_bangumi_url(url: &ParsedUrl, ctx: &SiteContext) -> bool {
    let path = url.pathname();
    matches!(url.hostname(), "bgm.tv" | "bangumi.tv")
        && ctx.is_bangumi_type(segment(path, 1))
        && !segment(path, 2).is_empty()
}

pub fn is_figma_url(url: &ParsedUrl) -> bool {
    url.hostname().contains("figma.com")
}

pub fn is_npm_url(url: &ParsedUrl) -> bool {
    url.hostname().contains("npmjs.com")
}

pub fn is_mozilla_url(url: &ParsedUrl) -> bool {
    url.hostname().contains("mozilla.org")
}

pub fn is_leetcode_url(url: &ParsedUrl) -> bool {
    matches!(url.hostname(), "leetcode.cn" | "leetcode.com")
}

/// Segment following `songDetail`, if any.
pub(crate) fn qq_song_id(url: &ParsedUrl) -> Option<&str> {
    let parts = segments(url.pathname());
    parts
        .iter()
        .position(|s| *s == "songDetail")
        .and_then(|i| parts.get(i + 1).copied())
        .filter(|id| !id.is_empty())
}

/// The `id` parameter, from the query or from a hash route such as
/// `#/song?id=1901371647`.
pub(crate) fn netease_song_id(url: &ParsedUrl) -> Option<String> {
    query_value(url.query(), "id")
        .or_else(|| {
            url.hash()
                .split_once('?')
                .and_then(|(_, query)| query_value(query, "id"))
        })
        .filter(|id| !id.is_empty())
}

pub fn is_qq_music_song_url(url: &ParsedUrl) -> bool {
    url.hostname() == "y.qq.com"
        && url.pathname().contains("/songDetail/")
        && qq_song_id(url).is_some()
}

/// Netease routes songs both by path and by hash (`/#/song?id=...`).
pub fn is_netease_music_song_url(url: &ParsedUrl) -> bool {
    url.hostname() == "music.163.com"
        && (url.pathname().contains("/song") || url.hash().contains("/song"))
        && netease_song_id(url).is_some()
}

pub fn is_xiaohongshu_url(url: &ParsedUrl) -> bool {
    url.hostname().contains("xiaohongshu.com")
}

pub fn is_telegram_url(url: &ParsedUrl) -> bool {
    url.hostname() == "t.me"
}

/// `https://codesandbox.io/s/<sandbox>`
pub fn is_codesandbox_url(url: &ParsedUrl) -> bool {
    let path = url.pathname();
    url.hostname() == "codesandbox.io"
        && segment_count(path) == 3
        && !segment(path, 1).is_empty()
        && !segment(path, 2).is_empty()
}
