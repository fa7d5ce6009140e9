//! Site extractors.
//!
//! Each extractor picks fixed positional segments of `pathname.split('/')`
//! and trusts that its paired predicate already checked the shape. Calling
//! one on a URL its predicate rejects is a caller error: it does not panic,
//! but missing positions come back as empty strings and the result is
//! meaningless. Use [`Registry::resolve`](crate::Registry::resolve) or check
//! the predicate first.

use crate::core::predicates::{netease_song_id, qq_song_id, ARXIV_ID};
use crate::types::{Fields, NoteId};
use crate::url::utils::{joined_from, query_value, segment, segments};
use crate::url::ParsedUrl;

fn owned(url: &ParsedUrl, index: usize) -> String {
    segment(url.pathname(), index).to_string()
}

/// `/<owner>/<repo>`
pub fn parse_github_repo_url(url: &ParsedUrl) -> Fields {
    Fields::Repo {
        owner: owned(url, 1),
        repo: owned(url, 2),
    }
}

/// `/<owner>/<id>` on gist.github.com
pub fn parse_github_gist_url(url: &ParsedUrl) -> Fields {
    Fields::Gist {
        owner: owned(url, 1),
        id: owned(url, 2),
    }
}

/// Commit and blob links.
///
/// ```
/// use linkparser::{parse_github_typed_url, Fields, ParsedUrl};
///
/// let url = ParsedUrl::parse(
///     "https://github.com/Innei/sprightly/blob/14234594/src/socket/handler.ts",
/// ).unwrap();
///
/// match parse_github_typed_url(&url) {
///     Fields::Typed { kind, id, after_type, .. } => {
///         assert_eq!(kind, "blob");
///         assert_eq!(id, "14234594");
///         assert_eq!(after_type, "14234594/src/socket/handler.ts");
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn parse_github_typed_url(url: &ParsedUrl) -> Fields {
    Fields::Typed {
        owner: owned(url, 1),
        repo: owned(url, 2),
        kind: owned(url, 3),
        id: owned(url, 4),
        after_type: joined_from(url.pathname(), 4),
    }
}

pub fn parse_github_pr_url(url: &ParsedUrl) -> Fields {
    Fields::PullRequest {
        owner: owned(url, 1),
        repo: owned(url, 2),
        kind: owned(url, 3),
        pr: owned(url, 4),
    }
}

pub fn parse_github_profile_url(url: &ParsedUrl) -> Fields {
    Fields::Profile {
        kind: "github".to_string(),
        id: owned(url, 1),
    }
}

/// `/people/<id>`
pub fn parse_zhihu_profile_url(url: &ParsedUrl) -> Fields {
    Fields::Profile {
        kind: owned(url, 1),
        id: owned(url, 2),
    }
}

pub fn parse_twitter_profile_url(url: &ParsedUrl) -> Fields {
    Fields::Profile {
        kind: "twitter".to_string(),
        id: owned(url, 1),
    }
}

/// The tweet id is the last path segment.
pub fn get_tweet_id(url: &ParsedUrl) -> &str {
    segments(url.pathname()).last().copied().unwrap_or_default()
}

pub fn parse_tweet_url(url: &ParsedUrl) -> Fields {
    Fields::Tweet {
        id: get_tweet_id(url).to_string(),
    }
}

/// `/video/<BV id>`
pub fn parse_bilibili_video_url(url: &ParsedUrl) -> Fields {
    Fields::Media {
        kind: owned(url, 1),
        id: owned(url, 2),
    }
}

/// `/movie/<id>`, `/tv/<id>`, ...
pub fn parse_tmdb_url(url: &ParsedUrl) -> Fields {
    Fields::Media {
        kind: owned(url, 1),
        id: owned(url, 2),
    }
}

/// `/subject/<id>`, `/person/<id>`, ...
pub fn parse_bangumi_url(url: &ParsedUrl) -> Fields {
    Fields::Media {
        kind: owned(url, 1),
        id: owned(url, 2),
    }
}

/// `/s/<sandbox>`
pub fn parse_codesandbox_url(url: &ParsedUrl) -> Fields {
    Fields::Media {
        kind: owned(url, 1),
        id: owned(url, 2),
    }
}

/// The `v` query parameter of a `/watch` link.
pub fn parse_youtube_url(url: &ParsedUrl) -> Fields {
    Fields::Video {
        id: query_value(url.query(), "v").unwrap_or_default(),
    }
}

/// The paper id including its version suffix, e.g. `2301.00001v2`.
pub fn parse_arxiv_url(url: &ParsedUrl) -> Fields {
    let id = ARXIV_ID
        .captures(url.pathname())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Fields::Arxiv { id }
}

/// Posts keep the whole remaining path as slug; notes carry a numeric id.
///
/// Returns `None` when the first segment is neither `posts` nor `notes`.
///
/// ```
/// use linkparser::{parse_self_article_url, Fields, NoteId, ParsedUrl};
///
/// let note = ParsedUrl::parse("https://innei.in/notes/123").unwrap();
/// assert_eq!(
///     parse_self_article_url(&note),
///     Some(Fields::Note { nid: NoteId::Number(123) })
/// );
///
/// let bad = ParsedUrl::parse("https://innei.in/notes/abc").unwrap();
/// assert_eq!(
///     parse_self_article_url(&bad),
///     Some(Fields::Note { nid: NoteId::NotANumber })
/// );
/// ```
pub fn parse_self_article_url(url: &ParsedUrl) -> Option<Fields> {
    let path = url.pathname();
    match segment(path, 1) {
        "posts" => Some(Fields::Post {
            slug: joined_from(path, 2),
        }),
        "notes" => Some(Fields::Note {
            nid: NoteId::parse(segment(path, 2)),
        }),
        _ => None,
    }
}

pub fn parse_self_thinking_url(url: &ParsedUrl) -> Fields {
    Fields::Thinking { id: owned(url, 2) }
}

/// `/n/ryqq/songDetail/<mid>`
pub fn parse_qq_music_song_url(url: &ParsedUrl) -> Fields {
    Fields::Song {
        id: qq_song_id(url).unwrap_or_default().to_string(),
    }
}

/// The `id` parameter, read from the query or from a hash route such as
/// `#/song?id=1901371647`.
pub fn parse_netease_music_song_url(url: &ParsedUrl) -> Fields {
    Fields::Song {
        id: netease_song_id(url).unwrap_or_default(),
    }
}
