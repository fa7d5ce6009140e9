//! Core data structures shared by predicates, extractors and the registry.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::LinkError;

/// A recognised kind of URL.
///
/// Each tag is backed by exactly one predicate and at most one extractor in
/// the [`Registry`](crate::Registry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteTag {
    /// `/posts/<slug>` or `/notes/<nid>` on the deployment's own site
    SelfArticle,
    /// `/thinking/<id>` on the deployment's own site
    SelfThinking,
    GithubPr,
    GithubCommit,
    /// A `blob` link to a single file at a given ref
    GithubFilePreview,
    GithubRepo,
    GithubProfile,
    Gist,
    TwitterProfile,
    Tweet,
    YoutubeVideo,
    BilibiliVideo,
    ZhihuProfile,
    Arxiv,
    #[serde(rename = "tmdb")]
    TMDB,
    Bangumi,
    Figma,
    Npm,
    Mozilla,
    Wikipedia,
    #[serde(rename = "leetcode")]
    LeetCode,
    #[serde(rename = "qq-music-song")]
    QQMusicSong,
    NeteaseMusicSong,
    #[serde(rename = "xiaohongshu")]
    XiaoHongShu,
    Telegram,
    Codesandbox,
}

impl SiteTag {
    /// Every tag, in the default dispatch order.
    pub const ALL: [SiteTag; 26] = [
        SiteTag::SelfArticle,
        SiteTag::SelfThinking,
        SiteTag::GithubPr,
        SiteTag::GithubCommit,
        SiteTag::GithubFilePreview,
        SiteTag::GithubRepo,
        SiteTag::GithubProfile,
        SiteTag::Gist,
        SiteTag::TwitterProfile,
        SiteTag::Tweet,
        SiteTag::YoutubeVideo,
        SiteTag::BilibiliVideo,
        SiteTag::ZhihuProfile,
        SiteTag::Arxiv,
        SiteTag::TMDB,
        SiteTag::Bangumi,
        SiteTag::Figma,
        SiteTag::Npm,
        SiteTag::Mozilla,
        SiteTag::Wikipedia,
        SiteTag::LeetCode,
        SiteTag::QQMusicSong,
        SiteTag::NeteaseMusicSong,
        SiteTag::XiaoHongShu,
        SiteTag::Telegram,
        SiteTag::Codesandbox,
    ];

    /// Stable kebab-case name of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteTag::SelfArticle => "self-article",
            SiteTag::SelfThinking => "self-thinking",
            SiteTag::GithubPr => "github-pr",
            SiteTag::GithubCommit => "github-commit",
            SiteTag::GithubFilePreview => "github-file-preview",
            SiteTag::GithubRepo => "github-repo",
            SiteTag::GithubProfile => "github-profile",
            SiteTag::Gist => "gist",
            SiteTag::TwitterProfile => "twitter-profile",
            SiteTag::Tweet => "tweet",
            SiteTag::YoutubeVideo => "youtube-video",
            SiteTag::BilibiliVideo => "bilibili-video",
            SiteTag::ZhihuProfile => "zhihu-profile",
            SiteTag::Arxiv => "arxiv",
            SiteTag::TMDB => "tmdb",
            SiteTag::Bangumi => "bangumi",
            SiteTag::Figma => "figma",
            SiteTag::Npm => "npm",
            SiteTag::Mozilla => "mozilla",
            SiteTag::Wikipedia => "wikipedia",
            SiteTag::LeetCode => "leetcode",
            SiteTag::QQMusicSong => "qq-music-song",
            SiteTag::NeteaseMusicSong => "netease-music-song",
            SiteTag::XiaoHongShu => "xiaohongshu",
            SiteTag::Telegram => "telegram",
            SiteTag::Codesandbox => "codesandbox",
        }
    }
}

impl fmt::Display for SiteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteTag {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SiteTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| LinkError::UnknownTag(s.to_string()))
    }
}

/// Numeric note id, or the not-a-number sentinel when the path segment
/// does not hold a number.
///
/// Consumers must check [`NoteId::is_nan`] before using the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteId {
    Number(u64),
    NotANumber,
}

impl NoteId {
    /// Parse a path segment. Never fails: anything that is not a plain
    /// decimal number becomes [`NoteId::NotANumber`].
    pub fn parse(segment: &str) -> Self {
        segment
            .trim()
            .parse::<u64>()
            .map(NoteId::Number)
            .unwrap_or(NoteId::NotANumber)
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, NoteId::NotANumber)
    }

    pub fn as_number(&self) -> Option<u64> {
        match self {
            NoteId::Number(n) => Some(*n),
            NoteId::NotANumber => None,
        }
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Number(n) => write!(f, "{}", n),
            NoteId::NotANumber => f.write_str("NaN"),
        }
    }
}

impl Serialize for NoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NoteId::Number(n) => serializer.serialize_u64(*n),
            NoteId::NotANumber => serializer.serialize_none(),
        }
    }
}

/// Fields extracted from a URL, shaped per site.
///
/// Positional fields that were absent in the path are empty strings; see the
/// extractor contracts in [`crate::core::extractors`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "kebab-case")]
pub enum Fields {
    Repo {
        owner: String,
        repo: String,
    },
    Gist {
        owner: String,
        id: String,
    },
    /// Commit and blob links: `/owner/repo/<kind>/<id>/<rest...>`
    Typed {
        owner: String,
        repo: String,
        #[serde(rename = "type")]
        kind: String,
        id: String,
        /// Segments from the id onwards, joined with `/`
        after_type: String,
    },
    PullRequest {
        owner: String,
        repo: String,
        #[serde(rename = "type")]
        kind: String,
        pr: String,
    },
    Profile {
        #[serde(rename = "type")]
        kind: String,
        id: String,
    },
    Media {
        #[serde(rename = "type")]
        kind: String,
        id: String,
    },
    Tweet {
        id: String,
    },
    Video {
        id: String,
    },
    Arxiv {
        id: String,
    },
    Post {
        slug: String,
    },
    Note {
        nid: NoteId,
    },
    Thinking {
        id: String,
    },
    Song {
        id: String,
    },
}

impl Fields {
    /// Whether every documented field is present: no empty strings and no
    /// not-a-number note id.
    pub fn is_complete(&self) -> bool {
        match self {
            Fields::Repo { owner, repo } => !owner.is_empty() && !repo.is_empty(),
            Fields::Gist { owner, id } => !owner.is_empty() && !id.is_empty(),
            Fields::Typed {
                owner,
                repo,
                kind,
                id,
                after_type,
            } => [owner, repo, kind, id, after_type].iter().all(|s| !s.is_empty()),
            Fields::PullRequest {
                owner,
                repo,
                kind,
                pr,
            } => [owner, repo, kind, pr].iter().all(|s| !s.is_empty()),
            Fields::Profile { kind, id } | Fields::Media { kind, id } => {
                !kind.is_empty() && !id.is_empty()
            }
            Fields::Tweet { id }
            | Fields::Video { id }
            | Fields::Arxiv { id }
            | Fields::Thinking { id }
            | Fields::Song { id } => !id.is_empty(),
            Fields::Post { slug } => !slug.is_empty(),
            Fields::Note { nid } => !nid.is_nan(),
        }
    }
}

/// A classified URL together with its extracted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub tag: SiteTag,
    /// `None` for tags without an extractor, or when the extractor found
    /// nothing to report (e.g. a self-hosted path that is neither a post nor
    /// a note).
    pub fields: Option<Fields>,
}

impl MatchResult {
    pub fn new(tag: SiteTag, fields: Option<Fields>) -> Self {
        Self { tag, fields }
    }
}
