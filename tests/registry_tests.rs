//! End-to-end classification through the registry.

use linkparser::*;
use pretty_assertions::assert_eq;

fn url(input: &str) -> ParsedUrl {
    ParsedUrl::parse(input).unwrap()
}

fn s(value: &str) -> String {
    value.to_string()
}

#[test]
fn test_github_repo_scenario() {
    let result = resolve(&url("https://github.com/torvalds/linux"), &SiteContext::default()).unwrap();

    assert_eq!(result.tag, SiteTag::GithubRepo);
    assert_eq!(
        result.fields,
        Some(Fields::Repo {
            owner: s("torvalds"),
            repo: s("linux"),
        })
    );
}

#[test]
fn test_github_pr_scenario() {
    let result = resolve(
        &url("https://github.com/torvalds/linux/pull/42"),
        &SiteContext::default(),
    )
    .unwrap();

    assert_eq!(result.tag, SiteTag::GithubPr);
    assert_eq!(
        result.fields,
        Some(Fields::PullRequest {
            owner: s("torvalds"),
            repo: s("linux"),
            kind: s("pull"),
            pr: s("42"),
        })
    );
}

#[test]
fn test_tweet_scenario() {
    let ctx = SiteContext::default();
    let tweet = url("https://x.com/jack/status/20");

    assert_eq!(classify(&tweet, &ctx), Some(SiteTag::Tweet));
    assert_eq!(
        extract(SiteTag::Tweet, &tweet),
        Some(Fields::Tweet { id: s("20") })
    );
}

#[test]
fn test_arxiv_scenario() {
    let result = resolve(&url("https://arxiv.org/abs/2301.00001v2"), &SiteContext::default()).unwrap();

    assert_eq!(result.tag, SiteTag::Arxiv);
    assert_eq!(result.fields, Some(Fields::Arxiv { id: s("2301.00001v2") }));
}

#[test]
fn test_bilibili_scenario() {
    let result = resolve(
        &url("https://www.bilibili.com/video/BV1tj42197hU"),
        &SiteContext::default(),
    )
    .unwrap();

    assert_eq!(result.tag, SiteTag::BilibiliVideo);
    assert_eq!(
        result.fields,
        Some(Fields::Media {
            kind: s("video"),
            id: s("BV1tj42197hU"),
        })
    );
}

#[test]
fn test_self_article_scenario() {
    let ctx = SiteContext::client("innei.in");

    let note = resolve(&url("https://innei.in/notes/123"), &ctx).unwrap();
    assert_eq!(note.tag, SiteTag::SelfArticle);
    assert_eq!(
        note.fields,
        Some(Fields::Note {
            nid: NoteId::Number(123)
        })
    );

    let bad = resolve(&url("https://innei.in/notes/abc"), &ctx).unwrap();
    match bad.fields {
        Some(Fields::Note { nid }) => assert!(nid.is_nan()),
        other => panic!("expected a note, got {:?}", other),
    }
}

#[test]
fn test_self_article_requires_interactive_context() {
    let result = resolve(&url("https://innei.in/notes/123"), &SiteContext::default());
    assert_eq!(result, None);
}

#[test]
fn test_self_thinking() {
    let ctx = SiteContext::client("innei.in");
    let result = resolve(&url("https://innei.in/thinking/66166aa7f7410b48581cb36f"), &ctx).unwrap();

    assert_eq!(result.tag, SiteTag::SelfThinking);
    assert_eq!(
        result.fields,
        Some(Fields::Thinking {
            id: s("66166aa7f7410b48581cb36f")
        })
    );
}

#[test]
fn test_classify_is_deterministic() {
    let ctx = SiteContext::client("innei.in");
    let inputs = vec![
        "https://github.com/torvalds/linux",
        "https://twitter.com/jack",
        "https://innei.in/posts/a/b",
        "https://example.com/",
    ];

    for input in inputs {
        let parsed = url(input);
        let first = classify(&parsed, &ctx);
        for _ in 0..5 {
            assert_eq!(classify(&parsed, &ctx), first, "classify changed for {}", input);
        }
        assert_eq!(Registry::new().classify(&parsed, &ctx), first);
    }
}

#[test]
fn test_resolved_fields_are_complete() {
    let ctx = SiteContext::client("innei.in");
    let inputs = vec![
        "https://innei.in/posts/programming/hello",
        "https://innei.in/notes/7",
        "https://innei.in/thinking/66166aa7",
        "https://github.com/torvalds/linux/pull/42",
        "https://github.com/mx-space/core/commit/e1b4d881",
        "https://github.com/Innei/sprightly/blob/1423459/src/socket/handler.ts",
        "https://github.com/torvalds/linux",
        "https://github.com/torvalds",
        "https://gist.github.com/Innei/9bd0cfa2",
        "https://twitter.com/jack",
        "https://x.com/jack/status/20",
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://www.bilibili.com/video/BV1tj42197hU",
        "https://www.zhihu.com/people/excited-vczh",
        "https://arxiv.org/pdf/2301.00001",
        "https://www.themoviedb.org/movie/603",
        "https://bgm.tv/subject/253",
        "https://y.qq.com/n/ryqq/songDetail/0039MnYb0qxYhV",
        "https://music.163.com/#/song?id=1901371647",
        "https://codesandbox.io/s/p39g96",
    ];

    for input in inputs {
        let result = resolve(&url(input), &ctx).unwrap_or_else(|| panic!("{} did not match", input));
        let fields = result
            .fields
            .unwrap_or_else(|| panic!("{} ({}) has no fields", input, result.tag));
        assert!(fields.is_complete(), "{} produced incomplete {:?}", input, fields);
    }
}

#[test]
fn test_truncated_links_never_resolve_to_empty_fields() {
    let ctx = SiteContext::client("innei.in");
    let inputs = vec![
        "https://x.com/",
        "https://twitter.com/jack/status/",
        "https://www.zhihu.com/people/",
        "https://innei.in/posts/",
        "https://innei.in/notes/",
        "https://innei.in/thinking/",
        "https://codesandbox.io/s/",
        "https://bgm.tv/subject",
        "https://bgm.tv/subject/",
        "https://github.com/a/b/commit",
        "https://github.com/a/b/blob/",
        "https://www.youtube.com/watch",
        "https://www.youtube.com/watch?v=",
        "https://y.qq.com/n/ryqq/songDetail/",
        "https://music.163.com/#/song",
        "https://music.163.com/song?id=",
    ];

    for input in inputs {
        if let Some(result) = resolve(&url(input), &ctx) {
            if let Some(fields) = result.fields {
                assert!(
                    fields.is_complete(),
                    "{} resolved to {} with incomplete {:?}",
                    input,
                    result.tag,
                    fields
                );
            }
        }
    }

    assert_eq!(classify(&url("https://github.com/a/b/commit"), &ctx), None);
    assert_eq!(classify(&url("https://x.com/"), &ctx), None);
}

#[test]
fn test_tags_without_extractor() {
    let ctx = SiteContext::default();
    let inputs = vec![
        ("https://www.figma.com/file/abc", SiteTag::Figma),
        ("https://www.npmjs.com/package/left-pad", SiteTag::Npm),
        ("https://developer.mozilla.org/en-US/", SiteTag::Mozilla),
        ("https://en.wikipedia.org/wiki/Rust", SiteTag::Wikipedia),
        ("https://leetcode.cn/problems/two-sum/", SiteTag::LeetCode),
        ("https://www.xiaohongshu.com/explore/1", SiteTag::XiaoHongShu),
        ("https://t.me/rustlang", SiteTag::Telegram),
    ];

    for (input, tag) in inputs {
        assert_eq!(
            resolve(&url(input), &ctx),
            Some(MatchResult::new(tag, None)),
            "{}",
            input
        );
    }
}

#[test]
fn test_self_hosted_takes_precedence_over_other_sites() {
    // A deployment served from a host that other predicates also accept.
    let ctx = SiteContext::client("codesandbox.io");
    assert_eq!(
        classify(&url("https://codesandbox.io/notes/1"), &ctx),
        Some(SiteTag::SelfArticle)
    );
}

#[test]
fn test_classify_str() {
    let registry = Registry::default();
    let ctx = SiteContext::default();

    let result = registry.classify_str("https://t.me/rustlang", &ctx).unwrap();
    assert_eq!(result.map(|r| r.tag), Some(SiteTag::Telegram));

    assert_eq!(registry.classify_str("https://example.com", &ctx).unwrap(), None);
    assert!(registry.classify_str("::", &ctx).is_err());
}

#[test]
fn test_match_result_serializes() {
    let result = resolve(
        &url("https://github.com/torvalds/linux/pull/42"),
        &SiteContext::default(),
    )
    .unwrap();

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["tag"], "github-pr");
    assert_eq!(json["fields"]["shape"], "pull-request");
    assert_eq!(json["fields"]["type"], "pull");
    assert_eq!(json["fields"]["pr"], "42");
}

#[test]
fn test_custom_registry() {
    let mut registry = Registry::empty();
    registry.register(Matcher::new(
        SiteTag::GithubRepo,
        |url, _| is_github_repo_url(url),
        Some(|url| Some(parse_github_repo_url(url))),
    ));

    let ctx = SiteContext::default();
    assert_eq!(registry.matchers().len(), 1);
    assert_eq!(
        registry.classify(&url("https://github.com/torvalds/linux"), &ctx),
        Some(SiteTag::GithubRepo)
    );
    assert_eq!(registry.classify(&url("https://github.com/torvalds"), &ctx), None);
}
