use test_utils::draft_reply_fixture;
use test_utils::multiline_draft_reply_fixture;

use super::DraftEmail;
use super::DraftExtraction;

#[test]
fn it_extracts_draft() {
    let res = DraftExtraction::extract(draft_reply_fixture());

    assert_eq!(res.display_text, "Sure. ");
    assert_eq!(
        res.draft,
        Some(DraftEmail {
            subject: "Question about SAP".to_string(),
            body: "Hi, tell me more.".to_string(),
        })
    );
}

#[test]
fn it_returns_text_unchanged_without_marker() {
    let res = DraftExtraction::extract("He has 3 years of experience.");

    assert_eq!(res.display_text, "He has 3 years of experience.");
    assert_eq!(res.draft, None);
}

#[test]
fn it_extracts_multiline_body() {
    let res = DraftExtraction::extract(multiline_draft_reply_fixture());
    let draft = res.draft.unwrap();

    assert_eq!(draft.subject, "Interview request");
    assert_eq!(
        draft.body,
        "Hi,\n\nI'd love to chat about the SAP HR workflow project.\n\nThanks!"
    );
    insta::assert_snapshot!(res.display_text, @r###"
    Here's a draft you can send.



    Let me know if you'd like any changes.
    "###);
}

#[test]
fn it_ignores_marker_missing_body() {
    let text = "Sure. [DRAFT_EMAIL: Subject: Question about SAP]";
    let res = DraftExtraction::extract(text);

    assert_eq!(res.display_text, text);
    assert_eq!(res.draft, None);
}

#[test]
fn it_ignores_marker_with_empty_subject() {
    let text = "Sure. [DRAFT_EMAIL: Subject:  | Body: Hi there.]";
    let res = DraftExtraction::extract(text);

    assert_eq!(res.display_text, text);
    assert_eq!(res.draft, None);
}

#[test]
fn it_ignores_unclosed_marker() {
    let text = "Sure. [DRAFT_EMAIL: Subject: Hello | Body: Hi there.";
    let res = DraftExtraction::extract(text);

    assert_eq!(res.display_text, text);
    assert_eq!(res.draft, None);
}

#[test]
fn it_keeps_first_draft_and_strips_all_markers() {
    let text = "A [DRAFT_EMAIL: Subject: One | Body: First.] B [DRAFT_EMAIL: Subject: Two | Body: Second.] C";
    let res = DraftExtraction::extract(text);

    assert_eq!(res.display_text, "A  B  C");
    assert_eq!(res.draft, Some(DraftEmail::new("One", "First.")));
}

#[test]
fn it_is_idempotent() {
    let inputs = vec![
        draft_reply_fixture(),
        multiline_draft_reply_fixture(),
        "He has 3 years of experience.",
        "[DRAFT_EMAIL: Subject: a [DRAFT_EMAIL: Subject: b | Body: c] | Body: d]",
        "[DRAFT_EMAIL: Subject: x | Body: [DRAFT_EMAIL: Subject: y | Body: z]]",
        "",
    ];

    for input in inputs {
        let first = DraftExtraction::extract(input);
        let second = DraftExtraction::extract(&first.display_text);

        assert_eq!(second.display_text, first.display_text);
        assert_eq!(second.draft, None);
    }
}

#[test]
fn it_takes_the_inner_marker_when_nested() {
    let res = DraftExtraction::extract(
        "[DRAFT_EMAIL: Subject: a [DRAFT_EMAIL: Subject: b | Body: c] | Body: d]",
    );
    assert_eq!(res.draft, Some(DraftEmail::new("b", "c")));
    assert_eq!(res.display_text, "");

    let res = DraftExtraction::extract(
        "[DRAFT_EMAIL: Subject: x | Body: [DRAFT_EMAIL: Subject: y | Body: z]]",
    );
    assert_eq!(res.draft, Some(DraftEmail::new("y", "z")));
    assert_eq!(res.display_text, "[DRAFT_EMAIL: Subject: x | Body: ]");
}

#[test]
fn it_formats_draft() {
    let draft = DraftEmail::new(" Question about SAP ", "Hi, tell me more.");
    insta::assert_snapshot!(draft.format(), @r###"
    Subject: Question about SAP

    Hi, tell me more.
    "###);
}
