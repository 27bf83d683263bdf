//! Checks for the submit/placeholder/resolve cycle and the meme-speak pass,
//! exercised at the model layer.

use skibidi::ai::extract_reply;
use skibidi::transform::meme_speak;
use skibidi::types::{Conversation, PLACEHOLDER, Role};

#[test]
fn submission_appends_user_message_before_any_reply() {
    let mut convo = Conversation::new();
    convo.push_user("do you even lift");

    assert_eq!(convo.messages().len(), 1);
    let msg = &convo.messages()[0];
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "do you even lift");
}

#[test]
fn successful_reply_renders_meme_speak() {
    let body = r#"{"choices":[{"message":{"content":"hello friend, seriously amazing"}}]}"#;
    let reply = extract_reply(body).expect("well-formed body");
    assert_eq!(meme_speak(&reply), "yo fam, fr fr lit");
}

#[test]
fn code_fences_survive_framed_by_newlines() {
    assert_eq!(meme_speak("```x=1```"), "\n```\nx=1\n```\n");
}

#[test]
fn failed_request_leaves_placeholder_in_place() {
    let mut convo = Conversation::new();
    convo.push_user("anybody there?");
    let pending = convo.push_placeholder();

    // Transport failed: resolve() never runs for this id.
    let last = convo.messages().last().unwrap();
    assert_eq!(last.id, pending);
    assert_eq!(last.content, PLACEHOLDER);
    assert!(last.pending);
}

#[test]
fn out_of_order_completions_land_on_their_own_placeholders() {
    let mut convo = Conversation::new();
    convo.push_user("first");
    let first = convo.push_placeholder();
    convo.push_user("second");
    let second = convo.push_placeholder();

    // The second request finishes before the first.
    assert!(convo.resolve(second, "reply to second".into()));
    assert!(convo.resolve(first, "reply to first".into()));

    let bot_replies: Vec<&str> = convo
        .messages()
        .iter()
        .filter(|msg| matches!(msg.role, Role::Bot))
        .map(|msg| msg.content.as_str())
        .collect();
    assert_eq!(bot_replies, vec!["reply to first", "reply to second"]);

    let user_texts: Vec<&str> = convo
        .messages()
        .iter()
        .filter(|msg| matches!(msg.role, Role::User))
        .map(|msg| msg.content.as_str())
        .collect();
    assert_eq!(user_texts, vec!["first", "second"]);
}
