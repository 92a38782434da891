//! Tests for `Post` configuration and payload compilation.

use super::{MarkdownSection, MessageError, Post, color, post};
use crate::address::AddressError;

const TEST_URL: &str =
    "https://hooks.slack.com/services/ABCDEF012/012345ABC/fjdke456HRekdftFOGRPh21s";
const TEST_TEXT: &str = "This is my testing post text";

fn test_post() -> Post {
    Post::new(TEST_URL, TEST_TEXT).unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn valid_address_creates_post() {
        let post = test_post();

        assert_eq!(post.text(), TEST_TEXT);
        assert_eq!(post.address().host(), "hooks.slack.com");
    }

    #[test]
    fn invalid_address_fails() {
        let result = Post::new("https://invalid-hook.com/", TEST_TEXT);

        assert!(matches!(result, Err(AddressError::InvalidAddress(_))));
    }

    #[test]
    fn post_shorthand_matches_new() {
        assert_eq!(post(TEST_URL, TEST_TEXT).unwrap(), test_post());
    }
}

mod chaining {
    use super::*;

    #[test]
    fn setters_return_same_instance() {
        let mut post = test_post();
        let addr = std::ptr::from_ref(&post);

        let returned = post
            .set_username("bot")
            .set_icon_emoji("smile")
            .set_icon_url("https://example.com/icon.png")
            .enable_unfurl_links()
            .disable_markdown()
            .set_color(color::WARNING)
            .set_pretext("pre", false)
            .set_author("me", None, None)
            .set_title("title", None)
            .set_rich_text("rich", false)
            .add_field("a", "b", false)
            .enable_field_markdown()
            .set_thumbnail("https://example.com/t.png")
            .set_image("https://example.com/i.png");

        assert!(std::ptr::eq(std::ptr::from_ref(returned), addr));
    }

    #[test]
    fn validating_setters_chain_with_question_mark() -> Result<(), MessageError> {
        let mut post = test_post();
        post.set_channel("#test-channel")?
            .set_footer("footer", Some("12345"), None)?
            .set_username("bot");

        let payload = post.build_payload();
        assert_eq!(payload.channel.as_deref(), Some("#test-channel"));
        assert_eq!(payload.username.as_deref(), Some("bot"));
        Ok(())
    }
}

mod plain_mode {
    use super::*;

    #[test]
    fn base_text_only_compiles_to_text() {
        let payload = test_post().build_payload();

        assert_eq!(payload.text.as_deref(), Some(TEST_TEXT));
        assert_eq!(payload.mrkdwn, None);
        assert!(payload.attachments.is_empty());
        assert!(!payload.is_rich());
    }

    #[test]
    fn base_text_only_serializes_to_single_key() {
        let json = serde_json::to_value(test_post().build_payload()).unwrap();

        assert_eq!(json, serde_json::json!({ "text": TEST_TEXT }));
    }

    #[test]
    fn disable_markdown_sets_mrkdwn_false() {
        let mut post = test_post();
        post.disable_markdown();
        let payload = post.build_payload();

        assert_eq!(payload.mrkdwn, Some(false));
        assert_eq!(payload.text.as_deref(), Some(TEST_TEXT));
    }

    #[test]
    fn color_alone_stays_plain() {
        let mut post = test_post();
        post.set_color(color::DANGER);

        assert!(!post.build_payload().is_rich());
    }
}

mod envelope {
    use super::*;

    #[test]
    fn defaults_omit_overrides() {
        let payload = test_post().build_payload();

        assert_eq!(payload.username, None);
        assert_eq!(payload.channel, None);
        assert_eq!(payload.icon_emoji, None);
        assert_eq!(payload.icon_url, None);
        assert_eq!(payload.unfurl_links, None);
    }

    #[test]
    fn username_is_emitted() {
        let mut post = test_post();
        post.set_username("magnetikonline");

        assert_eq!(
            post.build_payload().username.as_deref(),
            Some("magnetikonline")
        );
    }

    #[test]
    fn unfurl_links_is_emitted_as_true() {
        let mut post = test_post();
        post.enable_unfurl_links();

        assert_eq!(post.build_payload().unfurl_links, Some(true));
    }

    #[test]
    fn icon_emoji_is_wrapped_in_colons() {
        let mut post = test_post();
        post.set_icon_emoji("smile");

        assert_eq!(post.build_payload().icon_emoji.as_deref(), Some(":smile:"));
    }

    #[test]
    fn icon_url_is_emitted_alone() {
        let mut post = test_post();
        post.set_icon_url("http://domain.com/my-icon.png");
        let payload = post.build_payload();

        assert_eq!(
            payload.icon_url.as_deref(),
            Some("http://domain.com/my-icon.png")
        );
        assert_eq!(payload.icon_emoji, None);
    }

    #[test]
    fn icon_emoji_wins_over_icon_url() {
        let mut post = test_post();
        post.set_icon_url("http://domain.com/my-icon.png")
            .set_icon_emoji("smile");
        let payload = post.build_payload();

        assert_eq!(payload.icon_emoji.as_deref(), Some(":smile:"));
        assert_eq!(payload.icon_url, None);
    }
}

mod channel {
    use super::*;

    #[test]
    fn accepts_channel_and_direct_message() {
        for channel in ["#test-channel", "@magnetikonline", "#a", "@x.y_z"] {
            let mut post = test_post();
            post.set_channel(channel).unwrap();

            assert_eq!(
                post.build_payload().channel.as_deref(),
                Some(channel),
                "Failed for channel: {channel}"
            );
        }
    }

    #[test]
    fn rejects_malformed_identifiers() {
        for channel in [
            "invalid-channel-format",
            "#",
            "@",
            "",
            "#test channel",
            "#tab\tchannel",
            " #leading",
            "#trailing\n",
        ] {
            let mut post = test_post();
            let result = post.set_channel(channel);

            assert_eq!(
                result.err(),
                Some(MessageError::InvalidChannel(channel.to_string())),
                "Expected rejection for: {channel:?}"
            );
        }
    }

    #[test]
    fn failed_set_keeps_previous_channel() {
        let mut post = test_post();
        post.set_channel("#first").unwrap();

        assert!(post.set_channel("bad channel").is_err());
        assert_eq!(post.build_payload().channel.as_deref(), Some("#first"));
    }
}

mod mode_switch {
    use super::*;

    fn assert_rich(configure: impl FnOnce(&mut Post)) {
        let mut post = test_post();
        configure(&mut post);
        let payload = post.build_payload();

        assert_eq!(payload.text, None);
        assert_eq!(payload.attachments.len(), 1);
        assert_eq!(payload.attachments[0].fallback, TEST_TEXT);
    }

    #[test]
    fn each_trigger_switches_to_rich_mode() {
        assert_rich(|p| {
            p.set_pretext("pre", false);
        });
        assert_rich(|p| {
            p.set_author("author", None, None);
        });
        assert_rich(|p| {
            p.set_title("title", None);
        });
        assert_rich(|p| {
            p.set_rich_text("rich", false);
        });
        assert_rich(|p| {
            p.add_field("title", "value", false);
        });
        assert_rich(|p| {
            p.set_thumbnail("https://example.com/t.png");
        });
        assert_rich(|p| {
            p.set_image("https://example.com/i.png");
        });
        assert_rich(|p| {
            p.set_footer("footer", None, None).unwrap();
        });
    }

    #[test]
    fn disable_markdown_ignored_in_rich_mode() {
        let mut post = test_post();
        post.disable_markdown().set_pretext("pre", false);
        let payload = post.build_payload();

        assert_eq!(payload.mrkdwn, None);
        assert!(payload.attachments[0].mrkdwn_in.is_empty());
    }

    #[test]
    fn envelope_fields_kept_in_rich_mode() {
        let mut post = test_post();
        post.set_username("bot")
            .set_icon_emoji("rocket")
            .enable_unfurl_links()
            .set_title("title", None);
        let payload = post.build_payload();

        assert_eq!(payload.username.as_deref(), Some("bot"));
        assert_eq!(payload.icon_emoji.as_deref(), Some(":rocket:"));
        assert_eq!(payload.unfurl_links, Some(true));
        assert!(payload.is_rich());
    }
}

mod attachment {
    use super::*;

    #[test]
    fn color_defaults_to_good() {
        let mut post = test_post();
        post.set_pretext("pre", false);

        assert_eq!(post.build_payload().attachments[0].color, color::GOOD);
    }

    #[test]
    fn color_override_is_used() {
        let mut post = test_post();
        post.set_color("#439FE0").set_pretext("pre", false);

        assert_eq!(post.build_payload().attachments[0].color, "#439FE0");
    }

    #[test]
    fn author_with_link_and_icon() {
        let mut post = test_post();
        post.set_author(
            "Peter",
            Some("https://example.com/peter"),
            Some("https://example.com/peter.png"),
        );
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(attachment.author_name.as_deref(), Some("Peter"));
        assert_eq!(
            attachment.author_link.as_deref(),
            Some("https://example.com/peter")
        );
        assert_eq!(
            attachment.author_icon.as_deref(),
            Some("https://example.com/peter.png")
        );
    }

    #[test]
    fn author_without_extras_omits_link_and_icon() {
        let mut post = test_post();
        post.set_author("Peter", None, None);
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(attachment.author_link, None);
        assert_eq!(attachment.author_icon, None);
    }

    #[test]
    fn set_author_again_clears_previous_extras() {
        let mut post = test_post();
        post.set_author("Peter", Some("https://example.com/peter"), None)
            .set_author("Paul", None, None);
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(attachment.author_name.as_deref(), Some("Paul"));
        assert_eq!(attachment.author_link, None);
    }

    #[test]
    fn title_with_and_without_link() {
        let mut post = test_post();
        post.set_title("Release", Some("https://example.com/release"));
        let attachment = &post.build_payload().attachments[0];
        assert_eq!(attachment.title.as_deref(), Some("Release"));
        assert_eq!(
            attachment.title_link.as_deref(),
            Some("https://example.com/release")
        );

        post.set_title("Release", None);
        assert_eq!(post.build_payload().attachments[0].title_link, None);
    }

    #[test]
    fn rich_text_goes_to_attachment_text() {
        let mut post = test_post();
        post.set_rich_text("*bold*", false);
        let payload = post.build_payload();

        assert_eq!(payload.attachments[0].text.as_deref(), Some("*bold*"));
        assert_eq!(payload.text, None);
    }

    #[test]
    fn thumbnail_alone() {
        let mut post = test_post();
        post.set_thumbnail("https://example.com/t.png");
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(
            attachment.thumb_url.as_deref(),
            Some("https://example.com/t.png")
        );
        assert_eq!(attachment.image_url, None);
    }

    #[test]
    fn image_alone() {
        let mut post = test_post();
        post.set_image("https://example.com/i.png");
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(
            attachment.image_url.as_deref(),
            Some("https://example.com/i.png")
        );
        assert_eq!(attachment.thumb_url, None);
    }

    #[test]
    fn thumbnail_wins_over_image() {
        let mut post = test_post();
        post.set_image("https://example.com/i.png")
            .set_thumbnail("https://example.com/t.png");
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(
            attachment.thumb_url.as_deref(),
            Some("https://example.com/t.png")
        );
        assert_eq!(attachment.image_url, None);
    }
}

mod fields {
    use super::*;

    #[test]
    fn preserve_insertion_order_and_default_short() {
        let mut post = test_post();
        post.add_field("First", "1", false)
            .add_field("Second", "2", true)
            .add_field("Third", "3", false);
        let fields = &post.build_payload().attachments[0].fields;

        let titles: Vec<&str> = fields.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
        assert_eq!(
            fields.iter().map(|f| f.short).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let mut post = test_post();
        post.add_field("Same", "value", false)
            .add_field("Same", "value", false);

        assert_eq!(post.build_payload().attachments[0].fields.len(), 2);
    }

    #[test]
    fn serialize_verbatim() {
        let mut post = test_post();
        post.add_field("Env", "prod", true);
        let json = serde_json::to_value(post.build_payload()).unwrap();

        assert_eq!(
            json["attachments"][0]["fields"],
            serde_json::json!([{ "title": "Env", "value": "prod", "short": true }])
        );
    }
}

mod footer {
    use super::*;

    #[test]
    fn timestamp_compiles_to_integer() {
        let mut post = test_post();
        post.set_footer("footer", Some("12345"), None).unwrap();
        let json = serde_json::to_value(post.build_payload()).unwrap();

        assert_eq!(json["attachments"][0]["ts"], serde_json::json!(12345));
        assert_eq!(json["attachments"][0]["footer"], "footer");
    }

    #[test]
    fn non_digit_timestamp_fails() {
        for ts in ["12a", "", "-1", "1.5", " 12", "0x10"] {
            let mut post = test_post();
            let result = post.set_footer("footer", Some(ts), None);

            assert_eq!(
                result.err(),
                Some(MessageError::InvalidTimestamp(ts.to_string())),
                "Expected rejection for: {ts:?}"
            );
        }
    }

    #[test]
    fn overflowing_timestamp_fails() {
        let mut post = test_post();
        let result = post.set_footer("footer", Some("99999999999999999999999"), None);

        assert!(matches!(result, Err(MessageError::InvalidTimestamp(_))));
    }

    #[test]
    fn failed_set_leaves_draft_unchanged() {
        let mut post = test_post();
        let before = post.clone();

        assert!(post.set_footer("footer", Some("12a"), None).is_err());
        assert_eq!(post, before);
        assert!(!post.build_payload().is_rich());
    }

    #[test]
    fn icon_and_timestamp_only_with_footer() {
        let mut post = test_post();
        post.set_footer("footer", Some("0"), Some("https://example.com/f.png"))
            .unwrap();
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(attachment.ts, Some(0));
        assert_eq!(
            attachment.footer_icon.as_deref(),
            Some("https://example.com/f.png")
        );
    }

    #[test]
    fn footer_without_extras() {
        let mut post = test_post();
        post.set_footer("footer", None, None).unwrap();
        let attachment = &post.build_payload().attachments[0];

        assert_eq!(attachment.ts, None);
        assert_eq!(attachment.footer_icon, None);
    }
}

mod markdown {
    use super::*;

    #[test]
    fn all_sections_in_stable_order() {
        let mut post = test_post();
        post.set_pretext("pre", true)
            .set_rich_text("text", true)
            .enable_field_markdown();
        let json = serde_json::to_value(post.build_payload()).unwrap();

        assert_eq!(
            json["attachments"][0]["mrkdwn_in"],
            serde_json::json!(["pretext", "text", "fields"])
        );
    }

    #[test]
    fn order_independent_of_call_order() {
        let mut post = test_post();
        post.enable_field_markdown()
            .set_rich_text("text", true)
            .set_pretext("pre", true);

        assert_eq!(
            post.build_payload().attachments[0].mrkdwn_in,
            vec![
                MarkdownSection::Pretext,
                MarkdownSection::Text,
                MarkdownSection::Fields
            ]
        );
    }

    #[test]
    fn omitted_when_no_section_enabled() {
        let mut post = test_post();
        post.set_pretext("pre", false).set_rich_text("text", false);
        let json = serde_json::to_value(post.build_payload()).unwrap();

        assert!(json["attachments"][0].get("mrkdwn_in").is_none());
    }

    #[test]
    fn only_enabled_sections_listed() {
        let mut post = test_post();
        post.set_pretext("pre", false).set_rich_text("text", true);

        assert_eq!(
            post.build_payload().attachments[0].mrkdwn_in,
            vec![MarkdownSection::Text]
        );
    }
}

mod idempotence {
    use super::*;

    #[test]
    fn repeated_compile_is_equal() {
        let mut post = test_post();
        post.set_username("bot")
            .set_pretext("pre", true)
            .add_field("a", "b", true)
            .set_thumbnail("https://example.com/t.png");

        assert_eq!(post.build_payload(), post.build_payload());
        assert_eq!(post.to_json().unwrap(), post.to_json().unwrap());
    }

    #[test]
    fn compile_reflects_later_mutation() {
        let mut post = test_post();
        let plain = post.build_payload();
        post.set_title("title", None);

        assert_ne!(plain, post.build_payload());
    }
}
