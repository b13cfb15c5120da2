//! Property-based tests for the page's pure functions and machines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use bodyup_landing::carousel::{classify, Carousel, Swipe, SLIDE_COUNT};
use bodyup_landing::config::TimingConfig;
use bodyup_landing::phone::{digits, format_whatsapp, PhoneNumber, MAX_DIGITS};
use bodyup_landing::submission::Phase;
use bodyup_landing::validation::{
    can_submit, email_field_message, is_email_valid, is_phone_valid,
};
use bodyup_landing::{SignupForm, State};
use proptest::prelude::*;
use std::time::Duration;

prop_compose! {
    fn digit_string(max: usize)(s in proptest::collection::vec(0u8..10, 0..=max)) -> String {
        s.into_iter().map(|d| char::from(b'0' + d)).collect()
    }
}

#[derive(Debug, Clone)]
enum Nav {
    Next,
    Previous,
    GoTo(usize),
}

fn arbitrary_nav() -> impl Strategy<Value = Nav> {
    prop_oneof![
        Just(Nav::Next),
        Just(Nav::Previous),
        (0..SLIDE_COUNT).prop_map(Nav::GoTo),
    ]
}

proptest! {
    #[test]
    fn format_preserves_digits_and_only_adds_mask(d in digit_string(MAX_DIGITS)) {
        let formatted = format_whatsapp(&d);
        prop_assert_eq!(digits(&formatted), d.clone());
        prop_assert!(formatted
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | ' ' | '-')));
    }

    #[test]
    fn format_is_idempotent(raw in ".{0,30}") {
        let once = format_whatsapp(&raw);
        prop_assert_eq!(format_whatsapp(&digits(&once)), once.clone());
        prop_assert_eq!(format_whatsapp(&once), once);
    }

    #[test]
    fn over_eleven_digits_leaves_field_unchanged(
        current in digit_string(MAX_DIGITS),
        extra in digit_string(20),
    ) {
        let mut phone = PhoneNumber::parse(&current).unwrap();
        let before = phone.clone();
        let typed = format!("{}{}", phone.masked(), extra);

        let result = phone.apply_input(&typed);
        if current.len() + extra.len() > MAX_DIGITS {
            prop_assert!(result.is_err());
            prop_assert_eq!(phone, before);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(phone.digits(), format!("{current}{extra}"));
        }
    }

    #[test]
    fn phone_valid_iff_eleven_digits(d in digit_string(MAX_DIGITS)) {
        let phone = PhoneNumber::parse(&d).unwrap();
        prop_assert_eq!(is_phone_valid(&phone), d.len() == MAX_DIGITS);
    }

    #[test]
    fn gmail_addresses_accepted_any_case(local in "[a-zA-Z0-9._+-]{1,20}", upper in any::<bool>()) {
        let domain = if upper { "GMAIL.COM" } else { "gmail.com" };
        let email = format!("{local}@{domain}");
        prop_assert!(is_email_valid(&email));
        prop_assert_eq!(email_field_message(&email), None);
    }

    #[test]
    fn text_without_at_always_reports_missing_at(text in "[^@]{1,30}") {
        prop_assert_eq!(email_field_message(&text), Some("O e-mail deve conter @"));
        prop_assert!(!is_email_valid(&text));
    }

    #[test]
    fn strict_valid_email_has_no_message(email in "\\PC{0,30}") {
        if is_email_valid(&email) {
            prop_assert_eq!(email_field_message(&email), None);
        }
    }

    #[test]
    fn carousel_index_always_in_range(ops in proptest::collection::vec(arbitrary_nav(), 0..50)) {
        let mut carousel = Carousel::default();
        let mut model: usize = 0;
        for op in ops {
            match op {
                Nav::Next => { carousel.next(); model = (model + 1) % SLIDE_COUNT; }
                Nav::Previous => {
                    carousel.previous();
                    model = (model + SLIDE_COUNT - 1) % SLIDE_COUNT;
                }
                Nav::GoTo(i) => { carousel.go_to(i); model = i; }
            }
            prop_assert!(carousel.active_index() < SLIDE_COUNT);
            prop_assert_eq!(carousel.active_index(), model);
        }
    }

    #[test]
    fn next_then_previous_is_identity(start in 0..SLIDE_COUNT) {
        let mut carousel = Carousel::default();
        carousel.go_to(start);
        carousel.next();
        carousel.previous();
        prop_assert_eq!(carousel.active_index(), start);
    }

    #[test]
    fn classify_matches_threshold(delta in -500.0f64..500.0) {
        let expected = if delta > 75.0 {
            Some(Swipe::Next)
        } else if delta < -75.0 {
            Some(Swipe::Previous)
        } else {
            None
        };
        prop_assert_eq!(classify(delta, 75.0), expected);
    }

    #[test]
    fn submitting_only_entered_from_idle_or_failed(
        steps in proptest::collection::vec((any::<bool>(), 0u64..7_000), 1..20)
    ) {
        let mut form = SignupForm::new(TimingConfig::default());
        for (valid, wait) in steps {
            let before = form.phase();
            if valid {
                let _ = form.input_whatsapp("11987654321");
                let _ = form.input_email("a@gmail.com");
            } else {
                let _ = form.input_whatsapp("119");
            }
            form.submit();
            let after = form.phase();
            if after == Phase::Submitting && before != Phase::Submitting {
                prop_assert!(before.accepts_submit());
                prop_assert!(before == Phase::Idle || before == Phase::Failed);
            }
            if after != before && after.is_outcome() {
                prop_assert!(!can_submit(form.phone(), form.email()));
            }
            form.advance(Duration::from_millis(wait));
        }
    }
}
