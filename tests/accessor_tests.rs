//! Clipboard accessor integration tests
//!
//! Exercise the public API end to end against the deterministic in-memory
//! backend, so the suite does not depend on a host clipboard service.

use termclip::application::ports::ClipboardError;
use termclip::application::ClipboardAccessor;
use termclip::domain::ClipEntry;
use termclip::infrastructure::{AppContext, MemoryClipboard};

fn accessor_over(clipboard: MemoryClipboard) -> ClipboardAccessor {
    ClipboardAccessor::new(&AppContext::with_clipboard(clipboard))
}

#[test]
fn set_text_makes_has_text_true() {
    let clipboard = accessor_over(MemoryClipboard::new());

    clipboard.set_text("hello").unwrap();
    assert!(clipboard.has_text().unwrap());
}

#[test]
fn round_trip_preserves_text() {
    let clipboard = accessor_over(MemoryClipboard::new());

    for text in ["hello", "", "line one\nline two", "naïve café ✂️📋", "  padded  "] {
        clipboard.set_text(text).unwrap();
        assert!(clipboard.has_text().unwrap());
        assert_eq!(clipboard.get_text().unwrap(), text);
    }
}

#[test]
fn get_text_on_empty_clipboard_is_an_error_not_a_default() {
    let clipboard = accessor_over(MemoryClipboard::new());

    assert!(matches!(clipboard.get_text(), Err(ClipboardError::Empty)));
}

#[test]
fn has_text_is_false_for_a_non_text_entry() {
    // An image entry is present, but its declared content type is not
    // plain text.
    let clipboard = accessor_over(MemoryClipboard::with_entry(ClipEntry::image(vec![0u8; 32])));

    assert!(!clipboard.has_text().unwrap());
    assert!(matches!(clipboard.get_text(), Err(ClipboardError::Empty)));
}

#[test]
fn copy_paste_scenario() {
    let clipboard = accessor_over(MemoryClipboard::new());

    clipboard.set_text("hello").unwrap();
    assert!(clipboard.has_text().unwrap());
    assert_eq!(clipboard.get_text().unwrap(), "hello");
}

#[test]
fn preset_clipboard_is_readable_without_a_prior_set() {
    // The host clipboard already holds text placed there by another
    // application before this accessor was constructed.
    let clipboard = accessor_over(MemoryClipboard::with_entry(ClipEntry::text("preset")));

    assert!(clipboard.has_text().unwrap());
    assert_eq!(clipboard.get_text().unwrap(), "preset");
}

#[test]
fn set_text_overwrites_the_previous_entry() {
    let clipboard = accessor_over(MemoryClipboard::with_entry(ClipEntry::image(vec![1, 2, 3])));

    clipboard.set_text("replaced").unwrap();
    assert!(clipboard.has_text().unwrap());
    assert_eq!(clipboard.get_text().unwrap(), "replaced");

    clipboard.set_text("replaced again").unwrap();
    assert_eq!(clipboard.get_text().unwrap(), "replaced again");
}

#[test]
fn missing_clipboard_service_fails_at_first_use_not_at_construction() {
    let context = AppContext::headless();
    let clipboard = ClipboardAccessor::new(&context);

    for result in [
        clipboard.set_text("hello").err(),
        clipboard.get_text().err(),
        clipboard.has_text().err(),
    ] {
        assert!(matches!(result, Some(ClipboardError::Unavailable(_))));
    }
}

#[test]
fn two_accessors_share_one_clipboard() {
    let context = AppContext::with_clipboard(MemoryClipboard::new());
    let writer = ClipboardAccessor::new(&context);
    let reader = ClipboardAccessor::new(&context);

    writer.set_text("shared").unwrap();
    assert!(reader.has_text().unwrap());
    assert_eq!(reader.get_text().unwrap(), "shared");
}
