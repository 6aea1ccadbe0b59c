//! Textarea facade tests - commands, debounced input, notifications

mod common;

use std::time::{Duration, Instant};

use common::{entry, record_changes, record_history, test_textarea, test_textarea_with};
use textarea::keymap::parse_key_string;
use textarea::{Command, MemoryField, Selection, TextField, Textarea, TextareaConfig};

fn press(area: &mut Textarea<MemoryField>, key: &str) -> bool {
    area.handle_key(&parse_key_string(key).unwrap())
}

// ========================================================================
// Indentation commands
// ========================================================================

#[test]
fn test_tab_indents_and_records() {
    let mut area = test_textarea("ab\ncd");
    let changes = record_changes(&mut area);

    assert!(press(&mut area, "tab"));

    assert_eq!(area.value(), "    ab\ncd");
    assert_eq!(area.selection(), Selection::collapsed(4));
    assert_eq!(area.history().len(), 2);
    assert_eq!(*changes.borrow(), vec![entry(4, 4, "    ab\ncd")]);
}

#[test]
fn test_shift_tab_outdents_selection() {
    let mut area = test_textarea_with(
        "    ab\n    cd",
        &TextareaConfig::default(),
        Selection::new(0, 13),
    );
    assert!(press(&mut area, "shift+tab"));
    assert_eq!(area.value(), "ab\ncd");
    assert_eq!(area.selection(), Selection::new(0, 5));
}

#[test]
fn test_custom_tab_size() {
    let config = TextareaConfig::default().with_tab_size(2);
    let mut area = test_textarea_with("a\nb", &config, Selection::new(0, 3));
    assert!(area.execute(Command::IndentLines));
    assert_eq!(area.value(), "  a\n  b");
    assert_eq!(area.selection(), Selection::new(2, 7));
}

#[test]
fn test_field_always_shows_current_entry() {
    let mut area = test_textarea("x\ny");
    area.set_selection(Selection::new(0, 3));

    for key in ["tab", "tab", "shift+tab", "ctrl+z", "ctrl+z", "ctrl+shift+z", "tab"] {
        press(&mut area, key);
        let current = area.history().current();
        assert_eq!(area.value(), current.value, "after {}", key);
        assert_eq!(area.selection(), current.selection, "after {}", key);
    }
}

// ========================================================================
// Undo / redo
// ========================================================================

#[test]
fn test_undo_restores_previous_snapshot() {
    let mut area = test_textarea("ab");
    area.increase_indent();
    area.increase_indent();
    assert_eq!(area.value(), "        ab");

    assert!(area.undo());
    assert_eq!(area.value(), "    ab");
    assert_eq!(area.selection(), Selection::collapsed(4));

    assert!(area.undo());
    assert_eq!(area.value(), "ab");
    assert_eq!(area.selection(), Selection::collapsed(0));

    assert!(!area.undo());
    assert_eq!(area.value(), "ab");
}

#[test]
fn test_redo_at_newest_is_noop() {
    let mut area = test_textarea("ab");
    area.increase_indent();
    assert!(!area.redo());
    assert_eq!(area.value(), "    ab");
}

#[test]
fn test_edit_after_undo_discards_redo_branch() {
    let mut area = test_textarea("ab");
    area.increase_indent();
    area.undo();
    area.set_selection(Selection::collapsed(2));
    area.field_mut().type_text("!");
    area.input(Instant::now());
    assert!(area.flush());
    assert_eq!(area.value(), "ab!");

    assert!(!area.redo());
    let values: Vec<&str> = area.history().iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["ab!", "ab"]);
}

#[test]
fn test_navigation_emits_history_not_change() {
    let mut area = test_textarea("ab");
    area.increase_indent();

    let changes = record_changes(&mut area);
    let navigation = record_history(&mut area);

    area.undo();
    area.redo();
    area.redo(); // no-op, no event

    assert!(changes.borrow().is_empty());
    assert_eq!(
        *navigation.borrow(),
        vec![entry(0, 0, "ab"), entry(4, 4, "    ab")]
    );
}

#[test]
fn test_history_length_bounds_undo_depth() {
    let config = TextareaConfig::default().with_history_length(3);
    let mut area = test_textarea_with("x", &config, Selection::collapsed(0));
    for _ in 0..5 {
        area.increase_indent();
    }
    assert_eq!(area.history().len(), 3);

    let mut undos = 0;
    while area.undo() {
        undos += 1;
    }
    assert_eq!(undos, 2);
    assert_eq!(area.value(), format!("{}x", " ".repeat(12)));
}

// ========================================================================
// Debounced input
// ========================================================================

#[test]
fn test_input_burst_records_one_snapshot() {
    let config = TextareaConfig::default().with_input_debounce_ms(100);
    let mut area = test_textarea_with("", &config, Selection::collapsed(0));
    let changes = record_changes(&mut area);
    let start = Instant::now();

    for (i, ch) in ["h", "e", "y"].iter().enumerate() {
        area.field_mut().type_text(ch);
        area.input(start + Duration::from_millis(i as u64 * 30));
    }

    assert!(!area.poll(start + Duration::from_millis(100)));
    assert!(area.poll(start + Duration::from_millis(160)));
    assert!(!area.poll(start + Duration::from_millis(500)));

    assert_eq!(*changes.borrow(), vec![entry(3, 3, "hey")]);
    assert_eq!(area.history().len(), 2);
}

#[test]
fn test_debounced_snapshot_uses_state_at_fire_time() {
    let config = TextareaConfig::default().with_input_debounce_ms(50);
    let mut area = test_textarea_with("", &config, Selection::collapsed(0));
    let start = Instant::now();

    area.field_mut().type_text("a");
    area.input(start);
    // The field changes again without a new input event reaching the textarea.
    area.field_mut().type_text("b");
    area.set_selection(Selection::new(0, 1));

    assert!(area.poll(start + Duration::from_millis(50)));
    assert_eq!(*area.history().current(), entry(0, 1, "ab"));
}

#[test]
fn test_pending_input_is_flushed_before_indent() {
    let mut area = test_textarea("");
    area.field_mut().type_text("ab");
    area.input(Instant::now());

    area.increase_indent();

    let values: Vec<&str> = area.history().iter().map(|e| e.value.as_str()).collect();
    assert_eq!(values, vec!["    ab", "ab", ""]);
    assert!(area.input_deadline().is_none());
}

#[test]
fn test_undo_reverts_unflushed_typing() {
    let mut area = test_textarea("start");
    area.set_selection(Selection::collapsed(5));
    area.field_mut().type_text(" typed");
    area.input(Instant::now());

    assert!(area.undo());
    assert_eq!(area.value(), "start");
    assert!(area.redo());
    assert_eq!(area.value(), "start typed");
}

#[test]
fn test_input_without_change_records_nothing() {
    let mut area = test_textarea("same");
    area.input(Instant::now());
    assert!(!area.flush());
    assert_eq!(area.history().len(), 1);
}

// ========================================================================
// Field plumbing
// ========================================================================

#[test]
fn test_construction_collapses_selection() {
    let mut field = MemoryField::from_text("hello");
    field.set_selection(Selection::new(1, 4));
    let area = Textarea::new(field, &TextareaConfig::default()).unwrap();
    assert_eq!(area.selection(), Selection::collapsed(0));
}

#[test]
fn test_focus_and_blur_reach_field() {
    let mut area = test_textarea("");
    area.focus();
    assert!(area.field().is_focused());
    area.blur();
    assert!(!area.into_field().is_focused());
}

#[test]
fn test_unbound_key_is_not_handled() {
    let mut area = test_textarea("ab");
    assert!(!press(&mut area, "alt+tab"));
    assert_eq!(area.history().len(), 1);
}

#[test]
fn test_config_bindings_reach_textarea() {
    let config = TextareaConfig::from_yaml(
        "bindings:\n  - key: \"ctrl+] cmd+]\"\n    command: IndentLines\n",
    )
    .unwrap();
    let mut area = test_textarea_with("ab", &config, Selection::collapsed(0));
    assert!(press(&mut area, "ctrl+]"));
    assert!(press(&mut area, "cmd+]"));
    assert_eq!(area.value(), "        ab");
}
