//! End-to-end interaction tests for the picker: full keyboard and
//! pointer flows driven through the public API, the way an embedding
//! view would drive them.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use pickbox::focus::FocusHost;
use pickbox::{
    Key, KeyPressEvent, MouseButton, PointerPressEvent, SelectBox, SelectBoxPart,
};

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[derive(Default)]
struct TestView {
    control_focus_requests: usize,
}

impl FocusHost for TestView {
    fn focus_control(&mut self) {
        self.control_focus_requests += 1;
    }
}

fn fruit_select() -> SelectBox {
    init_tracing();
    SelectBox::new().with_options(["Kiwi", " Apple ", "banana"])
}

fn key(select: &mut SelectBox, view: &mut TestView, key: Key) -> bool {
    let mut event = KeyPressEvent::from_key(key);
    select.handle_key_press(&mut event, view)
}

fn click(select: &mut SelectBox, view: &mut TestView, part: SelectBoxPart) -> bool {
    let mut event = PointerPressEvent::primary();
    select.handle_pointer_press(part, &mut event, view)
}

fn record_changes(select: &mut SelectBox) -> Arc<Mutex<Vec<String>>> {
    let emitted: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&emitted);
    select.changed.connect(move |value| {
        sink.lock().unwrap().push(value.clone());
    });
    emitted
}

#[test]
fn options_are_trimmed_lowercased_and_sorted() {
    let select = fruit_select();
    let entries: Vec<_> = select.options().iter().collect();
    assert_eq!(entries, ["apple", "banana", "kiwi"]);
}

#[test]
fn external_value_selects_matching_option() {
    let mut select = fruit_select();
    select.set_value(Some(" BANANA  "));
    assert_eq!(select.selected_index(), Some(1));
    assert_eq!(select.value(), Some("banana"));
    assert_eq!(select.display_text(), "Banana");
}

#[test]
fn unmatched_or_empty_value_selects_nothing() {
    let mut select = fruit_select();
    for value in [Some("mango"), Some(""), None] {
        select.set_value(value);
        assert_eq!(select.selected_index(), None);
        assert_eq!(select.display_text(), "Please choose an option");
    }
}

#[test]
fn pointer_toggle_is_a_period_two_cycle() {
    let mut select = fruit_select();
    let mut view = TestView::default();

    for _ in 0..2 {
        click(&mut select, &mut view, SelectBoxPart::Control);
        assert!(select.is_open());
        assert_eq!(select.focused_index(), None);
        click(&mut select, &mut view, SelectBoxPart::Control);
        assert!(!select.is_open());
    }
}

#[test]
fn arrow_down_opens_with_selection_highlighted() {
    let mut select = fruit_select();
    select.set_value(Some("kiwi"));
    let mut view = TestView::default();

    assert!(key(&mut select, &mut view, Key::ArrowDown));
    assert!(select.is_open());
    assert_eq!(select.focused_index(), Some(2));
}

#[test]
fn home_and_end_open_at_the_endpoints() {
    let mut select = fruit_select();
    let mut view = TestView::default();

    key(&mut select, &mut view, Key::Home);
    assert_eq!(select.focused_index(), Some(0));
    key(&mut select, &mut view, Key::Escape);

    key(&mut select, &mut view, Key::End);
    assert_eq!(select.focused_index(), Some(2));
}

#[test]
fn arrows_wrap_around_the_list() {
    let mut select = fruit_select();
    let mut view = TestView::default();

    // ArrowDown with nothing selected opens at the top; each further
    // press steps and wraps.
    key(&mut select, &mut view, Key::ArrowDown);
    assert_eq!(select.focused_index(), Some(0));
    let mut seen = Vec::new();
    for _ in 0..3 {
        key(&mut select, &mut view, Key::ArrowDown);
        seen.push(select.focused_index());
    }
    assert_eq!(seen, [Some(1), Some(2), Some(0)]);

    // ArrowUp opens at the bottom and wraps the other way.
    key(&mut select, &mut view, Key::Escape);
    key(&mut select, &mut view, Key::ArrowUp);
    assert_eq!(select.focused_index(), Some(2));
    key(&mut select, &mut view, Key::ArrowUp);
    assert_eq!(select.focused_index(), Some(1));
    key(&mut select, &mut view, Key::ArrowUp);
    assert_eq!(select.focused_index(), Some(0));
    key(&mut select, &mut view, Key::ArrowUp);
    assert_eq!(select.focused_index(), Some(2));
}

#[test]
fn enter_commits_and_emits_exactly_once() {
    let mut select = fruit_select();
    let mut view = TestView::default();
    let emitted = record_changes(&mut select);

    key(&mut select, &mut view, Key::ArrowDown); // open at apple
    key(&mut select, &mut view, Key::ArrowDown); // banana
    key(&mut select, &mut view, Key::ArrowDown); // kiwi
    key(&mut select, &mut view, Key::Enter);

    assert_eq!(&*emitted.lock().unwrap(), &["kiwi".to_string()]);
    assert!(!select.is_open());
    assert_eq!(select.selected_index(), Some(2));
    assert_eq!(view.control_focus_requests, 1);
}

#[test]
fn tab_commits_while_open_and_propagates_while_closed() {
    let mut select = fruit_select();
    let mut view = TestView::default();
    let emitted = record_changes(&mut select);

    // Closed: Tab is not ours.
    let mut event = KeyPressEvent::from_key(Key::Tab);
    assert!(!select.handle_key_press(&mut event, &mut view));
    assert!(!event.base.is_accepted());

    // Open with a highlight: Tab commits.
    key(&mut select, &mut view, Key::Home);
    let mut event = KeyPressEvent::from_key(Key::Tab);
    assert!(select.handle_key_press(&mut event, &mut view));
    assert_eq!(&*emitted.lock().unwrap(), &["apple".to_string()]);
}

#[test]
fn commit_key_with_nothing_highlighted_closes_silently() {
    let mut select = fruit_select();
    let mut view = TestView::default();
    let emitted = record_changes(&mut select);

    click(&mut select, &mut view, SelectBoxPart::Control);
    key(&mut select, &mut view, Key::Space);

    assert!(!select.is_open());
    assert!(emitted.lock().unwrap().is_empty());
    assert_eq!(select.selected_index(), None);
}

#[test]
fn escape_abandons_the_highlight() {
    let mut select = fruit_select();
    select.set_value(Some("apple"));
    let mut view = TestView::default();

    key(&mut select, &mut view, Key::ArrowDown);
    key(&mut select, &mut view, Key::ArrowDown);
    key(&mut select, &mut view, Key::Escape);

    assert!(!select.is_open());
    assert_eq!(select.selected_index(), Some(0));
    assert_eq!(select.focused_index(), None);
}

#[test]
fn typeahead_jumps_to_prefix_match() {
    let mut select = fruit_select();
    let mut view = TestView::default();

    key(&mut select, &mut view, Key::B);
    assert!(select.is_open());
    assert_eq!(select.focused_index(), Some(1));

    // Works while already open too.
    key(&mut select, &mut view, Key::K);
    assert_eq!(select.focused_index(), Some(2));

    // A miss changes nothing but is still consumed.
    let mut event = KeyPressEvent::from_key(Key::Z);
    assert!(select.handle_key_press(&mut event, &mut view));
    assert_eq!(select.focused_index(), Some(2));
}

#[test]
fn pointer_commit_on_option_row() {
    let mut select = fruit_select();
    let mut view = TestView::default();
    let emitted = record_changes(&mut select);

    click(&mut select, &mut view, SelectBoxPart::Control);
    click(&mut select, &mut view, SelectBoxPart::Option(1));

    assert_eq!(&*emitted.lock().unwrap(), &["banana".to_string()]);
    assert!(!select.is_open());
}

#[test]
fn secondary_button_is_ignored() {
    let mut select = fruit_select();
    let mut view = TestView::default();

    let mut event = PointerPressEvent::new(MouseButton::Right);
    assert!(!select.handle_pointer_press(SelectBoxPart::Control, &mut event, &mut view));
    assert!(!select.is_open());
}

#[test]
fn clear_resets_without_emitting() {
    let mut select = fruit_select().with_clearable(true);
    select.set_value(Some("banana"));
    let mut view = TestView::default();
    let emitted = record_changes(&mut select);

    assert!(select.clear_affordance_visible());
    click(&mut select, &mut view, SelectBoxPart::Clear);

    assert_eq!(select.selected_index(), None);
    assert!(emitted.lock().unwrap().is_empty());
    assert_eq!(view.control_focus_requests, 1);
    assert!(select.placeholder_fading());
    assert!(!select.clear_affordance_visible());
}

#[test]
fn non_clearable_widget_has_no_clear_affordance() {
    let mut select = fruit_select();
    select.set_value(Some("banana"));
    let mut view = TestView::default();

    assert!(!select.clear_affordance_visible());
    assert!(!click(&mut select, &mut view, SelectBoxPart::Clear));
    assert_eq!(select.selected_index(), Some(1));
}

#[test]
fn disabled_widget_ignores_all_interaction() {
    let mut select = fruit_select().with_disabled(true);
    let mut view = TestView::default();
    let emitted = record_changes(&mut select);

    assert!(!click(&mut select, &mut view, SelectBoxPart::Control));
    assert!(!select.is_open());

    // Keys are swallowed so the page does not scroll, but do nothing.
    assert!(key(&mut select, &mut view, Key::ArrowDown));
    assert!(!select.is_open());
    assert!(emitted.lock().unwrap().is_empty());
}

#[test]
fn replacing_options_rereconciles_the_value() {
    let mut select = fruit_select();
    select.set_value(Some("kiwi"));
    assert_eq!(select.selected_index(), Some(2));

    let raw: Vec<String> = ["cherry", "KIWI"].iter().map(|s| s.to_string()).collect();
    select.set_options(&raw);
    assert_eq!(select.selected_index(), Some(1));
    assert_eq!(select.value(), Some("kiwi"));

    let raw: Vec<String> = vec!["cherry".to_string()];
    select.set_options(&raw);
    assert_eq!(select.selected_index(), None);
}

#[test]
fn state_change_notifications_fire_per_transition() {
    let mut select = fruit_select();
    let mut view = TestView::default();
    let transitions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&transitions);
    select.state_changed().connect(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    key(&mut select, &mut view, Key::ArrowDown); // open
    key(&mut select, &mut view, Key::ArrowDown); // move
    key(&mut select, &mut view, Key::Enter); // commit

    assert_eq!(transitions.load(Ordering::SeqCst), 3);
}

#[cfg(feature = "accessibility")]
mod accessibility {
    use super::*;
    use pickbox::accessibility::{CONTROL_NODE, LISTBOX_NODE, option_node_id};

    #[test]
    fn open_list_reports_active_descendant() {
        let mut select = fruit_select().with_label("Fruit");
        select.set_value(Some("banana"));
        let mut view = TestView::default();

        key(&mut select, &mut view, Key::ArrowDown);
        let update = select.accessibility_update();

        assert_eq!(update.focus, option_node_id(1));
        let (_, control) = update
            .nodes
            .iter()
            .find(|(id, _)| *id == CONTROL_NODE)
            .unwrap();
        assert_eq!(control.active_descendant(), Some(option_node_id(1)));
        assert!(update.nodes.iter().any(|(id, _)| *id == LISTBOX_NODE));
    }

    #[test]
    fn closed_tree_focuses_the_control() {
        let select = fruit_select();
        let update = select.accessibility_update();
        assert_eq!(update.focus, CONTROL_NODE);
        assert!(!update.nodes.iter().any(|(id, _)| *id == LISTBOX_NODE));
    }
}
