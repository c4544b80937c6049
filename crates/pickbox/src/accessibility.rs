//! Assistive technology integration through [AccessKit](https://accesskit.dev/).
//!
//! The widget exposes the standard combobox pattern: a `ComboBox` control
//! node that owns the value, expanded state, and active descendant, and a
//! `ListBox` node with one `ListBoxOption` child per option while the
//! list is open. Platform focus stays on the control; the highlighted
//! option is reported as the active descendant, so screen readers track
//! arrow-key movement without focus leaving the control.
//!
//! Node ids are fixed: one widget instance is one accessibility tree, so
//! the control and listbox get small constants and option nodes are
//! offset by their index.

use accesskit::{Action, Node, NodeId, Role, Tree, TreeUpdate};

use crate::model::{OptionSet, display_text};
use crate::state::SelectionSnapshot;

/// Root container node.
pub const ROOT_NODE: NodeId = NodeId(0);
/// The combobox control.
pub const CONTROL_NODE: NodeId = NodeId(1);
/// The option list, present only while open.
pub const LISTBOX_NODE: NodeId = NodeId(2);
/// The clear affordance, present only while clearable and selected.
pub const CLEAR_NODE: NodeId = NodeId(3);

const OPTION_NODE_BASE: u64 = 4;

/// The node id for the option at `index`.
pub fn option_node_id(index: usize) -> NodeId {
    NodeId(OPTION_NODE_BASE + index as u64)
}

/// Everything the tree builder needs from the widget, borrowed for the
/// duration of one update.
#[derive(Debug, Clone, Copy)]
pub struct AccessibleState<'a> {
    /// The current selection state.
    pub snapshot: SelectionSnapshot,
    /// The normalized option set.
    pub options: &'a OptionSet,
    /// The hidden label announced for the control and list.
    pub label: Option<&'a str>,
    /// Placeholder announced while nothing is selected.
    pub placeholder: &'a str,
    /// The control's current display text.
    pub value: &'a str,
    /// Whether the widget ignores input.
    pub disabled: bool,
    /// Whether the clear affordance is currently shown.
    pub clear_visible: bool,
}

fn control_node(state: &AccessibleState<'_>) -> Node {
    let mut node = Node::new(Role::ComboBox);
    if let Some(label) = state.label {
        node.set_label(label.to_string());
    }
    node.set_value(state.value.to_string());
    if state.snapshot.selected.is_none() {
        node.set_placeholder(state.placeholder.to_string());
    }
    node.set_expanded(state.snapshot.open);
    node.set_controls(vec![LISTBOX_NODE]);
    if state.disabled {
        node.set_disabled();
    } else {
        node.add_action(Action::Focus);
        node.add_action(Action::Click);
    }
    if state.snapshot.open
        && let Some(focused) = state.snapshot.focused
    {
        node.set_active_descendant(option_node_id(focused));
    }
    node
}

fn clear_node() -> Node {
    let mut node = Node::new(Role::Button);
    node.set_label("clear input");
    node.add_action(Action::Focus);
    node.add_action(Action::Click);
    node
}

fn listbox_node(state: &AccessibleState<'_>) -> Node {
    let mut node = Node::new(Role::ListBox);
    if let Some(label) = state.label {
        node.set_label(label.to_string());
    }
    node.set_children(
        (0..state.options.len())
            .map(option_node_id)
            .collect::<Vec<_>>(),
    );
    node
}

fn option_node(state: &AccessibleState<'_>, index: usize) -> Node {
    let mut node = Node::new(Role::ListBoxOption);
    if let Some(text) = state.options.get(index) {
        node.set_label(display_text(text));
    }
    node.set_selected(state.snapshot.selected == Some(index));
    node.set_position_in_set(index + 1);
    node.set_size_of_set(state.options.len());
    node.add_action(Action::Click);
    node
}

/// Build a full tree update for the current widget state.
///
/// The reported focus is the highlighted option while the list is open,
/// otherwise the control.
pub fn tree_update(state: &AccessibleState<'_>) -> TreeUpdate {
    let mut nodes: Vec<(NodeId, Node)> = Vec::new();

    let mut root_children = vec![CONTROL_NODE];
    if state.clear_visible {
        root_children.push(CLEAR_NODE);
    }
    if state.snapshot.open {
        root_children.push(LISTBOX_NODE);
    }
    let mut root = Node::new(Role::GenericContainer);
    root.set_children(root_children);
    nodes.push((ROOT_NODE, root));

    nodes.push((CONTROL_NODE, control_node(state)));
    if state.clear_visible {
        nodes.push((CLEAR_NODE, clear_node()));
    }
    if state.snapshot.open {
        nodes.push((LISTBOX_NODE, listbox_node(state)));
        for index in 0..state.options.len() {
            nodes.push((option_node_id(index), option_node(state, index)));
        }
    }

    let focus = match state.snapshot.focused {
        Some(index) if state.snapshot.open => option_node_id(index),
        _ => CONTROL_NODE,
    };

    TreeUpdate {
        nodes,
        tree: Some(Tree::new(ROOT_NODE)),
        focus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> OptionSet {
        OptionSet::from(["apple", "banana", "kiwi"])
    }

    fn state<'a>(options: &'a OptionSet, snapshot: SelectionSnapshot) -> AccessibleState<'a> {
        AccessibleState {
            snapshot,
            options,
            label: Some("Fruit"),
            placeholder: "Please choose an option",
            value: "Please choose an option",
            disabled: false,
            clear_visible: false,
        }
    }

    fn node_for(update: &TreeUpdate, id: NodeId) -> Option<&Node> {
        update.nodes.iter().find(|(n, _)| *n == id).map(|(_, n)| n)
    }

    #[test]
    fn test_closed_tree_has_no_listbox() {
        let opts = options();
        let update = tree_update(&state(&opts, SelectionSnapshot::default()));
        assert!(node_for(&update, CONTROL_NODE).is_some());
        assert!(node_for(&update, LISTBOX_NODE).is_none());
        assert_eq!(update.focus, CONTROL_NODE);
    }

    #[test]
    fn test_open_tree_lists_every_option() {
        let opts = options();
        let snapshot = SelectionSnapshot {
            open: true,
            focused: Some(1),
            selected: Some(2),
            previous_selected: None,
        };
        let update = tree_update(&state(&opts, snapshot));

        let listbox = node_for(&update, LISTBOX_NODE).unwrap();
        assert_eq!(listbox.role(), Role::ListBox);
        for index in 0..opts.len() {
            assert!(node_for(&update, option_node_id(index)).is_some());
        }
        assert_eq!(update.focus, option_node_id(1));

        let control = node_for(&update, CONTROL_NODE).unwrap();
        assert_eq!(control.active_descendant(), Some(option_node_id(1)));
    }

    #[test]
    fn test_selected_option_is_marked() {
        let opts = options();
        let snapshot = SelectionSnapshot {
            open: true,
            focused: None,
            selected: Some(0),
            previous_selected: None,
        };
        let update = tree_update(&state(&opts, snapshot));
        let selected = node_for(&update, option_node_id(0)).unwrap();
        let other = node_for(&update, option_node_id(1)).unwrap();
        assert_eq!(selected.is_selected(), Some(true));
        assert_eq!(other.is_selected(), Some(false));
    }

    #[test]
    fn test_clear_affordance_appears_in_tree() {
        let opts = options();
        let mut st = state(&opts, SelectionSnapshot::default());
        st.clear_visible = true;
        let update = tree_update(&st);
        let clear = node_for(&update, CLEAR_NODE).unwrap();
        assert_eq!(clear.role(), Role::Button);
    }

    #[test]
    fn test_placeholder_only_without_selection() {
        let opts = options();
        let update = tree_update(&state(&opts, SelectionSnapshot::default()));
        let control = node_for(&update, CONTROL_NODE).unwrap();
        assert!(control.placeholder().is_some());

        let snapshot = SelectionSnapshot {
            selected: Some(1),
            ..SelectionSnapshot::default()
        };
        let update = tree_update(&state(&opts, snapshot));
        let control = node_for(&update, CONTROL_NODE).unwrap();
        assert!(control.placeholder().is_none());
    }
}
