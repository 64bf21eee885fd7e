use crate::kernel::services::ports::FileEntry;
use crate::kernel::workspace::{Layout, PaneId, TabId, WorkspaceAction, WorkspaceState};

fn pdf(id: &str) -> FileEntry {
    FileEntry::new(id, &format!("{id}.pdf"), "application/pdf")
}

fn open(state: &mut WorkspaceState, file: FileEntry, pane: PaneId) -> TabId {
    let id = TabId::generate();
    assert!(state.apply(WorkspaceAction::OpenFile {
        file,
        pane: Some(pane),
        new_tab_id: Some(id),
    }));
    id
}

fn tab_ids(state: &WorkspaceState, pane: PaneId) -> Vec<TabId> {
    state.pane(pane).tabs.iter().map(|t| t.id).collect()
}

#[test]
fn new_state_is_empty_single_layout() {
    let state = WorkspaceState::new();
    assert_eq!(state.layout, Layout::Single);
    assert_eq!(state.active_pane, PaneId::Left);
    assert!(state.pane(PaneId::Left).is_empty());
    assert!(state.pane(PaneId::Right).is_empty());
    assert!(state.linked_groups.is_empty());
}

#[test]
fn open_file_appends_and_activates_in_target_pane() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);

    assert_eq!(tab_ids(&state, PaneId::Left), vec![a, b]);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(b));

    let c = open(&mut state, pdf("c"), PaneId::Right);
    assert_eq!(state.active_pane, PaneId::Right);
    assert_eq!(state.active_tab_id(PaneId::Right), Some(c));
    assert_eq!(state.active_tab_id(PaneId::Left), Some(b));
}

#[test]
fn open_file_defaults_to_active_pane_and_generates_id() {
    let mut state = WorkspaceState::new();
    state.apply(WorkspaceAction::SetActivePane {
        pane: PaneId::Right,
    });
    assert!(state.apply(WorkspaceAction::OpenFile {
        file: pdf("a"),
        pane: None,
        new_tab_id: None,
    }));

    assert_eq!(state.pane(PaneId::Right).len(), 1);
    assert!(state.pane(PaneId::Left).is_empty());
    assert!(state.active_tab_id(PaneId::Right).is_some());
}

#[test]
fn same_file_opened_twice_gets_independent_tabs() {
    let mut state = WorkspaceState::new();
    let first = open(&mut state, pdf("a"), PaneId::Left);
    let second = open(&mut state, pdf("a"), PaneId::Left);

    assert_ne!(first, second);
    assert_eq!(state.pane(PaneId::Left).len(), 2);
}

#[test]
fn open_file_with_id_already_in_use_is_noop() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let before = state.clone();

    assert!(!state.apply(WorkspaceAction::OpenFile {
        file: pdf("b"),
        pane: Some(PaneId::Right),
        new_tab_id: Some(a),
    }));
    assert_eq!(state, before);
}

#[test]
fn reduce_leaves_previous_state_untouched() {
    let state = WorkspaceState::new();
    let next = state.reduce(WorkspaceAction::OpenFile {
        file: pdf("a"),
        pane: Some(PaneId::Left),
        new_tab_id: None,
    });

    assert!(state.pane(PaneId::Left).is_empty());
    assert_eq!(next.pane(PaneId::Left).len(), 1);
}

#[test]
fn close_active_tab_activates_last_remaining_tab() {
    let mut state = WorkspaceState::new();
    let t1 = open(&mut state, pdf("1"), PaneId::Left);
    let t2 = open(&mut state, pdf("2"), PaneId::Left);
    let t3 = open(&mut state, pdf("3"), PaneId::Left);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(t3));

    assert!(state.apply(WorkspaceAction::CloseTab {
        tab_id: t3,
        pane: PaneId::Left,
    }));
    assert_eq!(state.active_tab_id(PaneId::Left), Some(t2));
    assert_eq!(tab_ids(&state, PaneId::Left), vec![t1, t2]);
}

#[test]
fn close_active_tab_picks_last_tab_not_previously_active() {
    let mut state = WorkspaceState::new();
    let t1 = open(&mut state, pdf("1"), PaneId::Left);
    let _t2 = open(&mut state, pdf("2"), PaneId::Left);
    let t3 = open(&mut state, pdf("3"), PaneId::Left);
    state.apply(WorkspaceAction::SetActiveTab {
        tab_id: t1,
        pane: PaneId::Left,
    });

    state.apply(WorkspaceAction::CloseTab {
        tab_id: t1,
        pane: PaneId::Left,
    });
    assert_eq!(state.active_tab_id(PaneId::Left), Some(t3));
}

#[test]
fn close_inactive_tab_keeps_active_tab() {
    let mut state = WorkspaceState::new();
    let t1 = open(&mut state, pdf("1"), PaneId::Left);
    let t2 = open(&mut state, pdf("2"), PaneId::Left);

    state.apply(WorkspaceAction::CloseTab {
        tab_id: t1,
        pane: PaneId::Left,
    });
    assert_eq!(state.active_tab_id(PaneId::Left), Some(t2));
}

#[test]
fn close_sole_tab_clears_active() {
    let mut state = WorkspaceState::new();
    let t1 = open(&mut state, pdf("1"), PaneId::Right);

    state.apply(WorkspaceAction::CloseTab {
        tab_id: t1,
        pane: PaneId::Right,
    });
    assert_eq!(state.active_tab_id(PaneId::Right), None);
    assert!(state.pane(PaneId::Right).is_empty());
}

#[test]
fn close_tab_in_wrong_pane_is_noop() {
    let mut state = WorkspaceState::new();
    let t1 = open(&mut state, pdf("1"), PaneId::Left);
    let before = state.clone();

    assert!(!state.apply(WorkspaceAction::CloseTab {
        tab_id: t1,
        pane: PaneId::Right,
    }));
    assert_eq!(state, before);
}

#[test]
fn close_tab_leaves_group_and_disbands_pair() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Right);
    state.apply(WorkspaceAction::LinkFiles {
        file_id1: a,
        file_id2: b,
    });
    assert_eq!(state.linked_groups.len(), 1);

    state.apply(WorkspaceAction::CloseTab {
        tab_id: b,
        pane: PaneId::Right,
    });
    assert!(state.linked_groups.is_empty());
}

#[test]
fn close_tab_shrinks_larger_group() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);
    let c = open(&mut state, pdf("c"), PaneId::Right);
    state.apply(WorkspaceAction::LinkFiles {
        file_id1: a,
        file_id2: b,
    });
    state.apply(WorkspaceAction::LinkFiles {
        file_id1: b,
        file_id2: c,
    });

    state.apply(WorkspaceAction::CloseTab {
        tab_id: a,
        pane: PaneId::Left,
    });
    let group = state.linked_group(b).unwrap();
    assert_eq!(group.members.len(), 2);
    assert!(!group.contains(a));
}

#[test]
fn set_active_tab_sets_active_pane_too() {
    let mut state = WorkspaceState::new();
    let l = open(&mut state, pdf("l"), PaneId::Left);
    let _r = open(&mut state, pdf("r"), PaneId::Right);
    assert_eq!(state.active_pane, PaneId::Right);

    assert!(state.apply(WorkspaceAction::SetActiveTab {
        tab_id: l,
        pane: PaneId::Left,
    }));
    assert_eq!(state.active_pane, PaneId::Left);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(l));
}

#[test]
fn set_active_tab_rejects_tab_from_other_pane() {
    let mut state = WorkspaceState::new();
    let l = open(&mut state, pdf("l"), PaneId::Left);
    let r = open(&mut state, pdf("r"), PaneId::Right);
    let before = state.clone();

    assert!(!state.apply(WorkspaceAction::SetActiveTab {
        tab_id: l,
        pane: PaneId::Right,
    }));
    assert_eq!(state, before);
    assert_eq!(state.active_tab_id(PaneId::Right), Some(r));
}

#[test]
fn set_active_pane_only_changes_focus() {
    let mut state = WorkspaceState::new();
    open(&mut state, pdf("a"), PaneId::Left);
    let before = state.clone();

    assert!(state.apply(WorkspaceAction::SetActivePane {
        pane: PaneId::Right,
    }));
    assert_eq!(state.active_pane, PaneId::Right);
    assert_eq!(state.panes, before.panes);
    assert!(!state.apply(WorkspaceAction::SetActivePane {
        pane: PaneId::Right,
    }));
}

#[test]
fn split_screen_activates_right_and_is_idempotent() {
    let mut state = WorkspaceState::new();
    assert!(state.apply(WorkspaceAction::SplitScreen));
    assert_eq!(state.layout, Layout::Split);
    assert_eq!(state.active_pane, PaneId::Right);

    state.apply(WorkspaceAction::SetActivePane { pane: PaneId::Left });
    assert!(!state.apply(WorkspaceAction::SplitScreen));
    assert_eq!(state.active_pane, PaneId::Left);
}

#[test]
fn close_split_appends_right_tabs_after_left() {
    let mut state = WorkspaceState::new();
    let l1 = open(&mut state, pdf("l1"), PaneId::Left);
    let l2 = open(&mut state, pdf("l2"), PaneId::Left);
    state.apply(WorkspaceAction::SplitScreen);
    let r1 = open(&mut state, pdf("r1"), PaneId::Right);
    let r2 = open(&mut state, pdf("r2"), PaneId::Right);

    assert!(state.apply(WorkspaceAction::CloseSplit));
    assert_eq!(state.layout, Layout::Single);
    assert_eq!(state.active_pane, PaneId::Left);
    assert_eq!(tab_ids(&state, PaneId::Left), vec![l1, l2, r1, r2]);
    assert!(state.pane(PaneId::Right).is_empty());
    assert_eq!(state.active_tab_id(PaneId::Right), None);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(l2));
}

#[test]
fn close_split_keeps_linked_groups() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    state.apply(WorkspaceAction::SplitScreen);
    let b = open(&mut state, pdf("b"), PaneId::Right);
    state.apply(WorkspaceAction::LinkFiles {
        file_id1: a,
        file_id2: b,
    });
    let groups = state.linked_groups.clone();

    state.apply(WorkspaceAction::CloseSplit);
    assert_eq!(state.linked_groups, groups);
}

#[test]
fn split_then_close_split_round_trip() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Right);

    state.apply(WorkspaceAction::SplitScreen);
    state.apply(WorkspaceAction::CloseSplit);

    assert_eq!(state.layout, Layout::Single);
    assert_eq!(tab_ids(&state, PaneId::Left), vec![a, b]);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn reorder_tabs_splices_within_pane() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);
    let c = open(&mut state, pdf("c"), PaneId::Left);
    state.apply(WorkspaceAction::SetActivePane {
        pane: PaneId::Right,
    });

    assert!(state.apply(WorkspaceAction::ReorderTabs {
        pane: PaneId::Left,
        start_index: 0,
        end_index: 2,
    }));
    assert_eq!(tab_ids(&state, PaneId::Left), vec![b, c, a]);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(c));
    assert_eq!(state.active_pane, PaneId::Right);
}

#[test]
fn reorder_tabs_out_of_range_start_is_noop() {
    let mut state = WorkspaceState::new();
    open(&mut state, pdf("a"), PaneId::Left);
    let before = state.clone();

    assert!(!state.apply(WorkspaceAction::ReorderTabs {
        pane: PaneId::Left,
        start_index: 5,
        end_index: 0,
    }));
    assert_eq!(state, before);
}

#[test]
fn reorder_tabs_clamps_end_index() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);

    state.apply(WorkspaceAction::ReorderTabs {
        pane: PaneId::Left,
        start_index: 0,
        end_index: 99,
    });
    assert_eq!(tab_ids(&state, PaneId::Left), vec![b, a]);
}

#[test]
fn set_pdf_page_updates_only_named_tab() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Right);

    assert!(state.apply(WorkspaceAction::SetPdfPage { tab_id: b, page: 7 }));
    assert_eq!(state.tab(b).unwrap().pdf_page, Some(7));
    assert_eq!(state.tab(a).unwrap().pdf_page, None);
    assert_eq!(state.tab(a).unwrap().page(), 1);
}

#[test]
fn set_pdf_page_clamps_to_first_page() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);

    state.apply(WorkspaceAction::SetPdfPage { tab_id: a, page: 0 });
    assert_eq!(state.tab(a).unwrap().pdf_page, Some(1));
}

#[test]
fn set_pdf_page_unknown_tab_is_noop() {
    let mut state = WorkspaceState::new();
    open(&mut state, pdf("a"), PaneId::Left);
    let before = state.clone();

    assert!(!state.apply(WorkspaceAction::SetPdfPage {
        tab_id: TabId::generate(),
        page: 3,
    }));
    assert_eq!(state, before);
}

#[test]
fn open_two_then_move_to_right_without_split() {
    let mut state = WorkspaceState::new();
    let _a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);
    assert_eq!(state.pane(PaneId::Left).len(), 2);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(b));

    assert!(state.apply(WorkspaceAction::MoveTab {
        tab_id: b,
        source_pane: PaneId::Left,
        target_pane: PaneId::Right,
        index: None,
    }));
    assert_eq!(state.layout, Layout::Single);
    assert_eq!(tab_ids(&state, PaneId::Right), vec![b]);
    assert!(state.check_invariants().is_ok());
}

#[test]
fn move_active_tab_to_index_reactivates_last_source_tab() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);
    let c = open(&mut state, pdf("c"), PaneId::Left);
    let r = open(&mut state, pdf("r"), PaneId::Right);
    state.apply(WorkspaceAction::SetActiveTab {
        tab_id: b,
        pane: PaneId::Left,
    });

    assert!(state.apply(WorkspaceAction::MoveTab {
        tab_id: b,
        source_pane: PaneId::Left,
        target_pane: PaneId::Right,
        index: Some(0),
    }));
    assert_eq!(tab_ids(&state, PaneId::Left), vec![a, c]);
    assert_eq!(tab_ids(&state, PaneId::Right), vec![b, r]);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(c));
    assert_eq!(state.active_tab_id(PaneId::Right), Some(b));
    assert_eq!(state.active_pane, PaneId::Right);
}

#[test]
fn move_inactive_tab_keeps_source_active_tab() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);

    state.apply(WorkspaceAction::MoveTab {
        tab_id: a,
        source_pane: PaneId::Left,
        target_pane: PaneId::Right,
        index: None,
    });
    assert_eq!(state.active_tab_id(PaneId::Left), Some(b));
    assert_eq!(state.active_tab_id(PaneId::Right), Some(a));
}

#[test]
fn move_tab_missing_from_source_is_noop() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    open(&mut state, pdf("r"), PaneId::Right);
    let before = state.clone();

    assert!(!state.apply(WorkspaceAction::MoveTab {
        tab_id: a,
        source_pane: PaneId::Right,
        target_pane: PaneId::Left,
        index: Some(0),
    }));
    assert!(!state.apply(WorkspaceAction::MoveTab {
        tab_id: TabId::generate(),
        source_pane: PaneId::Left,
        target_pane: PaneId::Right,
        index: None,
    }));
    assert_eq!(state, before);
}

#[test]
fn move_tab_clamps_index_to_target_length() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let r = open(&mut state, pdf("r"), PaneId::Right);

    state.apply(WorkspaceAction::MoveTab {
        tab_id: a,
        source_pane: PaneId::Left,
        target_pane: PaneId::Right,
        index: Some(99),
    });
    assert_eq!(tab_ids(&state, PaneId::Right), vec![r, a]);
    assert!(state.pane(PaneId::Left).is_empty());
    assert_eq!(state.active_tab_id(PaneId::Left), None);
}

#[test]
fn move_tab_within_same_pane_reinserts() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);
    let c = open(&mut state, pdf("c"), PaneId::Left);

    assert!(state.apply(WorkspaceAction::MoveTab {
        tab_id: a,
        source_pane: PaneId::Left,
        target_pane: PaneId::Left,
        index: Some(99),
    }));
    assert_eq!(tab_ids(&state, PaneId::Left), vec![b, c, a]);
    assert_eq!(state.active_tab_id(PaneId::Left), Some(a));
    assert!(state.check_invariants().is_ok());
}

#[test]
fn move_tab_keeps_group_membership() {
    let mut state = WorkspaceState::new();
    let a = open(&mut state, pdf("a"), PaneId::Left);
    let b = open(&mut state, pdf("b"), PaneId::Left);
    state.apply(WorkspaceAction::LinkFiles {
        file_id1: a,
        file_id2: b,
    });

    state.apply(WorkspaceAction::MoveTab {
        tab_id: b,
        source_pane: PaneId::Left,
        target_pane: PaneId::Right,
        index: None,
    });
    assert_eq!(state.linked_tabs(a), vec![b]);
}

#[test]
fn action_names_round_trip_through_json() {
    let tab = TabId::generate();
    let json = serde_json::json!({
        "type": "MOVE_TAB",
        "tabId": tab,
        "sourcePane": "left",
        "targetPane": "right",
    });
    let action: WorkspaceAction = serde_json::from_value(json).unwrap();
    assert_eq!(
        action,
        WorkspaceAction::MoveTab {
            tab_id: tab,
            source_pane: PaneId::Left,
            target_pane: PaneId::Right,
            index: None,
        }
    );

    let split: WorkspaceAction = serde_json::from_str(r#"{ "type": "SPLIT_SCREEN" }"#).unwrap();
    assert_eq!(split, WorkspaceAction::SplitScreen);
}
