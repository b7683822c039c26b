#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Hierarchical area selection.
//!
//! Tracks a set of selected member tokens over a two-level hierarchy
//! (region group → area token) and keeps group-level and token-level state
//! consistent. Group status is never stored: it is always derived from the
//! selected set through [`derive_group_status`], so a token shared by
//! several groups can never leave one of them stale.
//!
//! Unknown group ids, tokens, and names are ignored rather than rejected —
//! the surrounding UI and the catalog can momentarily disagree, and a
//! toggle against stale state must not fail.

use std::collections::BTreeSet;

use nightmap_area_models::{AreaGroup, GroupStatus, SelectMode};

/// Derives a group's selection status from the selected-token set.
///
/// `Full` when every member token is selected, `Partial` when at least one
/// but not all are, `None` otherwise. This is the only place group status is
/// computed; callers must not re-derive it inline.
#[must_use]
pub fn derive_group_status(group: &AreaGroup, selected: &BTreeSet<String>) -> GroupStatus {
    let member_count = group.keywords.len();
    let selected_count = group
        .keywords
        .iter()
        .filter(|token| selected.contains(token.as_str()))
        .count();

    if selected_count == 0 || member_count == 0 {
        GroupStatus::None
    } else if selected_count == member_count {
        GroupStatus::Full
    } else {
        GroupStatus::Partial
    }
}

/// Selection state over a group hierarchy.
///
/// Owns the group list, the selected-token set, and the select mode. All
/// mutations go through the toggle/apply operations; every operation
/// reports whether it changed the selected set so the caller can decide
/// whether to notify listeners.
#[derive(Debug, Clone)]
pub struct SelectionModel {
    groups: Vec<AreaGroup>,
    /// Tokens the model will accept from token-level toggles. Group member
    /// tokens plus whatever the owner registers (e.g. catalog names).
    universe: BTreeSet<String>,
    selected: BTreeSet<String>,
    mode: SelectMode,
}

impl SelectionModel {
    /// Creates an empty selection over the given groups.
    #[must_use]
    pub fn new(groups: Vec<AreaGroup>, mode: SelectMode) -> Self {
        let universe = groups
            .iter()
            .flat_map(|group| group.keywords.iter().cloned())
            .collect();
        Self {
            groups,
            universe,
            selected: BTreeSet::new(),
            mode,
        }
    }

    /// Registers extra tokens as toggleable (e.g. catalog records that
    /// belong to no group).
    pub fn register_tokens<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.universe.extend(tokens);
    }

    /// Returns the select mode.
    #[must_use]
    pub const fn mode(&self) -> SelectMode {
        self.mode
    }

    /// Returns the groups this selection ranges over.
    #[must_use]
    pub fn groups(&self) -> &[AreaGroup] {
        &self.groups
    }

    /// Returns the currently selected tokens.
    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    /// Toggles an entire group.
    ///
    /// If every member token is currently selected the group is deselected
    /// (all members removed). Otherwise it is selected as a unit: unioned
    /// into the selection in multiple mode, or replacing the selection in
    /// single mode. Unknown group ids are ignored.
    ///
    /// Returns whether the selected set changed.
    pub fn toggle_group(&mut self, group_id: u32) -> bool {
        let Some(group) = self.groups.iter().find(|g| g.group_id == group_id) else {
            log::debug!("toggle_group: unknown group id {group_id}, ignoring");
            return false;
        };

        let has_all = group
            .keywords
            .iter()
            .all(|token| self.selected.contains(token.as_str()));

        if has_all {
            // Deselect-all. Tokens shared with other selected groups go too;
            // their statuses degrade to partial/none on the next derivation.
            let mut changed = false;
            for token in &group.keywords {
                changed |= self.selected.remove(token.as_str());
            }
            changed
        } else {
            let keywords: Vec<String> = group.keywords.clone();
            match self.mode {
                SelectMode::Multiple => {
                    let mut changed = false;
                    for token in keywords {
                        changed |= self.selected.insert(token);
                    }
                    changed
                }
                SelectMode::Single => {
                    let replacement: BTreeSet<String> = keywords.into_iter().collect();
                    let changed = self.selected != replacement;
                    self.selected = replacement;
                    changed
                }
            }
        }
    }

    /// Toggles a single token.
    ///
    /// Removes the token when selected; otherwise adds it, clearing the rest
    /// of the selection first in single mode. Tokens outside the known
    /// universe are ignored.
    ///
    /// Returns whether the selected set changed.
    pub fn toggle_token(&mut self, token: &str) -> bool {
        if self.selected.remove(token) {
            return true;
        }
        if !self.universe.contains(token) {
            log::debug!("toggle_token: unknown token {token:?}, ignoring");
            return false;
        }

        if self.mode == SelectMode::Single {
            self.selected.clear();
        }
        self.selected.insert(token.to_owned());
        true
    }

    /// Applies a recommended area by group name.
    ///
    /// Expands the named group into its member tokens and unions them into
    /// the selection (multiple mode) or replaces the selection with them
    /// (single mode). Unknown names are ignored.
    ///
    /// Returns whether the selected set changed.
    pub fn apply_recommended(&mut self, name: &str) -> bool {
        let Some(group) = self.groups.iter().find(|g| g.name == name) else {
            log::debug!("apply_recommended: unknown area name {name:?}, ignoring");
            return false;
        };
        let keywords: Vec<String> = group.keywords.clone();

        match self.mode {
            SelectMode::Multiple => {
                let mut changed = false;
                for token in keywords {
                    changed |= self.selected.insert(token);
                }
                changed
            }
            SelectMode::Single => {
                let replacement: BTreeSet<String> = keywords.into_iter().collect();
                let changed = self.selected != replacement;
                self.selected = replacement;
                changed
            }
        }
    }

    /// Replaces the selection with exactly the given tokens.
    ///
    /// This backs "select all visible": the caller passes the member tokens
    /// of the currently visible subset and the selection becomes that set,
    /// dropping anything previously selected. Tokens outside the known
    /// universe are dropped.
    ///
    /// Returns whether the selected set changed.
    pub fn select_exactly<I>(&mut self, tokens: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        let replacement: BTreeSet<String> = tokens
            .into_iter()
            .filter(|token| {
                let known = self.universe.contains(token.as_str());
                if !known {
                    log::debug!("select_exactly: unknown token {token:?}, dropping");
                }
                known
            })
            .collect();

        let changed = self.selected != replacement;
        self.selected = replacement;
        changed
    }

    /// Empties the selection.
    ///
    /// Returns whether the selected set changed.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Derived status for one group, `None` for unknown ids.
    #[must_use]
    pub fn group_status(&self, group_id: u32) -> Option<GroupStatus> {
        self.groups
            .iter()
            .find(|g| g.group_id == group_id)
            .map(|group| derive_group_status(group, &self.selected))
    }

    /// Derived status for every group, in group-list order.
    ///
    /// Always a full pass, so groups sharing member tokens stay mutually
    /// consistent no matter which operation ran last.
    #[must_use]
    pub fn statuses(&self) -> Vec<(u32, GroupStatus)> {
        self.groups
            .iter()
            .map(|group| (group.group_id, derive_group_status(group, &self.selected)))
            .collect()
    }
}
