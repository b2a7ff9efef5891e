use std::collections::BTreeMap;

use client_types::player_list::RosterEntry;

use super::layout::PlayerListRow;

/// Players that share a group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerListGroup {
    pub name: String,
    /// lowest rank of all members
    pub rank: u8,
    pub members: Vec<RosterEntry>,
}

/// Groups are ordered by the lowest rank of their members, then by name.
/// Inside a group players are ordered by list name.
pub fn groups(roster: &[RosterEntry]) -> Vec<PlayerListGroup> {
    let mut groups: BTreeMap<&str, PlayerListGroup> = BTreeMap::new();
    for entry in roster {
        let group = groups
            .entry(entry.group_name.as_str())
            .or_insert_with(|| PlayerListGroup {
                name: entry.group_name.clone(),
                rank: entry.group_rank,
                members: Vec::new(),
            });
        group.rank = group.rank.min(entry.group_rank);
        group.members.push(entry.clone());
    }

    let mut groups: Vec<_> = groups.into_values().collect();
    groups.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));
    for group in &mut groups {
        group
            .members
            .sort_by_key(|entry| entry.list_name.to_lowercase());
    }
    groups
}

/// A header row per group, followed by its players.
pub fn rows(groups: &[PlayerListGroup]) -> Vec<PlayerListRow> {
    groups
        .iter()
        .flat_map(|group| {
            std::iter::once(PlayerListRow::group_header(&group.name)).chain(
                group
                    .members
                    .iter()
                    .map(|entry| PlayerListRow::player(&entry.name, &entry.list_name)),
            )
        })
        .collect()
}
