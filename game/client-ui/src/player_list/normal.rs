use client_types::player_list::RosterEntry;

use super::layout::PlayerListRow;

/// Player names only, alphabetically.
pub fn sorted_names(roster: &[RosterEntry]) -> Vec<String> {
    let mut names: Vec<_> = roster.iter().map(|entry| entry.name.clone()).collect();
    names.sort_by_key(|name| name.to_lowercase());
    names.dedup();
    names
}

pub fn rows(names: &[String]) -> Vec<PlayerListRow> {
    names
        .iter()
        .map(|name| PlayerListRow::player(name, name))
        .collect()
}

#[cfg(test)]
mod test {
    use client_types::player_list::RosterEntry;

    use super::{rows, sorted_names};

    #[test]
    fn sorted_case_insensitive() {
        let names = sorted_names(&[
            RosterEntry::new("charlie"),
            RosterEntry::new("Alice"),
            RosterEntry::new("bob"),
            RosterEntry::new("Alice"),
        ]);
        assert_eq!(names, vec!["Alice", "bob", "charlie"]);
        let rows = rows(&names);
        let texts: Vec<_> = rows.iter().map(|row| row.text.as_str()).collect();
        assert_eq!(texts, vec!["Alice", "bob", "charlie"]);
    }
}
