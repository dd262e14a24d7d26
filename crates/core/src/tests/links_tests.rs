// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Extent, KeyedLinkError, KeyedLinks, Links, ServiceId};

#[test]
fn test_link_is_visible_from_both_ends() {
    let mut links: Links<u32, char> = Links::new();

    assert!(links.link(1, 'a'));
    assert!(!links.link(1, 'a'));
    links.link(2, 'a');

    assert!(links.contains(1, 'a'));
    assert_eq!(links.rights_of(1).collect::<Vec<char>>(), vec!['a']);
    assert_eq!(links.lefts_of('a').collect::<Vec<u32>>(), vec![1, 2]);
    assert_eq!(links.left_count('a'), 2);
}

#[test]
fn test_unlink_clears_both_ends() {
    let mut links: Links<u32, char> = Links::new();
    links.link(1, 'a');

    assert!(links.unlink(1, 'a'));
    assert!(!links.unlink(1, 'a'));

    assert!(links.is_empty());
    assert_eq!(links.lefts_of('a').count(), 0);
}

#[test]
fn test_detach_left_returns_released_ends() {
    let mut links: Links<u32, char> = Links::new();
    links.link(1, 'a');
    links.link(1, 'b');
    links.link(2, 'b');

    let released: Vec<char> = links.detach_left(1);

    assert_eq!(released, vec!['a', 'b']);
    assert_eq!(links.lefts_of('b').collect::<Vec<u32>>(), vec![2]);
    assert_eq!(links.pairs().count(), 1);
}

#[test]
fn test_keyed_links_enforce_single_owner_and_unique_key() {
    let mut keyed: KeyedLinks<u32, &str, u64> = KeyedLinks::new();

    assert_eq!(keyed.insert(1, "k1", 10), Ok(true));
    assert_eq!(keyed.insert(1, "k1", 10), Ok(false));
    assert_eq!(keyed.insert(1, "k1", 11), Err(KeyedLinkError::KeyTaken));
    assert_eq!(keyed.insert(2, "k9", 10), Err(KeyedLinkError::OwnedElsewhere));

    assert_eq!(keyed.owner_of(10), Some(1));
    assert_eq!(keyed.len(1), 1);
}

#[test]
fn test_keyed_links_rekey_moves_value() {
    let mut keyed: KeyedLinks<u32, &str, u64> = KeyedLinks::new();
    keyed.insert(1, "old", 10).unwrap();
    keyed.insert(1, "other", 11).unwrap();

    assert_eq!(keyed.rekey(1, &"old", "other"), Err(KeyedLinkError::KeyTaken));
    assert_eq!(keyed.rekey(1, &"old", "new"), Ok(true));

    assert_eq!(keyed.get(1, &"old"), None);
    assert_eq!(keyed.get(1, &"new"), Some(10));
    assert_eq!(keyed.remove(1, &"new"), Some(10));
    assert_eq!(keyed.owner_of(10), None);
}

#[test]
fn test_extent_ids_are_never_reused() {
    let mut extent: Extent<ServiceId, &str> = Extent::new();
    let first: ServiceId = extent.insert("first").unwrap();
    let second: ServiceId = extent.insert("second").unwrap();

    extent.take(second).unwrap();
    let third: ServiceId = extent.insert("third").unwrap();

    assert_ne!(second, third);
    assert_eq!(extent.len(), 2);
    assert_eq!(extent.nth(0), Some((first, &"first")));
    assert_eq!(extent.values().copied().collect::<Vec<&str>>(), vec!["first", "third"]);
}
