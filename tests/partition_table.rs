use {
    partitions::{DefaultHasher, Hasher, Kind, OwnershipRegistry, PartitionTable, PartitionTableBuilder},
    proptest::prelude::*,
    std::sync::atomic::{AtomicBool, Ordering},
};

#[derive(Debug, Clone, PartialEq)]
struct TestMember {
    name: String,
    port: u16,
}

impl TestMember {
    fn new(name: &str, port: u16) -> Self {
        Self {
            name: name.to_string(),
            port,
        }
    }
}

struct FixedHasher(u64);

impl Hasher for FixedHasher {
    fn sum64(&self, _bytes: &[u8]) -> u64 {
        self.0
    }
}

#[test]
fn construction() {
    for count in [1, 2, 7, 271] {
        let table = PartitionTable::<TestMember, _>::new(count, Kind::Primary, DefaultHasher)
            .expect("Failed to create partition table");
        assert_eq!(table.count(), count);
        assert_eq!(table.iter().count() as u64, count);
        for id in 0..count {
            let part = table.partition_by_id(id);
            assert_eq!(part.id(), id);
            assert_eq!(part.kind(), Kind::Primary);
            assert!(table.owners_by_id(id).is_empty());
        }
    }
}

#[test]
fn fixed_hash_routing() {
    for (h, expected) in [(0, 0), (1, 1), (4, 0), (7, 3)] {
        let table = PartitionTable::<TestMember, _>::new(4, Kind::Primary, FixedHasher(h)).unwrap();
        assert_eq!(table.partition_id_by_hkey(h), expected);
    }
}

#[test]
fn replace_owner_list() {
    let table = PartitionTable::new(4, Kind::Backup, DefaultHasher).unwrap();
    let a = TestMember::new("member-a", 3320);
    let b = TestMember::new("member-b", 3320);
    let c = TestMember::new("member-c", 3321);

    table.set_owners(2, vec![a.clone(), b.clone()]);
    assert_eq!(*table.owners_by_id(2), vec![a, b]);

    table.set_owners(2, vec![c.clone()]);
    assert_eq!(*table.owners_by_id(2), vec![c]);

    // Other partitions are untouched.
    for id in [0, 1, 3] {
        assert!(table.owners_by_id(id).is_empty());
    }
}

#[test]
fn owner_matches_lookup_composition() {
    let table = PartitionTableBuilder::new().with_count(16).build().unwrap();
    for id in 0..16 {
        table.set_owners(id, vec![TestMember::new(&format!("node{id}"), 3320)]);
    }

    for key in ["alpha", "beta", "gamma", "delta"] {
        let (owner, hkey) = table.owner("dmap.users", key);
        assert_eq!(hkey, table.hkey("dmap.users", key));
        assert_eq!(owner.as_ref(), table.partition_by_hkey(hkey).owners().first());
        let expected = format!("node{}", table.partition_id_by_hkey(hkey));
        assert_eq!(owner.map(|m| m.name), Some(expected));
    }
}

#[test]
fn primary_and_backup_tables() {
    let primary = PartitionTable::new(32, Kind::Primary, DefaultHasher).unwrap();
    let backup = PartitionTable::new(32, Kind::Backup, DefaultHasher).unwrap();

    let hkey = primary.hkey("sessions", "abc");
    assert_eq!(hkey, backup.hkey("sessions", "abc"));
    let id = primary.partition_id_by_hkey(hkey);
    assert_eq!(id, backup.partition_id_by_hkey(hkey));

    primary.set_owners(id, vec![TestMember::new("node1", 1)]);
    assert!(backup.owners_by_id(id).is_empty());
    backup.set_owners(id, vec![TestMember::new("node2", 2), TestMember::new("node3", 3)]);
    assert_eq!(primary.owners_by_id(id).len(), 1);
    assert_eq!(backup.owners_by_id(id).len(), 2);

    let registry = OwnershipRegistry::<TestMember, _>::new(32, DefaultHasher).unwrap();
    assert_eq!(registry.partition_id("sessions", "abc"), id);
}

#[test]
fn no_torn_reads() {
    // Every published list has length `n` and consists only of the value `n`,
    // so a reader can tell whether it observed a whole snapshot.
    fn snapshot(n: u16) -> Vec<TestMember> {
        (0..n).map(|_| TestMember::new("gen", n)).collect()
    }

    let table = PartitionTable::new(1, Kind::Backup, DefaultHasher).unwrap();
    table.set_owners(0, snapshot(1));
    let done = AtomicBool::new(false);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    let owners = table.owners_by_id(0);
                    let n = owners.len();
                    assert!((1..=8).contains(&n), "unexpected list length {n}");
                    assert!(owners.iter().all(|m| m.port as usize == n), "torn read");
                }
            });
        }

        s.spawn(|| {
            for i in 0..20_000u32 {
                table.set_owners(0, snapshot((i % 8 + 1) as u16));
            }
            done.store(true, Ordering::Release);
        });
    });
}

proptest! {
    #[test]
    fn partition_id_in_range(count in 1u64..10_000, hkey in any::<u64>()) {
        let table = PartitionTable::<TestMember, _>::new(count, Kind::Primary, DefaultHasher).unwrap();
        let id = table.partition_id_by_hkey(hkey);
        prop_assert!(id < count);
        prop_assert_eq!(id, hkey % count);
        prop_assert_eq!(table.partition_by_hkey(hkey).id(), id);
    }

    #[test]
    fn routing_is_deterministic(count in 1u64..1_000, namespace in ".{0,32}", key in ".{0,200}") {
        let table = PartitionTable::<TestMember, _>::new(count, Kind::Backup, DefaultHasher).unwrap();
        let hkey = table.hkey(&namespace, &key);
        prop_assert_eq!(hkey, table.hkey(&namespace, &key));
        prop_assert_eq!(hkey, DefaultHasher.sum64(format!("{namespace}{key}").as_bytes()));
        prop_assert_eq!(table.partition_id_by_hkey(hkey), hkey % count);

        // A fresh table with the same configuration routes identically.
        let other = PartitionTable::<TestMember, _>::new(count, Kind::Primary, DefaultHasher).unwrap();
        prop_assert_eq!(other.hkey(&namespace, &key), hkey);
    }
}
