use std::collections::BTreeMap;

use host_tree::{parse_hosts, Host, HostTree};
use quickcheck::{Arbitrary, Gen};

/// A host record as it appears in an input file.
#[derive(Clone, Debug)]
struct Record {
    name: String,
    compatibility: i16,
    stability: i16,
    has_antibodies: bool,
}

impl Arbitrary for Record {
    fn arbitrary(g: &mut Gen) -> Self {
        // Few distinct names so that later records overwrite earlier ones.
        let first = g.choose(&["Eddie", "Anne", "Cletus", "Mac"]).unwrap();
        let last = g.choose(&["Brock", "Weying", "Kasady"]).unwrap();
        Self {
            name: format!("{first} {last}"),
            compatibility: i16::arbitrary(g),
            stability: i16::arbitrary(g),
            has_antibodies: bool::arbitrary(g),
        }
    }
}

/// Renders records in the input file format, with some padding thrown in.
fn render(records: &[Record]) -> String {
    let mut input = format!("{}\n", records.len());
    for record in records {
        input.push_str(&format!(
            "  {}\n{}\n\n{}\n{}\n",
            record.name, record.compatibility, record.stability, record.has_antibodies
        ));
    }
    input
}

quickcheck::quickcheck! {
    fn parsed_tree_holds_latest_records(records: Vec<Record>) -> bool {
        let hosts = parse_hosts(render(&records).as_bytes()).unwrap();
        let tree: HostTree = hosts.into_iter().collect();

        let latest: BTreeMap<_, _> = records
            .iter()
            .map(|r| {
                let attributes = (i32::from(r.compatibility), i32::from(r.stability), r.has_antibodies);
                (r.name.as_str(), attributes)
            })
            .collect();

        let found: Vec<_> = tree
            .iter()
            .map(|h| (h.name(), (h.compatibility(), h.stability(), h.has_antibodies())))
            .collect();
        found == latest.into_iter().collect::<Vec<_>>()
    }
}

quickcheck::quickcheck! {
    fn deleting_everything_empties_tree(records: Vec<Record>) -> bool {
        let mut tree = HostTree::new();
        tree.build_tree(records.iter().map(|r| {
            Host::new(r.name.clone(), r.compatibility.into(), r.stability.into(), r.has_antibodies)
        }));

        for record in &records {
            tree.delete(&record.name);
        }
        tree.is_empty() && tree.root().is_none()
    }
}
