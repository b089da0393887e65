use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use host_tree::{Host, HostTree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Zero padded so names sort the same way the numbers do.
fn name(i: usize) -> String {
    format!("host-{i:06}")
}

fn host(i: usize) -> Host {
    Host::new(name(i), (i % 97) as i32, (i % 89) as i32, i % 3 == 0)
}

/// Builds a tree by inserting hosts in ascending order, which leaves every host with only a right
/// child.
fn get_unbalanced_tree(num_levels: usize) -> HostTree {
    (0..num_nodes_in_full_tree(num_levels)).map(host).collect()
}

/// Builds a tree by inserting hosts so that the resultant tree is full.
fn get_balanced_tree(num_levels: usize) -> HostTree {
    let mut tree = HostTree::new();
    let xs = (0..num_nodes_in_full_tree(num_levels)).collect::<Vec<_>>();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut HostTree, xs: &[usize]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(host(xs[mid]));
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group. The closure gets a fresh copy of the tree
/// and the index of its largest host.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut HostTree, usize)) {
    let mut group = c.benchmark_group(name);

    // Building an unbalanced tree is quadratic and happens once per iteration, so keep them small.
    for num_levels in [3, 7, 11] {
        let largest_host = num_nodes_in_full_tree(num_levels) - 1;
        let shapes: [(&str, fn(usize) -> HostTree); 2] = [
            ("unbalanced", get_unbalanced_tree),
            ("balanced", get_balanced_tree),
        ];
        for (shape, build) in shapes {
            let id = BenchmarkId::new(shape, largest_host);

            group.bench_function(id, |b| {
                b.iter_batched(
                    || build(num_levels),
                    |mut tree| f(&mut tree, black_box(largest_host)),
                    criterion::BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _host = black_box(tree.find(&name(i)));
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(host(i + 1));
    });
    bench_helper(c, "delete", |tree, i| {
        black_box(tree.delete(&name(i)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        black_box(tree.delete(&name(i + 1)));
    });
    bench_helper(c, "most-suitable", |tree, _| {
        let _host = black_box(tree.find_most_suitable());
    });
    bench_helper(c, "antibodies", |tree, _| {
        let _hosts = black_box(tree.hosts_with_antibodies());
    });
    bench_helper(c, "suitability-range", |tree, _| {
        let _hosts = black_box(tree.hosts_within_suitability_range(50, 120));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
