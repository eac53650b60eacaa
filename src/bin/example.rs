use range_lca::{
    combiner::{Min, Sum},
    euler_tour, EulerTourStyle, LowestCommonAncestor, RangeQuery, SparseTable,
    SparseTableIdempotent, Tree,
};

fn print_lca(lca: &LowestCommonAncestor, u: usize, v: usize) {
    match lca.lca(u, v) {
        Ok(a) => println!("LCA of {} and {} is {}", u, v, a),
        Err(e) => println!("LCA of {} and {} failed: {}", u, v, e),
    }
}

fn main() -> range_lca::Result<()> {
    let values = [1, 3, 5, 7, 9, 11, 13, 15];
    let sums = SparseTable::<Sum<i64>>::from_values(0, values);
    let mins = SparseTableIdempotent::<Min<i64>>::from_values(values);
    println!("Values {:?}", values);
    for (l, r) in [(0, 2), (2, 3), (1, 7)] {
        println!(
            "[{}, {}]: sum {} min {}",
            l,
            r,
            sums.query(l, r)?,
            mins.query(l, r)?
        );
    }

    let mut tree: Tree<&str> = Tree::from_values(["zero", "one", "two", "three", "four"], 0);
    for (u, v) in [(0, 1), (0, 2), (0, 3), (1, 4)] {
        tree.add_undirected_edge(u, v);
    }
    println!("{:?}", tree);
    println!(
        "Basic tour: {:?}",
        euler_tour(&tree, EulerTourStyle::Basic)
    );
    println!(
        "Repetitive tour: {:?}",
        euler_tour(&tree, EulerTourStyle::Repetitive)
    );

    let lca = LowestCommonAncestor::from_tree(&mut tree);
    print_lca(&lca, 4, 2);
    print_lca(&lca, 4, 1);
    print_lca(&lca, 2, 3);
    print_lca(&lca, 4, 7);
    Ok(())
}
