use taulib_doc::Factors;

fn main() {
    for n in [45_u64, 53, 64] {
        let factors: Vec<_> = n.factors().collect();
        println!("{factors:?}");
    }
}

#[test]
fn demo_lines() {
    let lines: Vec<_> = [45_u64, 53, 64]
        .into_iter()
        .map(|n| format!("{:?}", n.factors().collect::<Vec<_>>()))
        .collect();
    assert_eq!(lines, [
        "[1, 3, 5, 9, 15, 45]",
        "[1, 53]",
        "[1, 2, 4, 8, 16, 32, 64]",
    ]);
}
