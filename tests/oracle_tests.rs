use dijkstra_oracle::driver;
use dijkstra_oracle::{Mode, OracleConfig, UNREACHABLE};

const TRIANGLE: &str = "3 3\n0 1 5\n1 2 3\n0 2 10\n";

fn run(mode: Mode, input: &str) -> String {
    let config = OracleConfig::new().with_mode(mode);
    let mut out = Vec::new();
    driver::run(&config, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn single_vertex_without_edges() {
    assert_eq!(run(Mode::SingleSource, "1 0\n"), "0: 0\n");
}

#[test]
fn two_hop_path_beats_direct_edge() {
    assert_eq!(run(Mode::SingleSource, TRIANGLE), "0: 0\n1: 5\n2: 8\n");
}

#[test]
fn isolated_vertex_reports_sentinel() {
    let output = run(Mode::SingleSource, "4 3\n0 1 5\n1 2 3\n0 2 10\n");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[3], format!("3: {}", UNREACHABLE));
    assert_eq!(lines[3], "3: 2139062143");
}

#[test]
fn all_pairs_on_triangle() {
    let output = run(Mode::AllPairs, TRIANGLE);
    let expected = "\
0 -> 0: 0
0 -> 1: 5
0 -> 2: 8
1 -> 0: 2139062143
1 -> 1: 0
1 -> 2: 3
2 -> 0: 2139062143
2 -> 1: 2139062143
2 -> 2: 0
";
    assert_eq!(output, expected);
    assert_eq!(output.lines().count(), 9);
}

#[test]
fn repeated_runs_are_identical() {
    let input = "5 7\n0 1 2\n1 2 2\n2 3 2\n3 4 2\n4 0 2\n0 3 1\n3 1 0\n";
    assert_eq!(run(Mode::AllPairs, input), run(Mode::AllPairs, input));
    assert_eq!(run(Mode::SingleSource, input), run(Mode::SingleSource, input));
}

#[test]
fn parallel_output_matches_sequential() {
    let input = "5 7\n0 1 2\n1 2 2\n2 3 2\n3 4 2\n4 0 2\n0 3 1\n3 1 0\n";
    let sequential = run(Mode::AllPairs, input);

    let config = OracleConfig::new().with_parallel(true);
    let mut out = Vec::new();
    driver::run(&config, input.as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), sequential);
}

#[test]
fn oracle_output_compares_clean_against_itself() {
    let output = run(Mode::AllPairs, TRIANGLE);
    let comparison = dijkstra_oracle::compare::compare_outputs(&output, &output).unwrap();
    assert!(comparison.is_match());
    assert_eq!(comparison.total, 9);

    let tampered = output.replace("0 -> 2: 8", "0 -> 2: 10");
    let comparison = dijkstra_oracle::compare::compare_outputs(&output, &tampered).unwrap();
    assert_eq!(comparison.mismatches.len(), 1);
    assert_eq!(comparison.mismatches[0].index, 3);
}
