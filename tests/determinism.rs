use pathrank::{rank, RankConfig, RankingEngine};

fn corpus() -> Vec<String> {
    let dirs = ["base", "chrome/browser", "content/renderer", "third_party/skia"];
    let stems = ["scoped_ptr", "ScopedHandle", "sp_tr", "tab_strip", "TabContents", "spare"];
    let exts = ["h", "cc", "mm"];

    let mut paths = Vec::new();
    for dir in dirs {
        for stem in stems {
            for ext in exts {
                paths.push(format!("{dir}/{stem}.{ext}"));
            }
        }
    }
    paths
}

#[test]
fn repeated_calls_are_identical() {
    let candidates = corpus();
    let first = rank(&candidates, "sp", &RankConfig::default()).expect("rank");
    for _ in 0..5 {
        assert_eq!(rank(&candidates, "sp", &RankConfig::default()).expect("rank"), first);
    }
}

#[test]
fn candidate_order_does_not_change_the_result() {
    let candidates = corpus();
    let mut reversed = candidates.clone();
    reversed.reverse();

    let mut interleaved: Vec<String> = candidates.iter().step_by(2).cloned().collect();
    interleaved.extend(candidates.iter().skip(1).step_by(2).cloned());

    let cfg = RankConfig::default();
    for query in ["sp", "tab", "h", "ScH", ""] {
        let expected = rank(&candidates, query, &cfg).expect("rank");
        assert_eq!(rank(&reversed, query, &cfg).expect("rank"), expected, "query {query:?}");
        assert_eq!(rank(&interleaved, query, &cfg).expect("rank"), expected, "query {query:?}");
    }
}

#[test]
fn parallel_scan_matches_sequential_scan() {
    let candidates: Vec<String> = (0..2_000)
        .map(|i| format!("out/gen_{}/Module{}_{}.cc", i % 13, i, i % 5))
        .collect();
    let sequential = RankConfig::default();
    let parallel = RankConfig::default().with_parallel(true);

    for query in ["m1", "gen", "mc", "M2_3"] {
        assert_eq!(
            rank(&candidates, query, &sequential).expect("rank"),
            rank(&candidates, query, &parallel).expect("rank"),
            "query {query:?}"
        );
    }
}

#[test]
fn engine_and_free_function_agree() {
    let candidates = corpus();
    let engine = RankingEngine::with_defaults(candidates.clone());
    assert_eq!(
        engine.rank("tabc").expect("engine rank"),
        rank(&candidates, "tabc", &RankConfig::default()).expect("rank")
    );
}
