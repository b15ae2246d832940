use std::{sync::Arc, thread};

use buybye::{
    buybye_domain::{Goal, PurchaseDecision, SavingsAggregate, UserSettings, WorkTime},
    DecisionReceipt, EngineConfig, PurchaseEngine,
};

const WRITERS: usize = 8;
const DECISIONS_PER_WRITER: usize = 50;

#[test]
fn concurrent_credits_are_never_lost_or_doubled() {
    let engine = Arc::new(
        PurchaseEngine::new(EngineConfig::default())
            .expect("engine")
            .with_state(
                vec![Goal::new("Travel", "plane").with_target(10_000.0)],
                SavingsAggregate::default(),
            )
            .expect("state"),
    );
    let shared = PurchaseDecision::declined("Flight upgrade", 50.0, "Travel");

    let handles: Vec<_> = (0..WRITERS)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let shared = shared.clone();
            thread::spawn(move || {
                let settings = UserSettings::default();
                let mut saved = 0;
                for _ in 0..DECISIONS_PER_WRITER {
                    let decision = PurchaseDecision::declined("Souvenir", 25.0, "Travel");
                    if matches!(
                        engine.submit(&settings, &decision).expect("submit"),
                        DecisionReceipt::Saved { .. }
                    ) {
                        saved += 1;
                    }
                }
                let replay = engine.submit(&settings, &shared).expect("shared");
                (saved, matches!(replay, DecisionReceipt::Saved { .. }))
            })
        })
        .collect();

    let mut saved = 0;
    let mut shared_credits = 0;
    for handle in handles {
        let (count, credited_shared) = handle.join().expect("writer thread");
        saved += count;
        shared_credits += usize::from(credited_shared);
    }

    assert_eq!(saved, WRITERS * DECISIONS_PER_WRITER);
    assert_eq!(shared_credits, 1);

    let snapshot = engine.snapshot().expect("snapshot");
    let expected = (WRITERS * DECISIONS_PER_WRITER) as f64 * 25.0 + 50.0;
    assert_eq!(snapshot.aggregate.money_saved, expected);
    assert_eq!(snapshot.goals[0].saved_amount, expected);
    assert_eq!(snapshot.credited_count(), WRITERS * DECISIONS_PER_WRITER + 1);
    // 25 / 25 = 1h each, 50 / 25 = 2h
    assert_eq!(
        snapshot.aggregate.work_time_saved,
        WorkTime::new((WRITERS * DECISIONS_PER_WRITER) as u64 + 2, 0)
    );
}

#[test]
fn projections_run_alongside_writers() {
    let engine = Arc::new(
        PurchaseEngine::new(EngineConfig::default())
            .expect("engine")
            .with_state(
                vec![Goal::new("Decor", "lamp").with_target(1_000.0)],
                SavingsAggregate::default(),
            )
            .expect("state"),
    );

    let writer = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            let settings = UserSettings::default();
            for _ in 0..100 {
                let decision = PurchaseDecision::declined("Candle", 10.0, "Decor");
                engine.submit(&settings, &decision).expect("submit");
            }
        })
    };
    let reader = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || {
            for _ in 0..100 {
                let snapshot = engine.snapshot().expect("snapshot");
                // goal and aggregate are updated together
                assert_eq!(snapshot.goals[0].saved_amount, snapshot.aggregate.money_saved);
                let report = engine
                    .timeline(buybye::buybye_domain::Horizon::TwoYears)
                    .expect("timeline");
                assert!(report.total.progress_percent <= 100.0);
            }
        })
    };

    writer.join().expect("writer");
    reader.join().expect("reader");
    assert_eq!(engine.aggregate().expect("aggregate").money_saved, 1_000.0);
}
