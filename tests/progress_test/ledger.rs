//! Tests for XP ledger invariants

use questlog::progress::{XpLedger, ITEM_BASE_XP};

use crate::common::sample_ledgers;

#[test]
fn test_award_keeps_xp_below_threshold() {
    for start in sample_ledgers() {
        for amount in [0, 1, 7, 99, 100, 101, 1_000, 123_456] {
            let mut ledger = start;
            let outcome = ledger.award(amount);

            assert!(
                ledger.xp < ledger.next_level_xp,
                "{start:?} + {amount} left {ledger:?}"
            );
            assert_eq!(outcome.level, ledger.level);
            assert_eq!(outcome.leveled_up, ledger.level > start.level);
            assert_eq!(outcome.levels_gained, ledger.level - start.level);
        }
    }
}

#[test]
fn test_deduct_undoes_award_within_a_level() {
    for start in sample_ledgers() {
        let room = start.next_level_xp - start.xp - 1;
        // room is 0 when xp sits one below the threshold
        for amount in [0, 1, room / 2, room].into_iter().filter(|a| *a <= room) {
            let mut ledger = start;
            let award = ledger.award(amount);
            assert!(!award.leveled_up);

            let deduct = ledger.deduct(amount);
            assert!(!deduct.leveled_down);
            assert_eq!(ledger, start, "amount {amount}");
        }
    }
}

#[test]
fn test_award_example_rolls_over_remainder() {
    let mut ledger = XpLedger {
        xp: 90,
        level: 1,
        next_level_xp: 100,
    };
    let outcome = ledger.award(20);

    assert!(outcome.leveled_up);
    assert_eq!(
        ledger,
        XpLedger {
            xp: 10,
            level: 2,
            next_level_xp: 150,
        }
    );
}

#[test]
fn test_single_award_crosses_several_levels() {
    let mut ledger = XpLedger::new(ITEM_BASE_XP);
    // 100 + 150 + 225 = 475 reaches level 4 with 5 left over
    let outcome = ledger.award(480);

    assert_eq!(outcome.levels_gained, 3);
    assert_eq!(ledger.level, 4);
    assert_eq!(ledger.xp, 5);
    assert_eq!(ledger.next_level_xp, 337);
}

#[test]
fn test_deduct_never_goes_below_level_one() {
    let mut ledger = XpLedger {
        xp: 10,
        level: 3,
        next_level_xp: 225,
    };
    let outcome = ledger.deduct(10_000);

    assert_eq!(outcome.levels_lost, 2);
    assert_eq!(ledger.level, 1);
    assert_eq!(ledger.xp, 0);
    assert_eq!(ledger.next_level_xp, 100);
}
