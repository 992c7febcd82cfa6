use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use runtime::{Encounter, Team};
use tactics_core::{CharacterSheet, RaceTable, RulesConfig, StatProfile};

fn duel(seed: u64) -> (Option<Team>, Vec<runtime::AttackReport>) {
    let races = RaceTable::standard();
    let knight = CharacterSheet::with_profile("knight", "gorath", StatProfile::new(18, 8, 8, 16, 14, 4), &races);
    let duelist = CharacterSheet::with_profile("duelist", "kaerath", StatProfile::new(12, 16, 16, 9, 9, 6), &races);

    let mut encounter = Encounter::new(RulesConfig::default());
    encounter.join_sheet(&knight, Team(0), &races).unwrap();
    encounter.join_sheet(&duelist, Team(1), &races).unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut log = Vec::new();
    let winner = encounter.auto_battle(&mut rng, 500, &mut log).unwrap();
    (winner, log)
}

#[test]
fn seeded_duel_is_reproducible() {
    let (winner_a, log_a) = duel(7);
    let (winner_b, log_b) = duel(7);

    assert_eq!(winner_a, winner_b);
    assert_eq!(log_a, log_b);
}

#[test]
fn duel_ends_with_a_winner_and_bounded_values() {
    for seed in 0..20 {
        let (winner, log) = duel(seed);
        assert!(winner.is_some(), "seed {seed} did not finish");

        let last = log.last().unwrap();
        assert!(last.defeated);
        assert_eq!(last.target_hp, 0);

        for report in &log {
            assert!((80..=150).contains(&report.recovery));
            if let Some(damage) = report.result.damage {
                assert!(damage >= 1);
            }
        }
    }
}
