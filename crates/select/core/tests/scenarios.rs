//! End-to-end selection scenarios over a seven-fighter, three-column grid.
//!
//! Layout:
//!
//! ```text
//! row 0:  0 1 2
//! row 1:  3 4 5
//! row 2:  6
//! ```

use select_core::{
    ConfirmPolicy, Direction, Fighter, FighterStats, Phase, Rgb, Roster, SelectionConfig,
    SelectionMachine, Step,
};

fn roster() -> Roster {
    let fighters = ["pablo", "ana", "pietro", "velho", "babuino", "resnatao", "luir"]
        .into_iter()
        .map(|id| Fighter {
            id: id.to_string(),
            name: id.to_uppercase(),
            image: format!("posters/{id}.jpg"),
            model_url: format!("models/{id}.glb"),
            description: String::new(),
            stats: FighterStats::new(5, 5, 5, 5),
            color: Rgb::new(0xFF, 0xC1, 0x07),
        })
        .collect();
    Roster::new(fighters).expect("fixture roster is valid")
}

fn machine(policy: ConfirmPolicy) -> SelectionMachine {
    SelectionMachine::for_roster(&roster(), SelectionConfig::new(3, policy))
        .expect("roster is non-empty")
}

#[test]
fn walking_down_the_first_column_wraps_to_the_top() {
    let mut machine = machine(ConfirmPolicy::Lock);

    machine.navigate(Direction::Down);
    assert_eq!(machine.state().highlighted, 3);
    machine.navigate(Direction::Down);
    assert_eq!(machine.state().highlighted, 6);
    machine.navigate(Direction::Down);
    assert_eq!(machine.state().highlighted, 0);
}

#[test]
fn lone_fighter_in_last_row_wraps_onto_itself() {
    let mut machine = machine(ConfirmPolicy::Lock);
    machine.highlight(6);

    assert!(machine.navigate(Direction::Right).is_empty());
    assert_eq!(machine.state().highlighted, 6);
    assert!(machine.navigate(Direction::Left).is_empty());
    assert_eq!(machine.state().highlighted, 6);
}

#[test]
fn confirmed_selection_is_locked_by_default() {
    let mut machine = machine(ConfirmPolicy::default());

    machine.select(2);
    machine.navigate(Direction::Up);
    machine.confirm();
    machine.select(5);

    let state = machine.state();
    assert_eq!(state.selected, 2);
    assert!(state.confirmed);
    // The upward move from column 2 skipped the short last row.
    assert_eq!(state.highlighted, 5);
}

#[test]
fn permissive_policy_keeps_legacy_behaviour() {
    let mut machine = machine(ConfirmPolicy::Permissive);

    machine.select(2);
    machine.navigate(Direction::Up);
    machine.confirm();
    machine.select(5);

    let state = machine.state();
    assert_eq!(state.selected, 5);
    assert!(state.confirmed);
}

#[test]
fn full_confirmation_cycle() {
    let mut machine = machine(ConfirmPolicy::Lock);

    machine.cycle(Step::Next);
    machine.cycle(Step::Next);
    machine.select(machine.state().highlighted);
    machine.confirm();
    assert_eq!(machine.phase(), Phase::Confirmed);

    machine.cancel();
    assert_eq!(machine.phase(), Phase::Browsing);
    assert_eq!(machine.state().selected, 2);

    machine.select_adjacent(Step::Next);
    assert_eq!(machine.state().selected, 3);
}
