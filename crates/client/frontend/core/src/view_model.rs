//! View-model snapshots derived from the roster and [`SelectionState`].
use select_core::{
    FighterStats, GridShape, Phase, Rgb, Roster, SelectionMachine, SelectionState,
};

use crate::notice::{Notice, NoticeLevel, NoticeLog};

/// High-level snapshot of the select screen used by presentation layers.
///
/// Built once per render; holds owned data so widgets never reach back into
/// the machine.
#[derive(Clone, Debug)]
pub struct SelectScreen {
    pub cards: Vec<CardView>,
    pub columns: usize,
    pub rows: usize,
    /// The committed fighter, shown in the large viewer panel.
    pub focus: FighterDetail,
    /// Upper-cased first name of the committed fighter.
    pub headline: String,
    pub phase: Phase,
    pub confirm_button: ConfirmButton,
    pub status: String,
    pub notices: Vec<Notice>,
}

impl SelectScreen {
    pub fn from_machine(
        roster: &Roster,
        machine: &SelectionMachine,
        confirm_pending: bool,
        notices: &NoticeLog,
        notice_limit: usize,
    ) -> Self {
        Self::from_state(
            roster,
            machine.grid(),
            &machine.state(),
            confirm_pending,
            notices,
            notice_limit,
        )
    }

    pub fn from_state(
        roster: &Roster,
        grid: GridShape,
        state: &SelectionState,
        confirm_pending: bool,
        notices: &NoticeLog,
        notice_limit: usize,
    ) -> Self {
        let cards = roster
            .iter()
            .enumerate()
            .map(|(index, fighter)| {
                let (row, column) = grid.coords(index);
                CardView {
                    index,
                    id: fighter.id.clone(),
                    name: fighter.name.clone(),
                    color: fighter.color,
                    row,
                    column,
                    highlighted: index == state.highlighted,
                    selected: index == state.selected,
                    hotkey: hotkey_for(index),
                }
            })
            .collect();

        let focus = roster
            .get(state.selected)
            .map(FighterDetail::from)
            .unwrap_or_default();

        let confirm_button = ConfirmButton::from_flags(state.confirmed, confirm_pending);
        let status = if state.confirmed {
            format!("{} is ready to fight!", focus.name)
        } else {
            "Choose your fighter and press the button!".to_string()
        };

        Self {
            cards,
            columns: grid.columns(),
            rows: grid.rows(),
            headline: focus.first_name().to_uppercase(),
            focus,
            phase: state.phase(),
            confirm_button,
            status,
            notices: notices.recent(notice_limit).cloned().collect(),
        }
    }

    /// Cards of one grid row, in column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &CardView> {
        self.cards.iter().filter(move |card| card.row == row)
    }

    pub fn highlighted(&self) -> Option<&CardView> {
        self.cards.iter().find(|card| card.highlighted)
    }
}

/// One fighter card in the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub color: Rgb,
    pub row: usize,
    pub column: usize,
    pub highlighted: bool,
    pub selected: bool,
    /// Number key that picks this card directly, for the first nine cards.
    pub hotkey: Option<char>,
}

/// Everything the viewer panel shows about a fighter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FighterDetail {
    pub name: String,
    pub description: String,
    pub stats: FighterStats,
    pub color: Option<Rgb>,
    pub image: String,
    pub model_url: String,
}

impl FighterDetail {
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

impl From<&select_core::Fighter> for FighterDetail {
    fn from(fighter: &select_core::Fighter) -> Self {
        Self {
            name: fighter.name.clone(),
            description: fighter.description.clone(),
            stats: fighter.stats,
            color: Some(fighter.color),
            image: fighter.image.clone(),
            model_url: fighter.model_url.clone(),
        }
    }
}

/// State of the confirm button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmButton {
    /// Clickable; nothing confirmed yet.
    Ready,
    /// Confirmation requested, waiting for the delay to elapse.
    Pending,
    /// Selection locked in; the button is disabled.
    Locked,
}

impl ConfirmButton {
    pub const fn from_flags(confirmed: bool, pending: bool) -> Self {
        if confirmed {
            Self::Locked
        } else if pending {
            Self::Pending
        } else {
            Self::Ready
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ready => "PRESS START!",
            Self::Pending => "CONFIRMING...",
            Self::Locked => "FIGHTER SELECTED!",
        }
    }

    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Framework-agnostic styling rules for the select screen.
///
/// Frontends implement this with their own style type so that every widget
/// shares one colour scheme.
pub trait PresentationMapper {
    type Style;

    /// Style of a card's frame, from its highlighted/selected flags.
    fn card_style(&self, card: &CardView) -> Self::Style;

    /// Style for text drawn in a fighter's accent colour.
    fn accent_style(&self, color: Option<Rgb>) -> Self::Style;

    /// Style of a stat bar holding `value` out of [`select_core::STAT_MAX`].
    fn stat_style(&self, value: u8) -> Self::Style;

    fn button_style(&self, button: ConfirmButton) -> Self::Style;

    fn notice_style(&self, level: NoticeLevel) -> Self::Style;
}

fn hotkey_for(index: usize) -> Option<char> {
    u32::try_from(index + 1)
        .ok()
        .filter(|digit| *digit <= 9)
        .and_then(|digit| char::from_digit(digit, 10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use select_core::{Fighter, SelectionConfig};

    fn roster() -> Roster {
        let fighters = (0..11)
            .map(|i| Fighter {
                id: format!("f{i}"),
                name: format!("Fighter Number{i}"),
                image: String::new(),
                model_url: format!("models/f{i}.glb"),
                description: format!("Fighter {i}"),
                stats: FighterStats::new(1, 2, 3, 4),
                color: Rgb::new(i as u8, 0, 0),
            })
            .collect();
        Roster::new(fighters).unwrap()
    }

    #[test]
    fn cards_carry_grid_coordinates_and_flags() {
        let roster = roster();
        let mut machine =
            SelectionMachine::for_roster(&roster, SelectionConfig::default()).unwrap();
        machine.select(4);
        machine.highlight(7);

        let screen = SelectScreen::from_machine(&roster, &machine, false, &NoticeLog::new(4), 3);

        assert_eq!((screen.columns, screen.rows), (3, 4));
        assert_eq!(screen.row(3).count(), 2);

        let card = &screen.cards[4];
        assert_eq!((card.row, card.column), (1, 1));
        assert!(card.selected && !card.highlighted);
        assert_eq!(screen.highlighted().map(|c| c.index), Some(7));

        assert_eq!(screen.cards[0].hotkey, Some('1'));
        assert_eq!(screen.cards[8].hotkey, Some('9'));
        assert_eq!(screen.cards[9].hotkey, None);
    }

    #[test]
    fn focus_follows_selection_not_cursor() {
        let roster = roster();
        let mut machine =
            SelectionMachine::for_roster(&roster, SelectionConfig::default()).unwrap();
        machine.select(2);
        machine.highlight(5);

        let screen = SelectScreen::from_machine(&roster, &machine, false, &NoticeLog::new(4), 3);
        assert_eq!(screen.focus.name, "Fighter Number2");
        assert_eq!(screen.focus.model_url, "models/f2.glb");
        assert_eq!(screen.headline, "FIGHTER");
    }

    #[test]
    fn confirm_button_and_status_track_phase() {
        let roster = roster();
        let mut machine =
            SelectionMachine::for_roster(&roster, SelectionConfig::default()).unwrap();
        let notices = NoticeLog::new(4);

        let screen = SelectScreen::from_machine(&roster, &machine, false, &notices, 3);
        assert_eq!(screen.confirm_button, ConfirmButton::Ready);
        assert!(screen.confirm_button.is_enabled());

        let screen = SelectScreen::from_machine(&roster, &machine, true, &notices, 3);
        assert_eq!(screen.confirm_button, ConfirmButton::Pending);

        machine.confirm();
        let screen = SelectScreen::from_machine(&roster, &machine, true, &notices, 3);
        assert_eq!(screen.confirm_button, ConfirmButton::Locked);
        assert_eq!(screen.phase, Phase::Confirmed);
        assert_eq!(screen.status, "Fighter Number0 is ready to fight!");
    }

    #[test]
    fn notices_are_newest_first_and_limited() {
        let roster = roster();
        let machine = SelectionMachine::for_roster(&roster, SelectionConfig::default()).unwrap();
        let mut notices = NoticeLog::new(8);
        for i in 0..5 {
            notices.push(Notice::info(format!("n{i}"), ""));
        }

        let screen = SelectScreen::from_machine(&roster, &machine, false, &notices, 2);
        let titles: Vec<_> = screen.notices.iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["n4", "n3"]);
    }
}
