//! Property tests: zone exclusivity, used-subset, and disk totals hold after
//! arbitrary operation sequences.

use proptest::prelude::*;
use spirit_tracker::{
    CardKey, CardRegistry, DiskRow, Element, GameData, PanelTemplate, PlayerCardStore, PlayerId,
    PositionHint, PowerCard, PowerDeck, PowerKind, Speed, SpiritDefinition,
};

const HAND_SIZE: usize = 5;

#[derive(Clone, Debug)]
enum Op {
    Play(usize, Option<(usize, bool)>),
    Return(usize),
    AddToPlay(usize),
    ToggleUsed(usize),
    Discard(usize),
    DiscardFromPlay(usize),
    ForgetFromHand(usize),
    ForgetFromDiscard(usize),
    Take(usize),
    Reposition(usize, usize, bool),
    Reclaim,
    ReclaimOne(usize),
    DrawToPicking(usize),
    AddToPicking(usize),
    PutToPicking(usize),
    TakeFromPicking,
    ResetPicking,
    AddEnergy,
    ReduceEnergy,
    DiskClick(usize, usize),
    TakeIncome,
    CleanUp,
}

/// Card keys the operations pick from: the starting hand plus a few minors.
fn card(index: usize) -> CardKey {
    if index < HAND_SIZE {
        CardKey::unique(0, index)
    } else {
        CardKey::minor(index - HAND_SIZE)
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let card = 0..HAND_SIZE + 4;
    let moves = prop_oneof![
        (card.clone(), proptest::option::of((card.clone(), any::<bool>())))
            .prop_map(|(c, hint)| Op::Play(c, hint)),
        card.clone().prop_map(Op::Return),
        card.clone().prop_map(Op::AddToPlay),
        card.clone().prop_map(Op::ToggleUsed),
        card.clone().prop_map(Op::Discard),
        card.clone().prop_map(Op::DiscardFromPlay),
        card.clone().prop_map(Op::ForgetFromHand),
        card.clone().prop_map(Op::ForgetFromDiscard),
        card.clone().prop_map(Op::Take),
        (card.clone(), card.clone(), any::<bool>()).prop_map(|(c, r, b)| Op::Reposition(c, r, b)),
    ];
    let picking = prop_oneof![
        Just(Op::Reclaim),
        card.clone().prop_map(Op::ReclaimOne),
        (0usize..4).prop_map(Op::DrawToPicking),
        card.clone().prop_map(Op::AddToPicking),
        card.prop_map(Op::PutToPicking),
        Just(Op::TakeFromPicking),
        Just(Op::ResetPicking),
    ];
    let resources = prop_oneof![
        Just(Op::AddEnergy),
        Just(Op::ReduceEnergy),
        (0usize..2, 0usize..4).prop_map(|(r, p)| Op::DiskClick(r, p)),
        Just(Op::TakeIncome),
        Just(Op::CleanUp),
    ];
    prop_oneof![4 => moves, 2 => picking, 2 => resources]
}

fn game_data() -> GameData {
    let mut spirit = SpiritDefinition::new("Thunderspeaker").with_panel(
        PanelTemplate::new(1, 2)
            .with_energy_row([1.into(), 2.into(), "Air".into()])
            .with_card_play_row([1.into(), (-1).into()]),
    );
    for cost in 0..HAND_SIZE {
        spirit = spirit.with_card(
            PowerCard::new(format!("Power {cost}"), cost as u32, Speed::Fast)
                .with_elements([Element::Sun]),
        );
    }
    let mut data = GameData::new().with_spirit(spirit);
    for cost in 0..4 {
        data = data.with_minor(PowerCard::new(format!("Minor {cost}"), cost, Speed::Slow));
    }
    data
}

fn run(ops: &[Op]) -> PlayerCardStore<CardRegistry> {
    let data = game_data();
    let mut store = PlayerCardStore::new(CardRegistry::from_game_data(&data));
    let id = store.add_player(0, &data).unwrap();
    let mut deck = PowerDeck::new(&data, 9);
    let mut forgotten: Vec<CardKey> = Vec::new();

    for op in ops {
        if let Op::CleanUp = op {
            store.clean_up();
            continue;
        }
        let mut player = store.player_mut(id).unwrap();
        match op {
            Op::Play(c, hint) => {
                let hint = hint.map(|(r, before)| PositionHint {
                    relative_id: card(r),
                    insert_before: before,
                });
                let _ = player.play_card(&card(*c), hint.as_ref());
            }
            Op::Return(c) => {
                let _ = player.return_card_from_play(&card(*c), None);
            }
            Op::AddToPlay(c) => {
                player.add_card_to_play(card(*c));
            }
            Op::ToggleUsed(c) => {
                player.toggle_used(&card(*c));
            }
            Op::Discard(c) => {
                player.put_card_in_discard(&card(*c));
            }
            Op::DiscardFromPlay(c) => {
                player.put_from_play_to_discard(&card(*c));
            }
            Op::ForgetFromHand(c) => {
                player.forget_card_from_hand(&card(*c), &mut forgotten);
            }
            Op::ForgetFromDiscard(c) => {
                player.forget_card_from_discard(&card(*c), &mut deck);
            }
            Op::Take(c) => {
                player.take(card(*c));
            }
            Op::Reposition(c, r, before) => {
                let hint = PositionHint {
                    relative_id: card(*r),
                    insert_before: *before,
                };
                player.change_hand_position(&card(*c), &hint);
            }
            Op::Reclaim => {
                player.reclaim();
            }
            Op::ReclaimOne(c) => {
                player.reclaim_one_card(&card(*c));
            }
            Op::DrawToPicking(n) => {
                player.draw_to_picking(&mut deck, PowerKind::Minor, *n);
            }
            Op::AddToPicking(c) => {
                player.add_to_picking(card(*c));
            }
            Op::PutToPicking(c) => {
                player.put_card_to_picking(&card(*c));
            }
            Op::TakeFromPicking => {
                if let Some(first) = player.picking().first().cloned() {
                    player.take_card_from_picking(&first);
                }
            }
            Op::ResetPicking => {
                for staged in player.reset_picking() {
                    deck.discard(staged);
                }
            }
            Op::AddEnergy => player.add_energy(),
            Op::ReduceEnergy => {
                player.reduce_energy();
            }
            Op::DiskClick(r, p) => {
                if let Some(row) = DiskRow::from_index(*r) {
                    let _ = player.disk_click(row, *p);
                }
            }
            Op::TakeIncome => {
                player.take_income();
            }
            Op::CleanUp => {}
        }
    }
    store
}

proptest! {
    /// Invariant: no card is in two zones and every used card is in play.
    #[test]
    fn zones_stay_consistent(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let store = run(&ops);
        let player = store.player(PlayerId::new(0)).unwrap();

        prop_assert!(player.is_consistent());
        for used in player.used() {
            prop_assert!(player.play_order().contains(used));
        }
    }

    /// Invariant: income and card plays are the base values plus the claimed
    /// disk cells.
    #[test]
    fn resources_stay_in_bounds(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let store = run(&ops);
        let player = store.player(PlayerId::new(0)).unwrap();

        let disk = player.disk().unwrap();
        prop_assert_eq!(player.income(), 1 + disk.claimed_total(DiskRow::Energy));
        prop_assert_eq!(player.total_card_play(), 2 + disk.claimed_total(DiskRow::CardPlay));
    }

    /// Invariant: clicking a cell twice leaves income and card plays unchanged.
    #[test]
    fn disk_click_twice_is_identity(
        ops in proptest::collection::vec(op_strategy(), 0..30),
        row in 0usize..2,
        position in 0usize..3,
    ) {
        let mut store = run(&ops);
        let id = PlayerId::new(0);
        let before = store.player(id).unwrap().record().clone();

        let mut player = store.player_mut(id).unwrap();
        let row = DiskRow::from_index(row).unwrap();
        if player.disk_click(row, position).is_ok() {
            player.disk_click(row, position).unwrap();
        }
        prop_assert_eq!(player.record(), &before);
    }

    /// Invariant: play then return restores energy and hand membership.
    #[test]
    fn play_return_conserves_energy(
        ops in proptest::collection::vec(op_strategy(), 0..30),
        c in 0usize..HAND_SIZE,
    ) {
        let mut store = run(&ops);
        let mut player = store.player_mut(PlayerId::new(0)).unwrap();
        let key = card(c);
        let energy = player.energy();

        if let Ok(true) = player.play_card(&key, None) {
            prop_assert!(player.return_card_from_play(&key, None).unwrap());
            prop_assert_eq!(player.energy(), energy);
            prop_assert!(player.hand().contains(&key));
        }
    }
}
