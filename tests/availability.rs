//! Integration tests for availability: status transitions and the ready list.

use hockey_lineup_web::{
    set_player_status, GameId, Planner, PlannerError, PlayerId, PlayerStatus, Position,
};

/// Planner with one player per given position (named P0, P1, ...) and one game.
fn planner_with(positions: &[Position]) -> (Planner, GameId) {
    let mut planner = Planner::new();
    for (i, &pos) in positions.iter().enumerate() {
        planner
            .add_player(&format!("P{i}"), (i + 1) as u32, pos)
            .unwrap();
    }
    let game_id = planner.create_game();
    (planner, game_id)
}

fn player_id(planner: &Planner, index: usize) -> PlayerId {
    planner.team[index].id
}

#[test]
fn goalie_goes_to_slot_0_field_players_fill_from_slot_1() {
    let (mut p, game) = planner_with(&[Position::Goalie, Position::Forward, Position::Defender]);
    let (goalie, fwd, def) = (player_id(&p, 0), player_id(&p, 1), player_id(&p, 2));

    set_player_status(&mut p, game, fwd, Some(PlayerStatus::Ready)).unwrap();
    set_player_status(&mut p, game, goalie, Some(PlayerStatus::Ready)).unwrap();
    set_player_status(&mut p, game, def, Some(PlayerStatus::Ready)).unwrap();

    let g = p.game(game).unwrap();
    assert_eq!(g.ready_players.get(0).unwrap().id, goalie);
    assert_eq!(g.ready_players.get(1).unwrap().id, fwd);
    assert_eq!(g.ready_players.get(2).unwrap().id, def);
}

#[test]
fn ready_twice_is_a_noop() {
    let (mut p, game) = planner_with(&[Position::Goalie]);
    let goalie = player_id(&p, 0);

    set_player_status(&mut p, game, goalie, Some(PlayerStatus::Ready)).unwrap();
    let before = p.game(game).unwrap().clone();

    set_player_status(&mut p, game, goalie, Some(PlayerStatus::Ready)).unwrap();
    let after = p.game(game).unwrap();

    assert_eq!(*after, before);
    assert_eq!(after.ready_players.get(0).unwrap().id, goalie);
    assert_eq!(after.ready_players.filled_count(), 1);
}

#[test]
fn second_goalie_gets_capacity_error_without_mutation() {
    let (mut p, game) = planner_with(&[Position::Goalie, Position::Goalie]);
    let (g1, g2) = (player_id(&p, 0), player_id(&p, 1));

    set_player_status(&mut p, game, g1, Some(PlayerStatus::Ready)).unwrap();
    let before = p.game(game).unwrap().clone();

    assert!(matches!(
        set_player_status(&mut p, game, g2, Some(PlayerStatus::Ready)),
        Err(PlannerError::ReadyListFull)
    ));
    assert_eq!(*p.game(game).unwrap(), before);
    assert!(!p.game(game).unwrap().player_statuses.contains_key(&g2));
}

#[test]
fn full_field_slots_give_capacity_error_without_mutation() {
    // 15 forwards fill slots 1-15; the 16th has nowhere to go.
    let positions = vec![Position::Forward; 16];
    let (mut p, game) = planner_with(&positions);

    for i in 0..15 {
        let id = player_id(&p, i);
        set_player_status(&mut p, game, id, Some(PlayerStatus::Ready)).unwrap();
    }
    let before = p.game(game).unwrap().clone();

    let last = player_id(&p, 15);
    assert!(matches!(
        set_player_status(&mut p, game, last, Some(PlayerStatus::Ready)),
        Err(PlannerError::ReadyListFull)
    ));
    assert_eq!(*p.game(game).unwrap(), before);
}

#[test]
fn not_ready_removes_from_ready_and_lineup() {
    let (mut p, game) = planner_with(&[Position::Forward]);
    let fwd = player_id(&p, 0);

    set_player_status(&mut p, game, fwd, Some(PlayerStatus::Ready)).unwrap();
    hockey_lineup_web::assign_to_lineup(&mut p, game, 1, fwd).unwrap();

    set_player_status(&mut p, game, fwd, Some(PlayerStatus::NotReady)).unwrap();

    let g = p.game(game).unwrap();
    assert!(!g.ready_players.contains(fwd));
    assert!(!g.lineup.contains(fwd));
    assert_eq!(g.player_statuses.get(&fwd), Some(&PlayerStatus::NotReady));
}

#[test]
fn doubtful_and_survey_are_recorded_without_a_slot() {
    let (mut p, game) = planner_with(&[Position::Forward, Position::Defender]);
    let (a, b) = (player_id(&p, 0), player_id(&p, 1));

    set_player_status(&mut p, game, a, Some(PlayerStatus::Doubtful)).unwrap();
    set_player_status(&mut p, game, b, Some(PlayerStatus::Survey)).unwrap();

    let g = p.game(game).unwrap();
    assert_eq!(g.ready_players.filled_count(), 0);
    assert_eq!(g.player_statuses.get(&a), Some(&PlayerStatus::Doubtful));
    assert_eq!(g.player_statuses.get(&b), Some(&PlayerStatus::Survey));
}

#[test]
fn clearing_status_deletes_the_entry_and_vacates_slots() {
    let (mut p, game) = planner_with(&[Position::Forward]);
    let fwd = player_id(&p, 0);

    set_player_status(&mut p, game, fwd, Some(PlayerStatus::Ready)).unwrap();
    hockey_lineup_web::assign_to_lineup(&mut p, game, 1, fwd).unwrap();

    set_player_status(&mut p, game, fwd, None).unwrap();

    let g = p.game(game).unwrap();
    assert!(!g.ready_players.contains(fwd));
    assert!(!g.lineup.contains(fwd));
    assert!(!g.player_statuses.contains_key(&fwd));
}

#[test]
fn status_is_ready_exactly_when_a_ready_slot_is_held() {
    let (mut p, game) = planner_with(&[
        Position::Goalie,
        Position::Forward,
        Position::Forward,
        Position::Defender,
    ]);
    let ids: Vec<PlayerId> = p.team.iter().map(|pl| pl.id).collect();

    set_player_status(&mut p, game, ids[0], Some(PlayerStatus::Ready)).unwrap();
    set_player_status(&mut p, game, ids[1], Some(PlayerStatus::Ready)).unwrap();
    set_player_status(&mut p, game, ids[2], Some(PlayerStatus::Doubtful)).unwrap();
    set_player_status(&mut p, game, ids[1], Some(PlayerStatus::NotReady)).unwrap();

    let g = p.game(game).unwrap();
    for id in &ids {
        let marked_ready = g.player_statuses.get(id) == Some(&PlayerStatus::Ready);
        assert_eq!(marked_ready, g.ready_players.contains(*id));
    }
}

#[test]
fn unknown_player_and_game_are_not_found() {
    let (mut p, game) = planner_with(&[Position::Forward]);
    let fwd = player_id(&p, 0);
    let nobody = uuid::Uuid::new_v4();

    assert!(matches!(
        set_player_status(&mut p, game, nobody, Some(PlayerStatus::Ready)),
        Err(PlannerError::PlayerNotFound(_))
    ));
    assert!(matches!(
        set_player_status(&mut p, nobody, fwd, Some(PlayerStatus::Ready)),
        Err(PlannerError::GameNotFound(_))
    ));
}
