//! Integration tests for the printable game sheet projection.

use hockey_lineup_web::{
    assign_to_lineup, game_sheet, set_player_status, Planner, PlayerStatus, Position,
};

#[test]
fn sheet_orders_ready_players_by_slot_goalie_first() {
    let mut planner = Planner::new();
    let fwd = planner.add_player("Forward", 10, Position::Forward).unwrap();
    let goalie = planner.add_player("Goalie", 1, Position::Goalie).unwrap();
    let game = planner.create_game();
    // Forward becomes ready first but the goalie still prints first (slot 0).
    set_player_status(&mut planner, game, fwd, Some(PlayerStatus::Ready)).unwrap();
    set_player_status(&mut planner, game, goalie, Some(PlayerStatus::Ready)).unwrap();

    let sheet = game_sheet(planner.game(game).unwrap());

    let names: Vec<&str> = sheet.roster.iter().map(|e| e.player.name.as_str()).collect();
    assert_eq!(names, ["Goalie", "Forward"]);
    assert_eq!(sheet.roster[0].order, 1);
    assert_eq!(sheet.roster[0].player.position, "G");
    assert_eq!(sheet.roster[1].order, 2);
}

#[test]
fn sheet_groups_lines_into_forward_and_defender_sub_slots() {
    let mut planner = Planner::new();
    let goalie = planner.add_player("Net", 1, Position::Goalie).unwrap();
    let wing = planner.add_player("Wing", 10, Position::Forward).unwrap();
    let back = planner.add_player("Back", 4, Position::Defender).unwrap();
    let game = planner.create_game();
    for id in [goalie, wing, back] {
        set_player_status(&mut planner, game, id, Some(PlayerStatus::Ready)).unwrap();
    }
    assign_to_lineup(&mut planner, game, 0, goalie).unwrap();
    // Line 2 spans slots 6-10: forwards 6-8, defenders 9-10.
    assign_to_lineup(&mut planner, game, 6, wing).unwrap();
    assign_to_lineup(&mut planner, game, 9, back).unwrap();

    let sheet = game_sheet(planner.game(game).unwrap());

    assert_eq!(sheet.goalie.as_ref().unwrap().name, "Net");
    assert_eq!(sheet.lines.len(), 3);
    let line2 = &sheet.lines[1];
    assert_eq!(line2.line, 2);
    assert_eq!(line2.forwards.len(), 3);
    assert_eq!(line2.defenders.len(), 2);
    assert_eq!(line2.forwards[0].as_ref().unwrap().name, "Wing");
    assert!(line2.forwards[1].is_none());
    assert_eq!(line2.defenders[0].as_ref().unwrap().name, "Back");
    // Untouched lines are all empty slots.
    assert!(sheet.lines[0].forwards.iter().all(Option::is_none));
    assert!(sheet.lines[0].defenders.iter().all(Option::is_none));
}

#[test]
fn sheet_of_a_fresh_game_is_empty_and_building_it_mutates_nothing() {
    let mut planner = Planner::new();
    let game = planner.create_game();
    let before = planner.game(game).unwrap().clone();

    let sheet = game_sheet(planner.game(game).unwrap());

    assert!(sheet.roster.is_empty());
    assert!(sheet.goalie.is_none());
    assert_eq!(*planner.game(game).unwrap(), before);
}
