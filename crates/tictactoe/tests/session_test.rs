//! End-to-end tests for the terminal front end.

use std::io::{Cursor, Write};
use tictactoe::{GameConfig, Presenter, Session, coordinator_from, replay};
use tictactoe_engine::{GamePhase, Line, PlayerSlot, Symbol};

#[test]
fn test_config_names_reach_the_board() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_player = \"Ada\"\nsecond_player = \"Grace\"").unwrap();
    let config = GameConfig::load(file.path()).unwrap();

    let game = coordinator_from(&config);
    assert_eq!(game.player(PlayerSlot::First).name(), "Ada");
    assert_eq!(game.player(PlayerSlot::Second).name(), "Grace");
}

#[test]
fn test_two_games_with_restart_in_between() {
    let script = "\
00
10
01
11
02
restart
11
00
22
02
20
01
score
quit
";
    let mut session = Session::new(
        coordinator_from(&GameConfig::new("Ada".into(), "Grace".into(), true)),
        Presenter::new(true),
        Cursor::new(script),
        Vec::new(),
    );
    session.run().unwrap();

    let game = session.game().clone();
    let output = String::from_utf8(session.into_output()).unwrap();

    assert!(output.contains("Ada wins with the top row!"));
    assert!(output.contains('\x07'));
    assert_eq!(game.player(PlayerSlot::First).name(), "Grace");
    assert_eq!(game.phase(), GamePhase::Won(Symbol::O, Line::Row0));
    assert!(output.contains("Grace (X): 0 won, 2 lost, 0 drawn"));
    assert!(output.contains("Ada (O): 2 won, 0 lost, 0 drawn"));
}

#[test]
fn test_replay_draw() {
    let mut game = coordinator_from(&GameConfig::default());
    let cells: Vec<String> = ["00", "01", "02", "11", "10", "20", "12", "22", "21"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let mut out = Vec::new();

    let steps = replay(&mut game, &Presenter::new(false), &cells, false, &mut out).unwrap();

    assert_eq!(steps.len(), 9);
    assert_eq!(game.phase(), GamePhase::Drawn);
    let text = String::from_utf8(out).unwrap();
    assert!(text.trim_end().ends_with("Draw!"));
}
