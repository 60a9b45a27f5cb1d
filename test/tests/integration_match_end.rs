/// Integration tests for the end-of-match commit and server log
/// The final commit happens exactly once and the log matches the ranking

use ctc_client::Replica;
use ctc_server::{CtcServer, MatchEvent};
use ctc_shared::{format_clock, PlayerId, Position};
use ctc_test::{init_logger, test_config, test_map, LocalLink, TestRoster};

fn setup() -> (CtcServer, TestRoster, [PlayerId; 3]) {
    init_logger();
    let mut roster = TestRoster::new();
    let players = [
        roster.add(1, "ann"),
        roster.add(2, "bob"),
        roster.add(3, "cid"),
    ];
    let mut server = CtcServer::new(test_config(), test_map());
    for player_id in players {
        server.on_player_joined(player_id);
    }
    (server, roster, players)
}

#[test]
fn open_interval_is_committed_at_match_end() {
    let (mut server, roster, [ann, bob, _]) = setup();
    server.on_pickup(&roster, ann);
    server.tick(1.25);
    server.on_voluntary_drop(ann, Position::new(5.0, 5.0));
    server.on_pickup(&roster, bob);
    server.tick(2.5);

    let lines = server.finish_match(&roster);

    let bob_entry = server.ledger().get(&bob).unwrap();
    assert_eq!(bob_entry.total_time(), 2.5);
    assert!(!bob_entry.has_open_interval());
    assert_eq!(lines, vec!["bob: 00:02.500", "ann: 00:01.250", "cid: 00:00.000"]);
}

#[test]
fn finishing_twice_changes_nothing() {
    let (mut server, roster, [ann, _, _]) = setup();
    server.on_pickup(&roster, ann);
    server.tick(0.75);

    let first_lines = server.finish_match(&roster);
    let first_ranking = server.ranking();
    let second_lines = server.finish_match(&roster);
    let second_ranking = server.ranking();

    assert_eq!(first_lines, second_lines);
    assert_eq!(first_ranking, second_ranking);
    assert!(server.ledger().open_entry().is_none());
}

#[test]
fn log_lines_follow_ranking() {
    let (mut server, roster, [ann, bob, cid]) = setup();
    server.on_pickup(&roster, cid);
    server.tick(4.0);
    server.on_voluntary_drop(cid, Position::new(0.0, 0.0));
    server.on_pickup(&roster, ann);
    server.tick(1.0);
    server.on_player_died(ann, Position::new(1.0, 1.0));

    let lines = server.finish_match(&roster);
    let ranking = server.ranking();

    assert_eq!(ranking.len(), lines.len());
    for (entry, line) in ranking.iter().zip(lines.iter()) {
        let name = roster_name(&entry.player_id, [ann, bob, cid]);
        assert_eq!(*line, format!("{}: {}", name, format_clock(entry.display_time)));
    }
    // ann's run ended in death, so ann and bob tie at zero in join order
    assert_eq!(lines, vec!["cid: 00:04.000", "ann: 00:00.000", "bob: 00:00.000"]);
}

fn roster_name(player_id: &PlayerId, [ann, bob, _]: [PlayerId; 3]) -> &'static str {
    if *player_id == ann {
        "ann"
    } else if *player_id == bob {
        "bob"
    } else {
        "cid"
    }
}

#[test]
fn replicas_receive_final_committed_values() {
    let (mut server, roster, players) = setup();
    let mut link = LocalLink::new();
    let connection = link.connect();
    let mut replica = Replica::new(test_map());
    for player_id in players {
        replica.add_player(player_id);
    }

    server.queue_event(MatchEvent::Pickup(players[1]));
    for _ in 0..20 {
        let outgoing = server.update(&roster, 0.1);
        link.broadcast(&outgoing);
    }
    server.finish_match(&roster);
    link.broadcast(&server.take_outgoing());
    link.deliver(connection, &mut replica);

    let host_total = server.ledger().get(&players[1]).unwrap().total_time();
    let shown = replica.ledger().get(&players[1]).unwrap().total_time();
    assert!((host_total - shown).abs() < 0.002);
    assert_eq!(replica.coin().position(), Some(test_map().coin_origin));
}

#[test]
fn finished_match_ignores_ticks_and_events() {
    let (mut server, roster, [ann, _, _]) = setup();
    server.finish_match(&roster);
    server.take_outgoing();

    server.queue_event(MatchEvent::Pickup(ann));
    let outgoing = server.update(&roster, 1.0);

    assert!(outgoing.is_empty());
    assert_eq!(server.coin().carrier(), None);
    assert_eq!(server.now(), 0.0);
}
