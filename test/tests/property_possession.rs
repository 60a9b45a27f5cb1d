/// PROPERTY-BASED TESTS: possession time invariants
///
/// Key invariants:
/// 1. A carrier's in-flight time is the sum of the ticks since pickup
/// 2. Equal possession times keep join order on the leaderboard
/// 3. A replica fed every flush holds exactly the host's wire value

use proptest::prelude::*;

use ctc_client::Replica;
use ctc_server::{CtcServer, MatchEvent};
use ctc_shared::{CtcMessage, PlayerId, Position};
use ctc_test::{test_config, test_map, TestRoster};

#[derive(Clone, Debug)]
enum Op {
    Pickup(u16),
    Drop(u16),
    Die(u16),
    Tick(f64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u16..=4).prop_map(Op::Pickup),
        (1u16..=4).prop_map(Op::Drop),
        (1u16..=4).prop_map(Op::Die),
        (0.001f64..0.5).prop_map(Op::Tick),
        (0.001f64..0.5).prop_map(Op::Tick),
    ]
}

fn roster(count: u16) -> TestRoster {
    let mut roster = TestRoster::new();
    for id in 1..=count {
        roster.add(id, &format!("p{}", id));
    }
    roster
}

proptest! {
    #[test]
    fn prop_current_time_is_sum_of_ticks(ticks in prop::collection::vec(0.0001f64..2.0, 1..200)) {
        let roster = roster(1);
        let player = PlayerId::new(1);
        let mut server = CtcServer::new(test_config(), test_map());
        server.on_player_joined(player);
        prop_assert!(server.on_pickup(&roster, player));

        let mut expected = 0.0;
        for elapsed in &ticks {
            server.tick(*elapsed);
            expected += *elapsed;
        }

        let current = server.ledger().get(&player).unwrap().current_time();
        prop_assert!((current - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_ties_keep_join_order(
        count in 2u16..8,
        idle_ticks in prop::collection::vec(0.01f64..3.0, 0..40),
    ) {
        let roster = roster(count);
        let mut server = CtcServer::new(test_config(), test_map());
        for id in 1..=count {
            server.on_player_joined(PlayerId::new(id));
        }
        for id in 1..=count {
            let player = PlayerId::new(id);
            server.on_pickup(&roster, player);
            server.tick(1.0);
            server.on_voluntary_drop(player, Position::new(1.0, 1.0));
        }

        let expected: Vec<u16> = (1..=count).collect();
        for elapsed in idle_ticks {
            server.tick(elapsed);
            let order: Vec<u16> = server.ranking().iter().map(|entry| entry.player_id.value()).collect();
            prop_assert_eq!(&order, &expected);
        }
    }

    #[test]
    fn prop_replica_holds_host_wire_value(ops in prop::collection::vec(op_strategy(), 1..120)) {
        let roster = roster(4);
        let mut server = CtcServer::new(test_config(), test_map());
        let mut replica = Replica::new(test_map());
        for id in 1..=4 {
            server.queue_event(MatchEvent::Joined(PlayerId::new(id)));
            replica.add_player(PlayerId::new(id));
        }

        for op in ops {
            let elapsed = match op {
                Op::Pickup(id) => {
                    server.queue_event(MatchEvent::Pickup(PlayerId::new(id)));
                    0.0
                }
                Op::Drop(id) => {
                    server.queue_event(MatchEvent::VoluntaryDrop {
                        player_id: PlayerId::new(id),
                        position: Position::new(f32::from(id) * 10.0, 5.0),
                    });
                    0.0
                }
                Op::Die(id) => {
                    server.queue_event(MatchEvent::Died {
                        player_id: PlayerId::new(id),
                        last_position: Position::new(5.0, f32::from(id) * 10.0),
                    });
                    0.0
                }
                Op::Tick(elapsed) => elapsed,
            };

            for message in server.update(&roster, elapsed) {
                let bytes = message.to_bytes();
                prop_assert_eq!(CtcMessage::from_bytes(&bytes), Ok(message));
                prop_assert!(replica.receive(&bytes).is_ok());
            }

            for entry in server.ledger().iter() {
                let mirrored = replica.ledger().get(&entry.player_id()).unwrap();
                prop_assert_eq!(mirrored.last_broadcast_value(), entry.last_broadcast_value());
            }
            prop_assert_eq!(replica.coin().carrier(), server.coin().carrier());
        }
    }
}
