use leap_engine::{
	CloseReason, Command, LeapManager, MatchRange, Position, SearchDirection, SessionEvent,
	SessionStep, Settings,
};
use pretty_assertions::assert_eq;

use crate::common::TestHost;

fn input(text: &str) -> SessionEvent {
	SessionEvent::Input(text.to_owned())
}

#[test]
fn anchor_labels_every_candidate() {
	let mut host = TestHost::new("foo bar\nfoo baz");
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("fo")), Ok(SessionStep::Pending { matches: 2 }));

	let session = leap.session().unwrap();
	assert_eq!(
		session.resolved().iter().map(|m| m.range).collect::<Vec<_>>(),
		vec![
			MatchRange::spanning(Position::new(0, 0), 2),
			MatchRange::spanning(Position::new(1, 0), 2),
		]
	);
	assert_eq!(
		host.labels(),
		vec![(Position::new(0, 2), 's'), (Position::new(1, 2), 'f')]
	);
}

#[test]
fn label_character_jumps_with_custom_alphabet() {
	let mut host = TestHost::new("foo bar\nfoo baz");
	let settings = Settings::parse(r#"custom-labels = ["a", "b"]"#).unwrap();
	let mut leap = LeapManager::new(settings);

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	leap.dispatch(&mut host, input("fo")).unwrap();
	assert_eq!(
		host.labels(),
		vec![(Position::new(0, 2), 'a'), (Position::new(1, 2), 'b')]
	);

	assert_eq!(
		leap.dispatch(&mut host, input("fob")),
		Ok(SessionStep::Jumped(Position::new(1, 0)))
	);
	assert_eq!(host.cursor(), Some(Position::new(1, 0)));
	assert!(host.drawn().is_empty());
	assert!(!leap.is_open());
}

#[test]
fn labels_narrow_progressively() {
	let text = vec!["foo"; 30].join("\n");
	let mut host = TestHost::new(&text);
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("fo")), Ok(SessionStep::Pending { matches: 30 }));
	// 30 candidates with 26 labels: the first digit wraps.
	let labels = host.labels();
	assert_eq!(labels[0], (Position::new(0, 2), 's'));
	assert_eq!(labels[26], (Position::new(26, 2), 's'));
	assert_eq!(labels[29], (Position::new(29, 2), 'j'));

	// 'j' is digit 3: ordinals 3 and 29 remain, relabelled from 's'.
	assert_eq!(leap.dispatch(&mut host, input("foj")), Ok(SessionStep::Pending { matches: 2 }));
	assert_eq!(
		host.labels(),
		vec![(Position::new(3, 3), 's'), (Position::new(29, 3), 'f')]
	);

	// The shown label of line 29 selects it.
	assert_eq!(
		leap.dispatch(&mut host, input("fojf")),
		Ok(SessionStep::Jumped(Position::new(29, 0)))
	);
}

#[test]
fn backspace_restores_wider_match_set() {
	let text = vec!["foo"; 5].join("\n");
	let mut host = TestHost::new(&text);
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("fo")), Ok(SessionStep::Pending { matches: 5 }));
	assert_eq!(leap.dispatch(&mut host, input("f")), Ok(SessionStep::Pending { matches: 5 }));
	assert!(host.labels().is_empty());
	assert_eq!(host.drawn().len(), 5);
	assert_eq!(leap.dispatch(&mut host, input("")), Ok(SessionStep::Pending { matches: 0 }));
	assert!(host.drawn().is_empty());
}

#[test]
fn match_case_toggle_through_command() {
	let mut host = TestHost::new("Foo\nfoo\nFOO");
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("Fo")), Ok(SessionStep::Pending { matches: 3 }));
	assert_eq!(
		leap.execute(&mut host, Command::ToggleMatchCase),
		Ok(SessionStep::Jumped(Position::new(0, 0)))
	);
}

#[test]
fn whitespace_policy_from_settings() {
	let source = "ab   cd\nef  \n";
	let only_new_line = Settings::parse("white-spaces-only-match-new-line = true").unwrap();

	let mut host = TestHost::new(source);
	let mut leap = LeapManager::default();
	leap.open(&mut host, SearchDirection::Entire).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("  ")), Ok(SessionStep::Pending { matches: 5 }));

	let mut host = TestHost::new(source);
	let mut leap = LeapManager::new(only_new_line);
	leap.open(&mut host, SearchDirection::Entire).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("  ")), Ok(SessionStep::Pending { matches: 3 }));
	assert!(host.drawn().iter().all(|o| o.range.is_empty()));
	assert_eq!(
		host.drawn().iter().map(|o| o.range.start).collect::<Vec<_>>(),
		vec![Position::new(0, 7), Position::new(1, 4), Position::new(2, 0)]
	);
}

#[test]
fn forward_search_skips_text_before_cursor() {
	let mut host = TestHost::new("fo fo\nfo fo\nfo fo").with_cursor(1, 2);
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Forward).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("fo")), Ok(SessionStep::Pending { matches: 3 }));
	assert_eq!(
		leap.session()
			.unwrap()
			.resolved()
			.iter()
			.map(|m| m.range.start)
			.collect::<Vec<_>>(),
		vec![Position::new(1, 3), Position::new(2, 0), Position::new(2, 3)]
	);
}

#[test]
fn backward_search_stops_at_cursor() {
	let mut host = TestHost::new("fo fo\nfo fo\nfo fo").with_cursor(1, 2);
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Backward).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("fo")), Ok(SessionStep::Pending { matches: 3 }));
	assert_eq!(
		leap.session()
			.unwrap()
			.resolved()
			.iter()
			.map(|m| m.range.start)
			.collect::<Vec<_>>(),
		vec![Position::new(0, 0), Position::new(0, 3), Position::new(1, 0)]
	);
}

#[test]
fn search_is_limited_to_visible_lines() {
	let text = vec!["foo"; 10].join("\n");
	let mut host = TestHost::new(&text).with_visible(4, 6).with_cursor(5, 0);
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	assert_eq!(leap.dispatch(&mut host, input("fo")), Ok(SessionStep::Pending { matches: 3 }));
	assert_eq!(
		host.drawn().iter().map(|o| o.range.start.line).collect::<Vec<_>>(),
		vec![4, 5, 6]
	);
}

#[test]
fn cancel_clears_overlays() {
	let mut host = TestHost::new("foo bar\nfoo baz");
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	leap.dispatch(&mut host, input("fo")).unwrap();
	assert_eq!(host.drawn().len(), 2);

	assert_eq!(
		leap.dispatch(&mut host, SessionEvent::Cancel),
		Ok(SessionStep::Closed(CloseReason::Cancel))
	);
	assert!(host.drawn().is_empty());
	assert_eq!(host.cursor(), Some(Position::new(0, 0)));
}

#[test]
fn repeated_input_redraws_without_accumulating() {
	let mut host = TestHost::new("foo bar\nfoo baz");
	let mut leap = LeapManager::default();

	leap.open(&mut host, SearchDirection::Entire).unwrap();
	leap.dispatch(&mut host, input("fo")).unwrap();
	let first = host.drawn();
	leap.dispatch(&mut host, input("fo")).unwrap();

	assert_eq!(host.drawn(), first);
	assert_eq!(host.screen.borrow().presents.get(&1), Some(&2));
}
