use folio_common::route::Route;
use folio_engine::session::{Navigator, Session, PROMPT_PREFIX, QUICK_ACTIONS};

#[derive(Default)]
struct RecordingNavigator {
    visited: Vec<Route>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, route: Route) {
        self.visited.push(route);
    }
}

#[test]
fn submission_appends_echo_then_output_in_order() {
    let mut session = Session::bare();
    let mut nav = RecordingNavigator::default();

    session.submit(&mut nav, "ls");
    session.submit(&mut nav, "help");

    let log = session.scrollback();
    assert_eq!(log[0], format!("{PROMPT_PREFIX} ls"));
    assert_eq!(log[1], "The available paths are:");
    // The second echo sits directly after the first command's output.
    let second_echo = log
        .iter()
        .position(|l| l == &format!("{PROMPT_PREFIX} help"))
        .expect("second echo present");
    assert!(log[second_echo + 1].contains("Available Commands") || log[second_echo + 1].starts_with('┌'));
    // ls output fully precedes the second echo.
    assert!(log[second_echo - 1].contains("/contact"));
}

#[test]
fn clear_discards_everything_including_its_own_echo() {
    let mut session = Session::bare();
    let mut nav = RecordingNavigator::default();

    session.submit(&mut nav, "ls");
    session.submit(&mut nav, "help");
    assert!(!session.scrollback().is_empty());

    session.submit(&mut nav, "clear");
    assert_eq!(session.scrollback().len(), 0);
}

#[test]
fn banner_session_also_clears_to_empty() {
    let mut session = Session::new();
    let mut nav = RecordingNavigator::default();
    assert!(!session.scrollback().is_empty());

    session.submit(&mut nav, "clear");
    assert_eq!(session.scrollback().len(), 0);
}

#[test]
fn navigation_fires_exactly_once_per_submission() {
    let mut session = Session::bare();
    let mut nav = RecordingNavigator::default();

    session.submit(&mut nav, "cd /projects");
    assert_eq!(nav.visited, vec![Route::Projects]);

    session.submit(&mut nav, "cd /nowhere");
    session.submit(&mut nav, "ls");
    assert_eq!(nav.visited, vec![Route::Projects]);
}

#[test]
fn failed_cd_still_echoes_into_scrollback() {
    let mut session = Session::bare();
    let mut nav = RecordingNavigator::default();

    session.submit(&mut nav, "cd /nowhere");
    let log = session.scrollback();
    assert_eq!(log[0], format!("{PROMPT_PREFIX} cd /nowhere"));
    assert_eq!(log[1], "cd: no such file or directory: /nowhere");
}

#[test]
fn input_buffer_resets_after_every_submission() {
    let mut session = Session::bare();
    let mut nav = RecordingNavigator::default();

    session.set_input("help");
    session.submit_input(&mut nav);
    assert_eq!(session.input(), "");

    session.set_input("no-such-command");
    session.submit_input(&mut nav);
    assert_eq!(session.input(), "");
}

#[test]
fn quick_actions_match_typed_submissions() {
    for (_, preset) in QUICK_ACTIONS {
        let mut typed = Session::bare();
        let mut via_preset = Session::bare();
        let mut nav_a = RecordingNavigator::default();
        let mut nav_b = RecordingNavigator::default();

        let a = typed.submit(&mut nav_a, preset);
        let b = via_preset.submit(&mut nav_b, preset);

        assert_eq!(a, b);
        assert_eq!(typed.scrollback(), via_preset.scrollback());
        assert_eq!(nav_a.visited, nav_b.visited);
    }
}

#[test]
fn end_to_end_examples() {
    let mut session = Session::bare();
    let mut nav = RecordingNavigator::default();

    let res = session.submit(&mut nav, "cd /projects");
    assert_eq!(res.output, vec!["Navigating to /projects..."]);
    assert_eq!(res.navigation, Some(Route::Projects));

    let res = session.submit(&mut nav, "cd /nowhere");
    assert_eq!(res.output, vec!["cd: no such file or directory: /nowhere"]);
    assert_eq!(res.navigation, None);

    let res = session.submit(&mut nav, "");
    assert!(res.output.is_empty());

    let upper = session.submit(&mut nav, "CD /about");
    let lower = session.submit(&mut nav, "cd /about");
    assert_eq!(upper, lower);

    let res = session.submit(&mut nav, "foo bar");
    assert_eq!(
        res.output,
        vec!["  Command not found: foo bar. Type \"help\" for available commands."]
    );
}
