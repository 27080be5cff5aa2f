use folio_common::route::Route;
use folio_parser::interpret;

#[test]
fn test_whitespace_only_is_a_noop() {
    for input in ["", " ", "\t", "   \t  ", "\n"] {
        let result = interpret(input);
        assert!(result.output.is_empty(), "input {input:?}");
        assert!(!result.should_clear);
        assert!(result.navigation.is_none());
    }
}

#[test]
fn test_clear_ignores_trailing_arguments() {
    for input in ["clear", "clear now", "CLEAR --hard"] {
        let result = interpret(input);
        assert!(result.output.is_empty());
        assert!(result.should_clear);
        assert!(result.navigation.is_none());
    }
}

#[test]
fn test_cd_navigates_to_every_listed_path() {
    for path in ["/about", "/projects", "/experiences", "/contact", "/"] {
        let result = interpret(&format!("cd {path}"));
        assert_eq!(result.navigation, Route::parse(path));
        assert_eq!(result.output, vec![format!("Navigating to {path}...")]);
        assert!(!result.should_clear);
    }
}

#[test]
fn test_cd_rejects_unlisted_paths_verbatim() {
    for path in ["/nowhere", "/about/", "/ABOUT", "about", "/abo", ".."] {
        let result = interpret(&format!("cd {path}"));
        assert!(result.navigation.is_none(), "path {path:?}");
        assert_eq!(
            result.output,
            vec![format!("cd: no such file or directory: {path}")]
        );
    }
}

#[test]
fn test_cd_without_arguments_prints_usage() {
    let result = interpret("cd");
    assert!(result.navigation.is_none());
    assert_eq!(result.output, vec!["Usage: cd <path> (e.g., cd /about)"]);
}

#[test]
fn test_unrecognized_command_echoes_input() {
    let result = interpret("foo bar");
    assert!(result.navigation.is_none());
    assert!(!result.should_clear);
    assert_eq!(
        result.output,
        vec!["  Command not found: foo bar. Type \"help\" for available commands."]
    );
}

#[test]
fn test_command_name_is_case_insensitive() {
    assert_eq!(interpret("CD /about"), interpret("cd /about"));
    assert_eq!(interpret("HELP"), interpret("help"));
    assert_eq!(interpret("Getting-Started"), interpret("start"));
}

#[test]
fn test_help_lists_every_command() {
    let result = interpret("help");
    let text = result.output.join("\n");
    for name in [
        "help",
        "clear",
        "ls",
        "cd <path>",
        "about",
        "projects",
        "contact",
        "start",
        "experiences",
    ] {
        assert!(text.contains(name), "help text missing {name:?}");
    }
}

#[test]
fn test_ls_lists_the_four_navigable_paths() {
    let result = interpret("ls");
    let text = result.output.join("\n");
    for path in ["/about", "/projects", "/experiences", "/contact"] {
        assert!(text.contains(path), "ls output missing {path:?}");
    }
    assert!(result.navigation.is_none());
}

#[test]
fn test_work_is_an_alias_of_projects() {
    assert_eq!(interpret("work"), interpret("projects"));
}

#[test]
fn test_pointer_commands_do_not_navigate() {
    for input in ["about", "projects", "work", "experiences", "contact"] {
        let result = interpret(input);
        assert!(result.navigation.is_none(), "input {input:?}");
        assert_eq!(result.output.len(), 1);
    }
}

#[test]
fn test_interpret_is_idempotent() {
    for input in ["help", "cd /projects", "clear", "nonsense", ""] {
        assert_eq!(interpret(input), interpret(input));
    }
}

#[test]
fn test_output_order_is_preserved() {
    let result = interpret("ls");
    assert_eq!(result.output[0], "The available paths are:");
    assert!(result.output[1].contains("/about"));
    assert!(result.output[4].contains("/contact"));
}
