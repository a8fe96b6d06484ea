use super::*;

#[test]
fn parses_single_name_search() {
    let cli =
        Cli::try_parse_from(["chdist", "search", "Architect"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Search {
            ref names,
            location: None,
            nearest_first: false,
            keep_going: false,
        } if names == &["Architect".to_string()]
    ));
}

#[test]
fn parses_multiple_names_in_order() {
    let cli = Cli::try_parse_from(["chdist", "search", "Architect", "Architects", "Architecture"])
        .expect("expected valid cli args");

    let Commands::Search { names, .. } = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(names, ["Architect", "Architects", "Architecture"]);
}

#[test]
fn parses_location_and_flags() {
    let cli = Cli::try_parse_from([
        "chdist",
        "search",
        "Acme",
        "--location",
        "Bristol",
        "--nearest-first",
        "--keep-going",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Search {
            location: Some(ref l),
            nearest_first: true,
            keep_going: true,
            ..
        } if l == "Bristol"
    ));
}

#[test]
fn search_requires_a_name() {
    assert!(Cli::try_parse_from(["chdist", "search"]).is_err());
}

#[test]
fn parses_config_command() {
    let cli = Cli::try_parse_from(["chdist", "config"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(Cli::try_parse_from(["chdist"]).is_err());
}
