use crate::cli::Cli;
use crate::commands::Commands;
use crate::list_commands::ListCommands;
use crate::report_commands::ReportCommands;

use clap::Parser;

#[test]
fn given_sighting_without_confidence_when_parsed_then_defaults_to_medium() {
    // Given
    let args = [
        "mf", "report", "sighting", "--date", "2024-01-01", "--time", "09:00", "--location",
        "Main St", "--description", "Seen walking", "--contact-info", "a@b.com",
    ];

    // When
    let cli = Cli::try_parse_from(args).unwrap();

    // Then
    match cli.command {
        Commands::Report {
            action:
                ReportCommands::Sighting {
                    person_name,
                    confidence,
                    photo,
                    ..
                },
        } => {
            assert_eq!(person_name, None);
            assert_eq!(confidence, "medium");
            assert_eq!(photo, None);
        }
        _ => panic!("expected report sighting"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    // Given
    let args = ["mf", "list", "missing-persons", "--status", "found", "--demo", "--pretty"];

    // When
    let cli = Cli::try_parse_from(args).unwrap();

    // Then
    assert!(cli.demo);
    assert!(cli.pretty);
    match cli.command {
        Commands::List {
            action: ListCommands::MissingPersons { query, status },
        } => {
            assert_eq!(query, "");
            assert_eq!(status, "found");
        }
        _ => panic!("expected list missing-persons"),
    }
}

#[test]
fn given_register_without_terms_flag_when_parsed_then_terms_not_accepted() {
    // Given
    let args = [
        "mf", "register", "--first-name", "Grace", "--last-name", "Hopper", "--email",
        "grace@example.com", "--password", "secret1", "--confirm-password", "secret1",
    ];

    // When
    let cli = Cli::try_parse_from(args).unwrap();

    // Then
    match cli.command {
        Commands::Register { accept_terms, .. } => assert!(!accept_terms),
        _ => panic!("expected register"),
    }
}

#[test]
fn given_missing_required_arg_when_parsed_then_error() {
    // Given
    let args = ["mf", "login", "--email", "jane@example.com"];

    // When
    let result = Cli::try_parse_from(args);

    // Then
    assert!(result.is_err());
}

#[test]
fn given_preview_without_path_when_parsed_then_dev_index() {
    // When
    let cli = Cli::try_parse_from(["mf", "preview"]).unwrap();

    // Then
    match cli.command {
        Commands::Preview { path } => assert_eq!(path, "/dev"),
        _ => panic!("expected preview"),
    }
}
