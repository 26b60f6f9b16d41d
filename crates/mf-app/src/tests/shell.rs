use crate::shell::{DevPreview, NavMenu, Route, RouteTable, Shell, notification_badge, sign_out};
use crate::workflow::Redirect;

use mf_core::{SignUpProfile, UserAccount};
use mf_gateway::{AuthContext, Gateway, MemoryGateway, Operation, Session};

use std::time::Duration;

use uuid::Uuid;

fn session() -> Session {
    Session {
        access_token: "token".to_string(),
        refresh_token: None,
        expires_at: None,
        user: UserAccount {
            id: Uuid::from_u128(7),
            email: "jane.doe@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        },
    }
}

#[test]
fn given_public_table_when_known_paths_resolved_then_matching_routes() {
    // Given
    let table = RouteTable::new(false);

    // When / Then
    for route in Route::PUBLIC {
        assert_eq!(table.resolve(route.path()), route);
        assert!(table.is_mounted(route.path()));
    }
}

#[test]
fn given_unknown_path_when_resolved_then_home() {
    // Given
    let table = RouteTable::new(false);

    // When
    let route = table.resolve("/no/such/page");

    // Then
    assert_eq!(route, Route::Home);
    assert!(!table.is_mounted("/no/such/page"));
}

#[test]
fn given_trailing_slash_and_query_when_resolved_then_normalized() {
    // Given
    let table = RouteTable::new(false);

    // When / Then
    assert_eq!(table.resolve("/missing-persons/?q=anna"), Route::MissingPersons);
    assert_eq!(table.resolve("/report#sighting"), Route::Report);
    assert_eq!(table.resolve(""), Route::Home);
}

#[test]
fn given_dev_routes_off_when_dev_path_resolved_then_catch_all() {
    // Given
    let table = RouteTable::new(false);

    // When
    let route = table.resolve("/dev/navbar");

    // Then
    assert_eq!(route, Route::Home);
    assert!(table.routes().iter().all(|r| !r.is_dev()));
}

#[test]
fn given_dev_routes_on_when_dev_paths_resolved_then_previews_mounted() {
    // Given
    let table = RouteTable::new(true);

    // When / Then
    assert_eq!(
        table.resolve("/dev/navbar"),
        Route::Dev(DevPreview::Navbar)
    );
    assert_eq!(table.resolve("/dev/unknown"), Route::Dev(DevPreview::Index));
    assert_eq!(table.routes().len(), Route::PUBLIC.len() + DevPreview::ALL.len());
}

#[test]
fn given_signed_out_when_menu_built_then_login_and_register() {
    // Given
    let auth = AuthContext::new();

    // When
    let menu = NavMenu::for_auth(&auth).with_notifications(3);

    // Then
    let primary: Vec<&str> = menu.primary.iter().map(|l| l.label).collect();
    let guest: Vec<&str> = menu.guest.iter().map(|l| l.label).collect();
    assert_eq!(primary, vec!["Home", "Map", "Report", "About"]);
    assert_eq!(guest, vec!["Login", "Register"]);
    assert!(menu.user.is_none());
}

#[test]
fn given_signed_in_when_menu_built_then_user_menu_with_initials() {
    // Given
    let auth = AuthContext::with_session(session());

    // When
    let menu = NavMenu::for_auth(&auth).with_notifications(4);

    // Then
    let user = menu.user.unwrap();
    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.initials, "JD");
    assert_eq!(user.notifications.as_deref(), Some("4"));
    let items: Vec<&str> = user.items.iter().map(|l| l.label).collect();
    assert_eq!(items, vec!["Profile", "Dashboard", "Settings", "Logout"]);
    assert!(menu.guest.is_empty());
}

#[test]
fn given_counts_when_badged_then_capped_at_nine_plus() {
    assert_eq!(notification_badge(0), None);
    assert_eq!(notification_badge(9).as_deref(), Some("9"));
    assert_eq!(notification_badge(10).as_deref(), Some("9+"));
}

#[tokio::test]
async fn given_session_when_signed_out_then_gateway_called_and_context_cleared() {
    // Given
    let gateway = MemoryGateway::new();
    let auth = AuthContext::with_session(session());

    // When
    sign_out(&gateway, &auth).await.unwrap();

    // Then
    assert_eq!(gateway.calls(Operation::SignOut), 1);
    assert!(!auth.is_signed_in());
}

#[tokio::test]
async fn given_gateway_failure_when_signed_out_then_context_still_cleared() {
    // Given
    let gateway = MemoryGateway::new();
    gateway.fail_next(Operation::SignOut, "network error");
    let auth = AuthContext::with_session(session());

    // When
    let result = sign_out(&gateway, &auth).await;

    // Then
    assert!(result.is_err());
    assert!(!auth.is_signed_in());
}

#[tokio::test]
async fn given_shell_when_navigating_then_current_route_tracks_path() {
    // Given
    let mut shell = Shell::new(RouteTable::new(false), AuthContext::new());

    // When
    let route = shell.navigate("/sightings");

    // Then
    assert_eq!(route, Route::Sightings);
    assert_eq!(shell.current(), Route::Sightings);
}

#[tokio::test(start_paused = true)]
async fn given_redirect_when_followed_then_shell_lands_on_target() {
    // Given
    let mut shell = Shell::new(RouteTable::new(false), AuthContext::new());
    shell.navigate("/register");
    let redirect = Redirect::new(Route::Login, Duration::from_secs(5));

    // When
    let route = shell.follow(redirect).await;

    // Then
    assert_eq!(route, Route::Login);
    assert_eq!(shell.current(), Route::Login);
}

#[tokio::test]
async fn given_signed_in_shell_when_sign_out_then_menu_switches_to_guest() {
    // Given
    let gateway = MemoryGateway::new();
    gateway
        .sign_up(
            "jane.doe@example.com",
            "hunter22",
            &SignUpProfile {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
            },
        )
        .await
        .unwrap();
    let auth = AuthContext::new();
    auth.establish(gateway.sign_in("jane.doe@example.com", "hunter22").await.unwrap());
    let mut shell = Shell::new(RouteTable::new(false), auth);
    shell.navigate("/report");
    assert!(shell.nav_menu().user.is_some());

    // When
    shell.sign_out(&gateway).await.unwrap();

    // Then
    assert_eq!(shell.current(), Route::Home);
    assert!(shell.nav_menu().user.is_none());
    assert!(!shell.auth().is_signed_in());
}
