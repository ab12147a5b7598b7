//! Test the shell's data flow without a terminal: input actions in, router
//! and layout state out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use smartfin::core::{Action, MemoryRouter, NavigateTarget, PanelState, Router};
use smartfin::input::key_to_action;
use smartfin::menu::builtin;
use smartfin::App;

fn shell(start: &str) -> App {
    App::new(
        builtin::smartfin_menu().expect("builtin menu"),
        MemoryRouter::new(start),
        "SmartFin-Go",
        "Created by FinTech Team",
    )
}

fn press(app: &mut App, code: KeyCode) {
    app.apply_action(key_to_action(KeyEvent::new(code, KeyModifiers::NONE)));
}

#[test]
fn test_mount_on_nested_route_opens_group() {
    let app = shell("/transactions");
    let view = app.view();

    assert_eq!(view.panel, PanelState::Expanded);
    assert_eq!(view.active_keys.len(), 1);
    assert_eq!(view.active_keys[0].as_str(), builtin::TRANSACTIONS);
    assert_eq!(view.trail(), ["SmartFin-Go", "资产分析", "流水明细"]);

    let keys: Vec<&str> = view.rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, ["1", "2", "sub1", "3", "4", "9"]);
    assert_eq!(view.rows[view.cursor].key.as_str(), builtin::TRANSACTIONS);
}

#[test]
fn test_keyboard_session() {
    let mut app = shell("/");

    // Down to 交易中心 and open it
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current_location(), "/trade");

    // Down to the group header: Enter toggles it open, no navigation
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current_location(), "/trade");
    assert!(app.layout.is_open(builtin::ASSET_ANALYSIS));

    // Into the group, open 流水明细
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current_location(), "/transactions");
    assert_eq!(app.view().breadcrumb, ["资产分析", "流水明细"]);

    // History
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.layout.location, "/trade");
    assert_eq!(app.router.history(), ["/", "/trade"]);

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_sider_collapse_keeps_route_state() {
    let mut app = shell("/assets");
    let before = app.view();

    press(&mut app, KeyCode::Char('['));
    let collapsed = app.view();
    assert_eq!(collapsed.panel, PanelState::Collapsed);
    assert_eq!(collapsed.rows.len(), 4);
    assert_eq!(collapsed.breadcrumb, before.breadcrumb);
    assert_eq!(collapsed.active_keys, before.active_keys);

    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.view().panel, PanelState::Expanded);
    assert_eq!(app.view().rows.len(), 6);
}

#[test]
fn test_external_navigation_is_picked_up() {
    let mut app = shell("/");
    app.apply_action(Action::Navigate(NavigateTarget::Path(
        "/ai-research?ref=mail".to_string(),
    )));

    let view = app.view();
    assert_eq!(view.location, "/ai-research");
    assert_eq!(view.trail(), ["SmartFin-Go", "AI 投研"]);
}

#[test]
fn test_clicking_missing_key_is_silent() {
    let mut app = shell("/trade");
    let before = app.view();
    app.apply_action(Action::Click("ghost".into()));
    assert_eq!(app.view(), before);
    assert_eq!(app.router.history(), ["/trade"]);
}

#[test]
fn test_snapshot_serializes() {
    let app = shell("/assets");
    let json = serde_json::to_value(app.view()).unwrap();
    assert_eq!(json["panel"], "expanded");
    assert_eq!(json["active_keys"][0], "3");
    assert_eq!(json["breadcrumb"][1], "持仓概览");
    assert_eq!(json["rows"][2]["kind"], "group");
}

#[test]
fn test_enter_after_sider_toggle_opens_selected_row() {
    let mut app = shell("/assets");

    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::End);
    press(&mut app, KeyCode::Char('['));
    let view = app.view();
    assert_eq!(view.rows[view.cursor].key.as_str(), builtin::AI_RESEARCH);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.router.current_location(), "/ai-research");
}
